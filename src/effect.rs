//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the acquisition sequence; the result is tagged with `generation`
    Refresh { generation: u64 },
}
