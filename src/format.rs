//! Display formatting for dashboard values

use chrono::{Local, TimeZone};

use crate::state::WeatherSnapshot;

/// Round to the nearest integer, halves toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`).
pub fn round_half_up(value: f64) -> i64 {
    // Adding 0.5 first would round 0.49999999999999994 up through float error
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

pub fn temperature(celsius: f64) -> String {
    format!("{}°C", round_half_up(celsius))
}

pub fn wind_speed(meters_per_second: f64) -> String {
    format!("{} m/s", meters_per_second)
}

pub fn pressure(hpa: u32) -> String {
    format!("{} hPa", hpa)
}

pub fn humidity(percent: u32) -> String {
    format!("{}%", percent)
}

/// `"{name}, {country}"`, or the bare name where the country is unknown.
pub fn place(snapshot: &WeatherSnapshot) -> String {
    if snapshot.country.is_empty() {
        snapshot.name.clone()
    } else {
        format!("{}, {}", snapshot.name, snapshot.country)
    }
}

/// `HH:MM` for a UNIX timestamp in the machine's local time zone.
pub fn clock(timestamp: i64) -> String {
    clock_in(timestamp, &Local)
}

/// `HH:MM` for a UNIX timestamp in `tz`. Out-of-range timestamps render as `--:--`.
pub fn clock_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
