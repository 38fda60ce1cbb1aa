//! Daily Weather - current conditions for the device's location
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod effect;
pub mod format;
pub mod icons;
pub mod location;
pub mod reducer;
pub mod sprites;
pub mod state;
