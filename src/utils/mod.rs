//! Configuration and terminal helpers.
//!
//! - [`app_data`] - Config file in the platform data directory (XDG on Linux)
//! - [`progress`] - Spinners, compiled out without the `progress` feature

pub mod app_data;
pub mod progress;

pub use app_data::*;
