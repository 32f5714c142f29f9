//! Bowlkit Settings Crate
//!
//! Handles user preferences: display units, the inch fraction used in
//! reports, saw kerf and the default sampling density for new designs.

pub mod config;
pub mod error;

pub use config::{Config, MeasurementSystem};
pub use error::{SettingsError, SettingsResult};
