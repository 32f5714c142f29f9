//! # Bowlkit Core
//!
//! Core types and utilities shared by the Bowlkit crates:
//! the error taxonomy, millimetre/inch display formatting and the
//! wood colour palette. The geometry engine lives in `bowlkit-designer`.

pub mod error;
pub mod palette;
pub mod units;

pub use error::GeometryError;
pub use palette::{wood_by_color, WoodColor, DEFAULT_COLOR, DEFAULT_WOOD};
pub use units::{format_length, parse_length, MeasurementSystem, MM_PER_INCH};
