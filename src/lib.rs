//! # Bowlkit
//!
//! A segmented bowl designer. A wall profile drawn as cubic-bezier control
//! points becomes a stack of rings, each cut from angled segments.
//!
//! ## Architecture
//!
//! Bowlkit is organized as a workspace with multiple crates:
//!
//! 1. **bowlkit-core** - Error types, unit formatting, wood palette
//! 2. **bowlkit-designer** - Profile, ring and segment geometry; cut lists; design files
//! 3. **bowlkit-settings** - User preferences (units, saw kerf, report fraction)
//! 4. **bowlkit** - Command-line front end that integrates all crates

pub mod commands;

pub use bowlkit_designer as designer;

pub use bowlkit_core::{GeometryError, MeasurementSystem};

pub use bowlkit_designer::{
    calc_ring_trapz, calc_rings, cut_list, BowlGeometry, BowlProfile, ControlPointSet, DesignFile,
    Point, Ring, Viewport,
};

pub use bowlkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so command output on stdout stays clean
/// - RUST_LOG environment variable support (default `info`)
/// - target, level and line numbers on every event
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
