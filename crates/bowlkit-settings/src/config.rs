//! Display preferences for Bowlkit
//!
//! Supports JSON and TOML files; the default location is the platform
//! config directory. The geometry engine never reads these settings, they
//! only shape how results are presented.

pub use bowlkit_core::units::MeasurementSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "bowlkit";
const CONFIG_FILE: &str = "config.toml";

fn default_report_step() -> u32 {
    16
}

fn default_saw_kerf() -> f64 {
    3.0
}

fn default_curve_segments() -> usize {
    50
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
    /// Denominator of the inch fraction used in reports (16 renders 1/16").
    #[serde(default = "default_report_step")]
    pub report_step: u32,
    /// Saw kerf added per segment to strip lengths (mm).
    #[serde(default = "default_saw_kerf")]
    pub saw_kerf: f64,
    /// Samples per bezier span for new designs.
    #[serde(default = "default_curve_segments")]
    pub default_curve_segments: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::default(),
            report_step: default_report_step(),
            saw_kerf: default_saw_kerf(),
            default_curve_segments: default_curve_segments(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file path (`<config dir>/bowlkit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Config = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.report_step == 0 || !self.report_step.is_power_of_two() || self.report_step > 64 {
            return Err(SettingsError::invalid(
                "report_step",
                format!("must be a power of two up to 64, got {}", self.report_step),
            ));
        }

        if !(self.saw_kerf.is_finite() && self.saw_kerf >= 0.0) {
            return Err(SettingsError::invalid(
                "saw_kerf",
                format!("must be non-negative, got {}", self.saw_kerf),
            ));
        }

        if self.default_curve_segments == 0 {
            return Err(SettingsError::invalid(
                "default_curve_segments",
                "must be > 0",
            ));
        }

        Ok(())
    }

    /// Fraction step for imperial output in `system`, `None` for metric
    pub fn fraction_step(&self, system: MeasurementSystem) -> Option<u32> {
        match system {
            MeasurementSystem::Metric => None,
            MeasurementSystem::Imperial => Some(self.report_step),
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}
