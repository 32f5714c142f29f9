//! Command implementations behind the `bowlkit` binary.
//!
//! Each command returns its text output so it can be tested without a
//! terminal.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use bowlkit_core::units::{format_angle_deg, format_length, MeasurementSystem};
use bowlkit_designer::report::{cut_list, format_cut_list};
use bowlkit_designer::serialization::{DesignFile, DesignSettings};
use bowlkit_designer::{calc_ring_trapz, calc_rings, BowlGeometry, BowlProfile};
use bowlkit_settings::Config;
use tracing::{debug, info};

/// Output options for the cut-list report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub system: MeasurementSystem,
    pub step: Option<u32>,
    pub kerf: f64,
}

/// Command-line flags that take precedence over a design's stored settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOverrides {
    pub imperial: bool,
    pub step: Option<u32>,
    pub kerf: Option<f64>,
}

impl ReportOptions {
    /// Units and kerf saved with the design; `config` supplies the inch fraction.
    pub fn for_design(settings: &DesignSettings, config: &Config) -> Self {
        let system = if settings.inch {
            MeasurementSystem::Imperial
        } else {
            MeasurementSystem::Metric
        };
        Self {
            system,
            step: config.fraction_step(system),
            kerf: settings.saw_kerf,
        }
    }

    pub fn with_overrides(mut self, overrides: &ReportOverrides, config: &Config) -> Self {
        if overrides.imperial {
            self.system = MeasurementSystem::Imperial;
            self.step = self.step.or(config.fraction_step(self.system));
        }
        if let Some(step) = overrides.step {
            self.step = Some(step);
        }
        if let Some(kerf) = overrides.kerf {
            self.kerf = kerf;
        }
        self
    }
}

/// Write the default design to `path`
pub fn new_design(path: &Path, name: Option<String>, config: &Config) -> Result<()> {
    let profile = BowlProfile {
        curve_segments: config.default_curve_segments,
        ..BowlProfile::default()
    };
    let settings = DesignSettings {
        inch: config.measurement_system == MeasurementSystem::Imperial,
        saw_kerf: config.saw_kerf,
    };
    DesignFile::new(name, profile, settings).save_to_file(path)?;
    info!("Created design {}", path.display());
    Ok(())
}

fn load_geometry(path: &Path) -> Result<(DesignFile, BowlGeometry)> {
    let design = DesignFile::load_from_file(path)?;
    let geometry = calc_rings(&design.design)
        .with_context(|| format!("Failed to compute rings for {}", path.display()))?;
    Ok((design, geometry))
}

/// Bowl height, radius and the bounds of every used ring
///
/// Lengths use the design's stored units unless `imperial` forces inches.
pub fn rings_summary(path: &Path, imperial: bool) -> Result<String> {
    let (design, geometry) = load_geometry(path)?;
    let system = if imperial || design.settings.inch {
        MeasurementSystem::Imperial
    } else {
        MeasurementSystem::Metric
    };
    let len = |mm: f64| format_length(mm, system, None);

    let mut out = String::new();
    writeln!(out, "Height:     {}", len(geometry.height))?;
    writeln!(out, "Radius:     {}", len(geometry.radius))?;
    writeln!(
        out,
        "Used rings: {} of {}",
        geometry.used_rings,
        geometry.rings.len()
    )?;
    for (index, ring) in geometry.used().iter().enumerate() {
        writeln!(
            out,
            "  ring {:>2}: height {:>10}  segs {:>3}  inner {:>10}  outer {:>10}",
            index,
            len(ring.height),
            ring.segs,
            len(ring.xvals.min),
            len(ring.xvals.max)
        )?;
    }
    Ok(out)
}

/// Segment trapezoid corners of one used ring, in millimetres
pub fn ring_segments(path: &Path, index: usize, rotate: bool) -> Result<String> {
    let (_, geometry) = load_geometry(path)?;
    if index >= geometry.used_rings {
        bail!(
            "Ring {index} is not used; the design spans {} rings",
            geometry.used_rings
        );
    }
    let ring = &geometry.rings[index];
    let result = calc_ring_trapz(ring, index, rotate)?;

    let mut out = String::new();
    for (seg, (trapezoid, start)) in result
        .trapezoids
        .iter()
        .zip(&result.start_angles)
        .enumerate()
    {
        write!(out, "seg {:>2} @ {:>8}:", seg, format_angle_deg(*start))?;
        for corner in &trapezoid.corners {
            write!(out, " ({:.3}, {:.3})", corner.x, corner.y)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "total rotation {}", format_angle_deg(result.total_rotation))?;
    Ok(out)
}

/// Cut list for every used ring
///
/// Starts from the units and saw kerf saved with the design, then applies
/// `overrides`.
pub fn report(path: &Path, config: &Config, overrides: &ReportOverrides) -> Result<String> {
    let (design, geometry) = load_geometry(path)?;
    let options =
        ReportOptions::for_design(&design.settings, config).with_overrides(overrides, config);
    debug!("Report options {options:?}");
    let rows = cut_list(&geometry)?;
    Ok(format_cut_list(
        &rows,
        options.system,
        options.step,
        options.kerf,
    ))
}
