//! Ring records and the default-ring factory.

use bowlkit_core::{GeometryError, DEFAULT_COLOR, DEFAULT_WOOD};
use serde::{Deserialize, Serialize};

/// Smallest segment count that still closes a ring.
pub const MIN_SEGMENTS: usize = 3;

/// Engine-computed radial bounds of a ring, clearance padding included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XVals {
    pub min: f64,
    pub max: f64,
}

impl XVals {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Radial width of the ring blank.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// One horizontal slice of the vessel wall.
///
/// `seglen` holds relative angular widths; they must sum to `segs` for the
/// segments to close a full circle. That sum is kept by the caller and is
/// not checked here. `xvals` is derived and never read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    /// Ring thickness along the vessel axis (mm).
    pub height: f64,
    pub segs: usize,
    pub seglen: Vec<f64>,
    pub clrs: Vec<String>,
    pub wood: Vec<String>,
    /// Twist applied to the whole ring (radians).
    #[serde(default)]
    pub theta: f64,
    #[serde(skip)]
    pub xvals: XVals,
}

impl Ring {
    /// Creates a ring of `segs` equal segments in the default wood.
    pub fn new(height: f64, segs: usize) -> Self {
        Self {
            height,
            segs,
            seglen: vec![1.0; segs],
            clrs: vec![DEFAULT_COLOR.to_string(); segs],
            wood: vec![DEFAULT_WOOD.to_string(); segs],
            theta: 0.0,
            xvals: XVals::default(),
        }
    }

    /// Checks the ring before it enters the geometry pipeline.
    ///
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> Result<(), GeometryError> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(GeometryError::InvalidRingHeight {
                ring: index,
                height: self.height,
            });
        }
        if self.segs < MIN_SEGMENTS {
            return Err(GeometryError::invalid_segments(
                index,
                format!("segs must be at least {MIN_SEGMENTS}, got {}", self.segs),
            ));
        }
        for (name, len) in [
            ("seglen", self.seglen.len()),
            ("clrs", self.clrs.len()),
            ("wood", self.wood.len()),
        ] {
            if len != self.segs {
                return Err(GeometryError::invalid_segments(
                    index,
                    format!("{name} has {len} entries for {} segments", self.segs),
                ));
            }
        }
        // A half-angle of 90 degrees or more has no finite trapezoid
        let limit = self.segs as f64 / 2.0;
        if let Some(bad) = self
            .seglen
            .iter()
            .position(|&w| !(w.is_finite() && w > 0.0 && w < limit))
        {
            return Err(GeometryError::invalid_segments(
                index,
                format!(
                    "seglen[{bad}] = {} must lie in (0, {limit})",
                    self.seglen[bad]
                ),
            ));
        }
        if !self.theta.is_finite() {
            return Err(GeometryError::invalid_segments(index, "theta must be finite"));
        }
        Ok(())
    }

    /// Sum of the relative segment widths; equals `segs` for a closed ring.
    pub fn seglen_sum(&self) -> f64 {
        self.seglen.iter().sum()
    }

    /// Angular half-width of segment `index` (radians).
    pub fn half_angle(&self, index: usize) -> f64 {
        std::f64::consts::PI / self.segs as f64 * self.seglen[index]
    }
}

/// Builds default rings and grows ring lists.
///
/// Growth is append-only: rings are never removed, only left unused.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFactory {
    pub default_height: f64,
    pub default_segs: usize,
}

impl Default for RingFactory {
    fn default() -> Self {
        Self {
            default_height: 19.0,
            default_segs: 12,
        }
    }
}

impl RingFactory {
    pub fn create(&self) -> Ring {
        Ring::new(self.default_height, self.default_segs)
    }

    /// Appends default rings until `rings` holds at least `len` entries.
    ///
    /// Returns the number of rings appended.
    pub fn ensure_len(&self, rings: &mut Vec<Ring>, len: usize) -> usize {
        let added = len.saturating_sub(rings.len());
        rings.extend((0..added).map(|_| self.create()));
        added
    }
}
