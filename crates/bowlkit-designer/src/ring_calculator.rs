//! Ring extent calculation.
//!
//! Runs the profile pipeline (evaluate, offset) and walks the resulting wall
//! band by band to find the radial bounds of every ring the vessel spans.
//! The caller's profile is never mutated; results come back as a
//! [`BowlGeometry`] that the caller merges explicitly.

use bowlkit_core::GeometryError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::bezier::evaluate_profile;
use crate::model::{ControlPointSet, Point, ProfileCurve, DEGENERATE_STEP_TOLERANCE};
use crate::offset::{offset_curve, OffsetCurvePair};
use crate::partition::{interpolate_x, split_ring_y};
use crate::ring::{Ring, RingFactory, XVals};

/// Caller-owned design state.
///
/// Field names on disk follow the design file format (`thick`, `pad`,
/// `cpoint`, `curvesegs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlProfile {
    #[serde(rename = "cpoint", default)]
    pub control_points: ControlPointSet,
    /// Wall thickness (mm).
    #[serde(rename = "thick")]
    pub thickness: f64,
    /// Clearance added on both sides of every ring blank (mm).
    #[serde(rename = "pad")]
    pub padding: f64,
    /// Samples per bezier span.
    #[serde(rename = "curvesegs")]
    pub curve_segments: usize,
    #[serde(default)]
    pub rings: Vec<Ring>,
}

impl Default for BowlProfile {
    fn default() -> Self {
        Self {
            control_points: ControlPointSet::default(),
            thickness: 6.35,
            padding: 3.175,
            curve_segments: 50,
            rings: vec![Ring::new(12.7, 12)],
        }
    }
}

impl BowlProfile {
    /// Checks every scalar and ring before the pipeline runs.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.thickness.is_finite() && self.thickness >= 0.0) {
            return Err(GeometryError::invalid_parameter(
                "thickness",
                format!("must be non-negative and finite, got {}", self.thickness),
            ));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(GeometryError::invalid_parameter(
                "padding",
                format!("must be non-negative and finite, got {}", self.padding),
            ));
        }
        if self.curve_segments == 0 {
            return Err(GeometryError::invalid_parameter(
                "curve_segments",
                "must be at least 1",
            ));
        }
        for (index, ring) in self.rings.iter().enumerate() {
            ring.validate(index)?;
        }
        Ok(())
    }
}

/// Result of [`calc_rings`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlGeometry {
    /// Highest point of the wall (mm).
    pub height: f64,
    /// Largest radius of the wall (mm).
    pub radius: f64,
    /// Number of rings the wall actually spans.
    pub used_rings: usize,
    /// The input rings with `xvals` filled in, plus any rings appended to
    /// cover the wall. Entries past `used_rings` are unused.
    pub rings: Vec<Ring>,
}

/// Alias matching the pipeline's result naming.
pub type CalcRingsResult = BowlGeometry;

impl BowlGeometry {
    pub fn used_rings(&self) -> usize {
        self.used_rings
    }

    /// The rings spanned by the wall.
    pub fn used(&self) -> &[Ring] {
        &self.rings[..self.used_rings.min(self.rings.len())]
    }

    /// Copies computed bounds into `profile` and appends grown rings.
    ///
    /// Rings the caller already holds keep every other field; nothing is
    /// removed.
    pub fn apply_to(&self, profile: &mut BowlProfile) {
        for (target, computed) in profile.rings.iter_mut().zip(&self.rings) {
            target.xvals = computed.xvals;
        }
        if self.rings.len() > profile.rings.len() {
            profile
                .rings
                .extend_from_slice(&self.rings[profile.rings.len()..]);
        }
    }
}

/// Centerline and wall surfaces for drawing collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallCurves {
    pub centerline: ProfileCurve,
    pub walls: OffsetCurvePair,
}

impl WallCurves {
    /// Inner and outer wall slices per ring, in that order.
    pub fn ring_slices(&self, rings: &[Ring]) -> (Vec<Vec<Point>>, Vec<Vec<Point>>) {
        (
            split_ring_y(&self.walls.inner, rings),
            split_ring_y(&self.walls.outer, rings),
        )
    }
}

/// Evaluates the centerline and offsets it by half the wall thickness.
///
/// Repeated samples (span joints, the rim) are collapsed before offsetting.
pub fn wall_curves(profile: &BowlProfile) -> Result<WallCurves, GeometryError> {
    profile.validate()?;
    build_walls(profile)
}

fn build_walls(profile: &BowlProfile) -> Result<WallCurves, GeometryError> {
    let centerline = evaluate_profile(&profile.control_points, profile.curve_segments)?
        .deduplicated(DEGENERATE_STEP_TOLERANCE);
    let walls = offset_curve(&centerline, profile.thickness / 2.0)?;
    Ok(WallCurves { centerline, walls })
}

/// Computes bowl height, radius and per-ring radial bounds.
///
/// The ring walk starts at `-thickness / 2` (the underside of the base) and
/// steps by each ring's height until it passes the top of the wall. Rings are
/// appended from [`RingFactory::default`] when the list runs out.
pub fn calc_rings(profile: &BowlProfile) -> Result<BowlGeometry, GeometryError> {
    calc_rings_with(profile, &RingFactory::default())
}

/// [`calc_rings`] with a custom factory for appended rings.
pub fn calc_rings_with(
    profile: &BowlProfile,
    factory: &RingFactory,
) -> Result<BowlGeometry, GeometryError> {
    profile.validate()?;
    let fresh = factory.create();
    fresh.validate(profile.rings.len())?;

    let WallCurves { walls, .. } = build_walls(profile)?;
    let height = walls.max_y();
    let radius = walls.max_x();

    let mut rings = profile.rings.clone();
    let mut y = -profile.thickness / 2.0;
    let mut index = 0;
    while y < height {
        let added = factory.ensure_len(&mut rings, index + 1);
        if added > 0 {
            debug!("Appended default ring {}", index);
        }
        let ring = &mut rings[index];
        let top = y + ring.height;

        let mut xs = band_x_values(&walls.inner, y, top);
        xs.extend(band_x_values(&walls.outer, y, top));

        ring.xvals = if xs.is_empty() {
            warn!("Ring {} [{:.3}, {:.3}] contains no wall points", index, y, top);
            XVals::default()
        } else {
            let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            XVals::new(
                (min - profile.padding).max(0.0),
                (max + profile.padding).max(0.0),
            )
        };
        trace!(
            "Ring {} [{:.3}, {:.3}] xvals {:.3}..{:.3}",
            index,
            y,
            top,
            ring.xvals.min,
            ring.xvals.max
        );

        y = top;
        index += 1;
    }

    debug!(
        "Bowl height {:.3} mm, radius {:.3} mm, {} of {} rings used",
        height,
        radius,
        index,
        rings.len()
    );
    Ok(BowlGeometry {
        height,
        radius,
        used_rings: index,
        rings,
    })
}

/// X values of `curve` inside the open band `(bottom, top)`.
///
/// Steps that jump over the whole band contribute the x at both edges.
fn band_x_values(curve: &[Point], bottom: f64, top: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = curve
        .iter()
        .filter(|p| p.y > bottom && p.y < top)
        .map(|p| p.x)
        .collect();
    for step in curve.windows(2) {
        let (a, b) = (&step[0], &step[1]);
        if a.y.min(b.y) < bottom && a.y.max(b.y) > top {
            xs.push(interpolate_x(a, b, bottom));
            xs.push(interpolate_x(a, b, top));
        }
    }
    xs
}
