//! Profile path evaluation.
//!
//! Samples the cubic-bezier spans of a [`ControlPointSet`] into the dense
//! [`ProfileCurve`] used by every later stage. The curve starts with a short
//! flat lead-in from the vessel axis so the wall bottom closes across the
//! centre, and always ends on the literal last control point.

use bowlkit_core::GeometryError;
use tracing::debug;

use crate::model::{ControlPointSet, Point, ProfileCurve};

/// X position of the second lead-in point (mm). The first is the origin.
pub const LEAD_IN_OFFSET: f64 = 0.1;

/// Evaluates a cubic bezier at `t` with Bernstein weights.
pub fn cubic_point(p0: &Point, p1: &Point, p2: &Point, p3: &Point, t: f64) -> Point {
    let mt = (1.0 - t).max(0.0);
    let w0 = mt * mt * mt;
    let w1 = 3.0 * t * mt * mt;
    let w2 = 3.0 * t * t * mt;
    let w3 = t * t * t;
    Point::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

/// Samples every span at `t = 0, 1/n, .., 1` (`n = curve_segments`).
///
/// The result holds `3 + spans * (n + 1)` points: two lead-in points, the
/// samples, and the last control point. Coincident control points are legal
/// and produce repeated curve points; span joints and the rim always repeat.
pub fn evaluate_profile(
    control_points: &ControlPointSet,
    curve_segments: usize,
) -> Result<ProfileCurve, GeometryError> {
    if curve_segments == 0 {
        return Err(GeometryError::invalid_parameter(
            "curve_segments",
            "must be at least 1",
        ));
    }

    let spans = control_points.span_count();
    let mut points = Vec::with_capacity(3 + spans * (curve_segments + 1));
    points.push(Point::new(0.0, 0.0));
    points.push(Point::new(LEAD_IN_OFFSET, 0.0));

    for [p0, p1, p2, p3] in control_points.spans() {
        for i in 0..=curve_segments {
            let t = i as f64 / curve_segments as f64;
            points.push(cubic_point(&p0, &p1, &p2, &p3, t));
        }
    }
    points.push(control_points.last());

    debug!(
        "Evaluated {} profile points from {} spans at {} segments per span",
        points.len(),
        spans,
        curve_segments
    );
    Ok(ProfileCurve::new(points))
}
