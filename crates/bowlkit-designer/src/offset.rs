//! Curve offsetting.
//!
//! Displaces a polyline perpendicular to its local tangent to build the
//! inner and outer wall surfaces around the centerline.

use bowlkit_core::GeometryError;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::model::{Point, DEGENERATE_STEP_TOLERANCE};

/// Inner and outer wall surfaces.
///
/// `outer` holds one more point than `inner`: a copy of the final inner
/// point that closes the wall at the open rim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OffsetCurvePair {
    pub inner: Vec<Point>,
    pub outer: Vec<Point>,
}

impl OffsetCurvePair {
    /// Every point of both curves.
    pub fn all_points(&self) -> impl Iterator<Item = &Point> {
        self.inner.iter().chain(self.outer.iter())
    }

    /// Highest y over both curves.
    pub fn max_y(&self) -> f64 {
        self.all_points().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest x over both curves.
    pub fn max_x(&self) -> f64 {
        self.all_points().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Offsets `curve` by `offset` along the left-hand unit normal of each step.
///
/// The inner point is `p + offset * n` and the outer point `p - offset * n`
/// with `n = (-dy, dx) / |d|`. The last point reuses the normal of the final
/// step. Zero-length steps are rejected with
/// [`GeometryError::DegenerateSegment`] instead of producing `NaN`; run the
/// curve through [`ProfileCurve::deduplicated`](crate::model::ProfileCurve::deduplicated)
/// first when repeated points are expected.
pub fn offset_curve(curve: &[Point], offset: f64) -> Result<OffsetCurvePair, GeometryError> {
    if curve.len() < 2 {
        return Err(GeometryError::TooFewPoints { count: curve.len() });
    }
    if !offset.is_finite() {
        return Err(GeometryError::invalid_parameter(
            "offset",
            format!("must be finite, got {offset}"),
        ));
    }

    let mut inner = Vec::with_capacity(curve.len());
    let mut outer = Vec::with_capacity(curve.len() + 1);
    let mut normal = Vector2::zeros();

    for (index, window) in curve.windows(2).enumerate() {
        let step = Vector2::new(window[1].x - window[0].x, window[1].y - window[0].y);
        let length = step.norm();
        if length <= DEGENERATE_STEP_TOLERANCE {
            return Err(GeometryError::DegenerateSegment { index });
        }
        normal = Vector2::new(-step.y, step.x) / length;
        push_offset(&mut inner, &mut outer, &window[0], &normal, offset);
    }

    // curve.len() >= 2 so the loop ran at least once
    if let Some(last) = curve.last() {
        push_offset(&mut inner, &mut outer, last, &normal, offset);
    }
    if let Some(closing) = inner.last().copied() {
        outer.push(closing);
    }

    Ok(OffsetCurvePair { inner, outer })
}

fn push_offset(
    inner: &mut Vec<Point>,
    outer: &mut Vec<Point>,
    point: &Point,
    normal: &Vector2<f64>,
    offset: f64,
) {
    let shift = *normal * offset;
    inner.push(Point::new(point.x + shift.x, point.y + shift.y));
    outer.push(Point::new(point.x - shift.x, point.y - shift.y));
}
