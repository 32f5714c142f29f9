//! Profile data model.
//!
//! Points are real-world coordinates in millimetres: `x` is the radius from
//! the vessel axis, `y` the height above the bottom. Screen coordinates only
//! appear at the [`Viewport`](crate::viewport::Viewport) boundary.

use bowlkit_core::GeometryError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::viewport::Viewport;

/// Steps shorter than this (mm) are treated as zero-length.
pub const DEGENERATE_STEP_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation, `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

/// Ordered cubic-bezier control points describing the wall centerline.
///
/// Holds `1 + 3k` points (`k >= 1`). Point `3i` is an on-curve knot, the two
/// points between knots are its handles; consecutive spans share a knot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct ControlPointSet {
    points: Vec<Point>,
}

impl ControlPointSet {
    /// Validates the `1 + 3k` layout and that every coordinate is finite.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        let count = points.len();
        if count < 4 || (count - 1) % 3 != 0 {
            return Err(GeometryError::InvalidControlPointCount { count });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::invalid_parameter(
                "control_points",
                format!("point {index} is not finite"),
            ));
        }
        Ok(Self { points })
    }

    /// Converts pixel positions on a display surface into a control point set.
    pub fn from_screen(viewport: &Viewport, pixels: &[Point]) -> Result<Self, GeometryError> {
        Self::new(
            pixels
                .iter()
                .map(|p| viewport.pixel_to_world(p.x, p.y))
                .collect(),
        )
    }

    /// Pixel positions of every control point for display.
    pub fn to_screen(&self, viewport: &Viewport) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| viewport.world_point_to_pixel(p))
            .collect()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid set holds at least four points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of cubic spans.
    pub fn span_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Control points of span `index` as `[start, handle, handle, end]`.
    pub fn span(&self, index: usize) -> Option<[Point; 4]> {
        let start = index * 3;
        if index >= self.span_count() {
            return None;
        }
        Some([
            self.points[start],
            self.points[start + 1],
            self.points[start + 2],
            self.points[start + 3],
        ])
    }

    /// Iterates spans in order.
    pub fn spans(&self) -> impl Iterator<Item = [Point; 4]> + '_ {
        (0..self.span_count()).filter_map(|i| self.span(i))
    }

    /// On-curve points (every third control point).
    pub fn knots(&self) -> Vec<Point> {
        self.points.iter().step_by(3).copied().collect()
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Moves one control point. The layout cannot change, only coordinates.
    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), GeometryError> {
        if !point.is_finite() {
            return Err(GeometryError::invalid_parameter(
                "point",
                "coordinates must be finite",
            ));
        }
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                Ok(())
            }
            None => Err(GeometryError::invalid_parameter(
                "index",
                format!("{index} out of range for {} points", self.points.len()),
            )),
        }
    }

    /// Removes interior knot `knot` together with its two handles.
    ///
    /// The first and last knots anchor the bottom and the rim and cannot be
    /// removed.
    pub fn remove_knot(&mut self, knot: usize) -> Result<(), GeometryError> {
        if knot == 0 || knot >= self.span_count() {
            return Err(GeometryError::invalid_parameter(
                "knot",
                format!("only interior knots 1..{} can be removed", self.span_count()),
            ));
        }
        let center = knot * 3;
        self.points.drain(center - 1..=center + 1);
        Ok(())
    }

    /// Splits span `span` at parameter `t` with de Casteljau subdivision.
    ///
    /// Adds one knot and two handles; the curve shape is unchanged.
    pub fn split_span(&mut self, span: usize, t: f64) -> Result<(), GeometryError> {
        if !(t > 0.0 && t < 1.0) {
            return Err(GeometryError::invalid_parameter(
                "t",
                format!("split parameter must lie strictly inside (0, 1), got {t}"),
            ));
        }
        let Some([p0, p1, p2, p3]) = self.span(span) else {
            return Err(GeometryError::invalid_parameter(
                "span",
                format!("{span} out of range for {} spans", self.span_count()),
            ));
        };

        let p01 = p0.lerp(&p1, t);
        let p12 = p1.lerp(&p2, t);
        let p23 = p2.lerp(&p3, t);
        let p012 = p01.lerp(&p12, t);
        let p123 = p12.lerp(&p23, t);
        let mid = p012.lerp(&p123, t);

        let start = span * 3;
        self.points
            .splice(start + 1..start + 3, [p01, p012, mid, p123, p23]);
        Ok(())
    }
}

impl Default for ControlPointSet {
    /// A simple open bowl: flat 25.4 mm foot rising to a 63.5 mm rim radius.
    fn default() -> Self {
        Self {
            points: vec![
                Point::new(25.4, 0.0),
                Point::new(50.8, 0.0),
                Point::new(50.8, 76.2),
                Point::new(63.5, 88.9),
            ],
        }
    }
}

impl TryFrom<Vec<Point>> for ControlPointSet {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<ControlPointSet> for Vec<Point> {
    fn from(set: ControlPointSet) -> Self {
        set.points
    }
}

/// Dense polyline approximation of the wall centerline.
///
/// Produced by [`evaluate_profile`](crate::bezier::evaluate_profile).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileCurve {
    points: Vec<Point>,
}

impl ProfileCurve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Collapses runs of points closer than `tolerance`.
    ///
    /// The later point of a run wins, so the literal final point survives.
    pub fn deduplicated(&self, tolerance: f64) -> ProfileCurve {
        let mut points: Vec<Point> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            match points.last_mut() {
                Some(last) if last.distance_to(p) <= tolerance => *last = *p,
                _ => points.push(*p),
            }
        }
        ProfileCurve { points }
    }
}

impl Deref for ProfileCurve {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}
