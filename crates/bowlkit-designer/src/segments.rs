//! Segment trapezoids of a single ring.
//!
//! Each segment is a wedge in the ring's local polar frame, centred on the
//! +x axis before rotation. Corners are ordered
//! `[inner-leading, outer-leading, outer-trailing, inner-trailing]`.

use bowlkit_core::GeometryError;
use nalgebra::{Point2, UnitComplex};
use serde::Serialize;

use crate::model::Point;
use crate::ring::Ring;

/// Four-corner footprint of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentTrapezoid {
    pub corners: [Point; 4],
}

impl SegmentTrapezoid {
    pub fn inner_leading(&self) -> Point {
        self.corners[0]
    }

    pub fn outer_leading(&self) -> Point {
        self.corners[1]
    }

    pub fn outer_trailing(&self) -> Point {
        self.corners[2]
    }

    pub fn inner_trailing(&self) -> Point {
        self.corners[3]
    }

    fn rotated(&self, angle: f64) -> SegmentTrapezoid {
        let rotation = UnitComplex::new(angle);
        SegmentTrapezoid {
            corners: self
                .corners
                .map(|c| Point::from(rotation.transform_point(&Point2::from(c)))),
        }
    }
}

/// Trapezoids of one ring plus the angle at which each segment starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcRingTrapzResult {
    pub trapezoids: Vec<SegmentTrapezoid>,
    pub start_angles: Vec<f64>,
    /// Sum of all segment angles; `2π` for a closed ring.
    pub total_rotation: f64,
}

/// Builds the segment trapezoids of `ring` from its computed `xvals`.
///
/// With `theta_i = π / segs * seglen[i]` and `max_theta` the widest half
/// angle in the ring:
/// ```text
/// x2 = xvals.max * cos(theta_i) / cos(max_theta)
/// x1 = xvals.min * cos(theta_i)
/// y2 = x2 * tan(theta_i)
/// y1 = xvals.min * sin(theta_i)
/// ```
/// The `cos(theta_i) / cos(max_theta)` factor pushes narrow segments out so
/// their outer corners meet the wide ones. With `rotate` each trapezoid is
/// turned by `theta_i + start_angle + ring.theta`.
pub fn calc_ring_trapz(
    ring: &Ring,
    ring_index: usize,
    rotate: bool,
) -> Result<CalcRingTrapzResult, GeometryError> {
    ring.validate(ring_index)?;

    let thetas: Vec<f64> = (0..ring.segs).map(|i| ring.half_angle(i)).collect();
    let max_theta = thetas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let cos_max = max_theta.cos();

    let mut trapezoids = Vec::with_capacity(ring.segs);
    let mut start_angles = Vec::with_capacity(ring.segs);
    let mut rotation = 0.0;

    for theta in thetas {
        start_angles.push(rotation);
        let x2 = ring.xvals.max * theta.cos() / cos_max;
        let x1 = ring.xvals.min * theta.cos();
        let y2 = x2 * theta.tan();
        let y1 = ring.xvals.min * theta.sin();
        let trapezoid = SegmentTrapezoid {
            corners: [
                Point::new(x1, y1),
                Point::new(x2, y2),
                Point::new(x2, -y2),
                Point::new(x1, -y1),
            ],
        };
        trapezoids.push(if rotate {
            trapezoid.rotated(theta + rotation + ring.theta)
        } else {
            trapezoid
        });
        rotation += theta * 2.0;
    }

    Ok(CalcRingTrapzResult {
        trapezoids,
        start_angles,
        total_rotation: rotation,
    })
}
