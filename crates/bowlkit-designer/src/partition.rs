//! Slicing a wall curve into per-ring pieces.

use tracing::trace;

use crate::model::Point;
use crate::ring::Ring;

/// X coordinate where the step `a -> b` crosses height `y`.
///
/// Vertical steps return `a.x`; callers only ask for heights inside the
/// step's y range, so `a.y != b.y`.
pub fn interpolate_x(a: &Point, b: &Point, y: f64) -> f64 {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return a.x;
    }
    a.x + (y - a.y) / dy * (b.x - a.x)
}

/// Splits `curve` into one sub-polyline per ring, stacking ring heights
/// from `y = 0`.
///
/// Each step between consecutive points is classified against the ring's
/// `[y_from, y_to)` band:
/// - it jumps over the whole band: both band edges are interpolated, so thin
///   rings are never skipped;
/// - it enters the band from below: the entry point is interpolated;
/// - it leaves the band upward: the exit point is interpolated and the ring
///   is finished;
/// - its end point lies inside the band: the point is kept.
///
/// An entering step whose end point also lies inside the band keeps that end
/// point as well. The first ring always starts with the first curve point and
/// the last ring always ends with the last one. Pieces with fewer than two
/// points are dropped.
pub fn split_ring_y(curve: &[Point], rings: &[Ring]) -> Vec<Vec<Point>> {
    let mut parts = Vec::with_capacity(rings.len());
    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return parts;
    };

    let mut y_from = 0.0;
    for (index, ring) in rings.iter().enumerate() {
        let y_to = y_from + ring.height;
        let mut piece = Vec::new();
        if index == 0 {
            piece.push(*first);
        }

        for step in curve.windows(2) {
            let (a, b) = (&step[0], &step[1]);
            if a.y < y_from && b.y > y_to {
                piece.push(Point::new(interpolate_x(a, b, y_from), y_from));
                piece.push(Point::new(interpolate_x(a, b, y_to), y_to));
            } else if a.y <= y_from && b.y > y_from {
                piece.push(Point::new(interpolate_x(a, b, y_from), y_from));
                if b.y < y_to {
                    piece.push(*b);
                }
            } else if a.y < y_to && b.y >= y_to {
                piece.push(Point::new(interpolate_x(a, b, y_to), y_to));
                break;
            } else if b.y >= y_from && b.y < y_to {
                piece.push(*b);
            }
        }

        if index + 1 == rings.len() {
            piece.push(*last);
        }
        trace!("Ring {} [{:.3}, {:.3}) holds {} points", index, y_from, y_to, piece.len());
        if piece.len() > 1 {
            parts.push(piece);
        }
        y_from = y_to;
    }
    parts
}
