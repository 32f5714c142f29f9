use std::f64::consts::PI;

use bowlkit_designer::model::Point;
use bowlkit_designer::ring::{Ring, XVals};
use bowlkit_designer::segments::calc_ring_trapz;

fn ring(seglen: Vec<f64>) -> Ring {
    let mut ring = Ring::new(19.0, seglen.len());
    ring.seglen = seglen;
    ring.xvals = XVals::new(45.0, 70.0);
    ring
}

#[test]
fn test_one_trapezoid_per_segment() {
    let r = ring(vec![1.0; 14]);
    let result = calc_ring_trapz(&r, 1, true).unwrap();
    assert_eq!(result.trapezoids.len(), r.seglen.len());
    assert_eq!(result.start_angles.len(), r.seglen.len());
}

#[test]
fn test_full_circle_with_unequal_widths() {
    let r = ring(vec![1.5, 0.5, 1.0, 1.0, 1.5, 0.5, 1.25, 0.75]);
    let result = calc_ring_trapz(&r, 0, true).unwrap();
    assert!((result.total_rotation - 2.0 * PI).abs() < 1e-9);
    assert!(result.start_angles.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(result.start_angles[0], 0.0);
}

#[test]
fn test_cosine_correction_formula() {
    let r = ring(vec![1.5, 0.5, 1.0, 1.0]);
    let result = calc_ring_trapz(&r, 0, false).unwrap();
    let max_theta = PI / 4.0 * 1.5;
    for (i, t) in result.trapezoids.iter().enumerate() {
        let theta = PI / 4.0 * r.seglen[i];
        let x2 = 70.0 * theta.cos() / max_theta.cos();
        let x1 = 45.0 * theta.cos();
        assert!((t.outer_leading().x - x2).abs() < 1e-9);
        assert!((t.outer_leading().y - x2 * theta.tan()).abs() < 1e-9);
        assert!((t.inner_leading().x - x1).abs() < 1e-9);
        assert!((t.inner_leading().y - 45.0 * theta.sin()).abs() < 1e-9);
    }
}

#[test]
fn test_unequal_segments_meet_at_outer_corners() {
    let r = ring(vec![1.5, 0.5, 1.0, 1.0, 1.5, 0.5]);
    let result = calc_ring_trapz(&r, 0, true).unwrap();
    let n = result.trapezoids.len();
    for i in 0..n {
        let here = &result.trapezoids[i];
        let next = &result.trapezoids[(i + 1) % n];
        // Leading edge of one segment touches the trailing edge of the next
        // on the same ray from the centre
        let a = here.outer_leading();
        let b = next.outer_trailing();
        let cross = a.x * b.y - a.y * b.x;
        assert!(cross.abs() < 1e-6 * a.x.hypot(a.y) * b.x.hypot(b.y), "segment {i}");
        let c = here.inner_leading();
        let d = next.inner_trailing();
        assert!(c.distance_to(&d) < 1e-9, "segment {i}");
    }
}

#[test]
fn test_winding_is_stable() {
    let r = ring(vec![1.0; 12]);
    let result = calc_ring_trapz(&r, 0, true).unwrap();
    for t in &result.trapezoids {
        assert!(signed_area(&t.corners) < 0.0);
    }
}

#[test]
fn test_ring_twist_rotates_everything() {
    let mut r = ring(vec![1.0; 6]);
    let plain = calc_ring_trapz(&r, 0, true).unwrap();
    r.theta = 0.3;
    let twisted = calc_ring_trapz(&r, 0, true).unwrap();
    assert_eq!(plain.start_angles, twisted.start_angles);
    for (a, b) in plain.trapezoids.iter().zip(&twisted.trapezoids) {
        for (p, q) in a.corners.iter().zip(&b.corners) {
            let angle = q.y.atan2(q.x) - p.y.atan2(p.x);
            let angle = angle.rem_euclid(2.0 * PI);
            assert!((angle - 0.3).abs() < 1e-9);
            assert!((p.x.hypot(p.y) - q.x.hypot(q.y)).abs() < 1e-9);
        }
    }
}

fn signed_area(corners: &[Point; 4]) -> f64 {
    let mut area = 0.0;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}
