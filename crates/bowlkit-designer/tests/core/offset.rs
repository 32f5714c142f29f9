use bowlkit_core::GeometryError;
use bowlkit_designer::model::{Point, ProfileCurve, DEGENERATE_STEP_TOLERANCE};
use bowlkit_designer::offset::offset_curve;

fn eight_point_curve() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(2.5, 0.0),
        Point::new(38.0, 0.0),
        Point::new(45.6, 8.1),
        Point::new(50.8, 27.0),
        Point::new(55.9, 48.3),
        Point::new(60.1, 63.2),
        Point::new(63.5, 70.0),
    ]
}

/// Sampled profile with the rim point repeated, as the evaluator emits it.
fn rim_repeated_curve() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(2.5, 0.0),
        Point::new(38.0, 0.0),
        Point::new(45.6, 8.1),
        Point::new(50.8, 27.0),
        Point::new(56.0, 48.2),
        Point::new(63.5, 63.5),
        Point::new(63.5, 63.5),
    ]
}

#[test]
fn test_eight_point_scenario() {
    let curve = eight_point_curve();
    let pair = offset_curve(&curve, 3.175).unwrap();
    assert_eq!(pair.inner.len(), 8);
    assert_eq!(pair.outer.len(), 9);
    assert!(pair.inner[2].x < curve[2].x);
    assert!(curve[2].x < pair.outer[2].x);
}

#[test]
fn test_outer_closes_on_inner_end() {
    let pair = offset_curve(&eight_point_curve(), 3.175).unwrap();
    assert_eq!(pair.outer.last(), pair.inner.last());
}

#[test]
fn test_interior_points_are_offset_by_distance() {
    let curve = eight_point_curve();
    let d = 2.0;
    let pair = offset_curve(&curve, d).unwrap();
    for i in 0..curve.len() - 1 {
        let dx = curve[i + 1].x - curve[i].x;
        let dy = curve[i + 1].y - curve[i].y;
        let len = dx.hypot(dy);
        let (nx, ny) = (-dy / len, dx / len);
        assert!((pair.inner[i].distance_to(&curve[i]) - d).abs() < 1e-9);
        assert!((pair.outer[i].distance_to(&curve[i]) - d).abs() < 1e-9);
        assert!((pair.inner[i].x - (curve[i].x + d * nx)).abs() < 1e-9);
        assert!((pair.inner[i].y - (curve[i].y + d * ny)).abs() < 1e-9);
    }
}

#[test]
fn test_last_point_reuses_previous_normal() {
    let curve = eight_point_curve();
    let pair = offset_curve(&curve, 1.0).unwrap();
    let n = curve.len();
    let shift_prev = (pair.inner[n - 2].x - curve[n - 2].x, pair.inner[n - 2].y - curve[n - 2].y);
    let shift_last = (pair.inner[n - 1].x - curve[n - 1].x, pair.inner[n - 1].y - curve[n - 1].y);
    assert!((shift_prev.0 - shift_last.0).abs() < 1e-12);
    assert!((shift_prev.1 - shift_last.1).abs() < 1e-12);
}

#[test]
fn test_zero_offset_returns_curve() {
    let curve = eight_point_curve();
    let pair = offset_curve(&curve, 0.0).unwrap();
    for (i, p) in curve.iter().enumerate() {
        assert!(pair.inner[i].distance_to(p) < 1e-12);
        assert!(pair.outer[i].distance_to(p) < 1e-12);
    }
}

#[test]
fn test_duplicate_points_are_degenerate() {
    let mut curve = eight_point_curve();
    curve.insert(4, curve[3]);
    assert_eq!(
        offset_curve(&curve, 3.0),
        Err(GeometryError::DegenerateSegment { index: 3 })
    );
}

#[test]
fn test_needs_two_points() {
    assert_eq!(
        offset_curve(&[], 1.0),
        Err(GeometryError::TooFewPoints { count: 0 })
    );
}

#[test]
fn test_repeated_rim_point_is_degenerate() {
    assert_eq!(
        offset_curve(&rim_repeated_curve(), 3.175),
        Err(GeometryError::DegenerateSegment { index: 6 })
    );
}

#[test]
fn test_repeated_rim_point_after_dedup() {
    let raw = rim_repeated_curve();
    let curve = ProfileCurve::new(raw.clone()).deduplicated(DEGENERATE_STEP_TOLERANCE);
    assert_eq!(curve.len(), 7);
    assert_eq!(curve.points().last(), raw.last());

    let pair = offset_curve(curve.points(), 3.175).unwrap();
    assert_eq!(pair.inner.len(), 7);
    assert_eq!(pair.outer.len(), 8);
    assert!(pair.inner[2].x < raw[2].x);
    assert!(raw[2].x < pair.outer[2].x);
    assert_eq!(pair.outer.last(), pair.inner.last());
}
