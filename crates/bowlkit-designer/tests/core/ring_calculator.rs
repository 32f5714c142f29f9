use bowlkit_core::GeometryError;
use bowlkit_designer::model::{ControlPointSet, Point};
use bowlkit_designer::ring::{Ring, RingFactory};
use bowlkit_designer::ring_calculator::{calc_rings, calc_rings_with, wall_curves, BowlProfile};

fn profile() -> BowlProfile {
    BowlProfile {
        control_points: ControlPointSet::new(vec![
            Point::new(38.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(63.0, 63.0),
            Point::new(89.0, 76.0),
        ])
        .unwrap(),
        thickness: 6.0,
        padding: 3.0,
        curve_segments: 6,
        rings: vec![
            Ring::new(12.5, 12),
            Ring::new(12.5, 14),
            Ring::new(12.5, 16),
            Ring::new(12.5, 18),
        ],
    }
}

#[test]
fn test_ring_dimensions() {
    let geometry = calc_rings(&profile()).unwrap();
    assert!(geometry.height > 70.0);
    assert!(geometry.radius > 80.0);
    assert!(geometry.used_rings > 3);
    assert!(geometry.rings.len() > 3);
    assert!(geometry.rings[1].xvals.max > 40.0);
    assert!(geometry.rings[1].xvals.min > 30.0);
}

#[test]
fn test_height_and_radius_come_from_walls() {
    let p = profile();
    let geometry = calc_rings(&p).unwrap();
    let walls = wall_curves(&p).unwrap().walls;
    let max_y = walls.all_points().map(|q| q.y).fold(f64::MIN, f64::max);
    let max_x = walls.all_points().map(|q| q.x).fold(f64::MIN, f64::max);
    assert!((geometry.height - max_y).abs() < 1e-12);
    assert!((geometry.radius - max_x).abs() < 1e-12);
}

#[test]
fn test_rings_grow_with_factory_defaults() {
    let p = profile();
    let geometry = calc_rings(&p).unwrap();
    // -3 + 4 * 12.5 + 2 * 19 = 85 covers the ~79 mm wall
    assert_eq!(geometry.used_rings, 6);
    assert_eq!(geometry.rings.len(), 6);
    for ring in &geometry.rings[4..] {
        assert_eq!(ring.height, 19.0);
        assert_eq!(ring.segs, 12);
    }
    // Input rings keep their configuration
    assert_eq!(geometry.rings[3].segs, 18);
}

#[test]
fn test_used_rings_walk_covers_height() {
    let geometry = calc_rings(&profile()).unwrap();
    let covered: f64 = geometry.used().iter().map(|r| r.height).sum::<f64>() - 3.0;
    assert!(covered >= geometry.height);
    let below: f64 = covered - geometry.used().last().unwrap().height;
    assert!(below < geometry.height);
}

#[test]
fn test_rings_are_never_removed() {
    let mut p = profile();
    for _ in 0..6 {
        p.rings.push(Ring::new(30.0, 12));
    }
    let geometry = calc_rings(&p).unwrap();
    assert_eq!(geometry.rings.len(), p.rings.len());
    assert!(geometry.used_rings < geometry.rings.len());
    assert_eq!(geometry.used().len(), geometry.used_rings);
}

#[test]
fn test_custom_factory() {
    let factory = RingFactory {
        default_height: 25.4,
        default_segs: 8,
    };
    let mut p = profile();
    p.rings.truncate(1);
    let geometry = calc_rings_with(&p, &factory).unwrap();
    assert!(geometry.rings[1..].iter().all(|r| r.segs == 8 && r.height == 25.4));
}

#[test]
fn test_bounds_are_never_negative() {
    let mut p = profile();
    p.padding = 200.0;
    let geometry = calc_rings(&p).unwrap();
    for ring in geometry.used() {
        assert!(ring.xvals.min >= 0.0);
        assert!(ring.xvals.max >= 0.0);
    }
    assert_eq!(geometry.rings[0].xvals.min, 0.0);
}

#[test]
fn test_base_ring_reaches_the_axis() {
    let geometry = calc_rings(&profile()).unwrap();
    // The lead-in runs the base to the centre, so padding clamps to zero
    assert_eq!(geometry.rings[0].xvals.min, 0.0);
}

#[test]
fn test_thin_ring_gets_bounds() {
    let mut p = profile();
    p.rings = vec![Ring::new(30.0, 12), Ring::new(0.5, 12), Ring::new(60.0, 12)];
    p.curve_segments = 3;
    let geometry = calc_rings(&p).unwrap();
    let thin = &geometry.rings[1];
    assert!(thin.xvals.max > 0.0);
    assert!(thin.xvals.min > 0.0);
}

#[test]
fn test_invalid_ring_reports_index() {
    let mut p = profile();
    p.rings[2].segs = 2;
    p.rings[2].seglen.truncate(2);
    assert!(matches!(
        calc_rings(&p),
        Err(GeometryError::InvalidSegmentConfig { ring: 2, .. })
    ));
}

#[test]
fn test_wall_slices_per_ring() {
    let p = profile();
    let geometry = calc_rings(&p).unwrap();
    let walls = wall_curves(&p).unwrap();
    let (inner, outer) = walls.ring_slices(&geometry.rings);
    assert!(!inner.is_empty());
    assert!(!outer.is_empty());
    assert!(inner.iter().chain(outer.iter()).all(|s| s.len() >= 2));
}
