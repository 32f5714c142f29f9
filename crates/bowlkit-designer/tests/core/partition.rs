use bowlkit_designer::model::Point;
use bowlkit_designer::partition::split_ring_y;
use bowlkit_designer::ring::Ring;

fn curve() -> Vec<Point> {
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

fn rings() -> Vec<Ring> {
    vec![
        Ring::new(12.5, 12),
        Ring::new(19.0, 12),
        Ring::new(19.0, 12),
        Ring::new(19.0, 12),
    ]
}

#[test]
fn test_one_piece_per_ring() {
    let parts = split_ring_y(&curve(), &rings());
    assert_eq!(parts.len(), 4);
    assert!(parts.iter().all(|p| p.len() >= 2));
}

#[test]
fn test_first_and_last_points_are_kept() {
    let c = curve();
    let parts = split_ring_y(&c, &rings());
    assert_eq!(parts[0][0], c[0]);
    assert_eq!(*parts.last().unwrap().last().unwrap(), *c.last().unwrap());
}

#[test]
fn test_boundaries_are_interpolated() {
    let parts = split_ring_y(&curve(), &rings());
    // Ring 0 ends where the curve crosses 12.5
    let exit = parts[0].last().unwrap();
    assert!((exit.y - 12.5).abs() < 1e-12);
    let expected_x = 45.6 + (12.5 - 8.1) / (27.0 - 8.1) * (50.8 - 45.6);
    assert!((exit.x - expected_x).abs() < 1e-9);

    // Ring 1 starts on the same boundary point
    assert!(parts[1][0].distance_to(exit) < 1e-9);
    assert!((parts[1].last().unwrap().y - 31.5).abs() < 1e-12);
}

#[test]
fn test_points_stay_inside_their_band() {
    let rings = rings();
    let parts = split_ring_y(&curve(), &rings);
    let mut bottom = 0.0;
    for (part, ring) in parts.iter().zip(&rings) {
        let top = bottom + ring.height;
        for p in part {
            assert!(p.y >= bottom - 1e-9 && p.y <= top + 1e-9, "{p:?} outside [{bottom}, {top}]");
        }
        bottom = top;
    }
}

#[test]
fn test_rings_above_curve_are_dropped() {
    let mut rings = rings();
    rings.insert(3, Ring::new(100.0, 12));
    rings.push(Ring::new(10.0, 12));
    let parts = split_ring_y(&curve(), &rings);
    // The top two rings sit above the curve; the last one only gets the
    // forced final point
    assert_eq!(parts.len(), 4);
}

#[test]
fn test_single_ring_takes_whole_curve() {
    let c = curve();
    let parts = split_ring_y(&c, &[Ring::new(200.0, 12)]);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0][0], c[0]);
    assert_eq!(*parts[0].last().unwrap(), *c.last().unwrap());
}
