use bowlkit_designer::model::{ControlPointSet, Point};
use bowlkit_designer::viewport::Viewport;

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 500.0;
const CANVAS_MM: f64 = 200.0;
const BASELINE: f64 = 12.5;

fn view() -> Viewport {
    Viewport::fit_width(WIDTH, HEIGHT, CANVAS_MM)
        .unwrap()
        .with_baseline(BASELINE)
        .unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_fit_width_scale() {
    let vp = view();
    assert!(close(vp.scale(), 2.5));
    assert_eq!(vp.baseline(), BASELINE);
}

#[test]
fn test_pixel_to_world_right_edge_middle() {
    let vp = view();
    let p = vp.pixel_to_world(WIDTH, HEIGHT / 2.0);
    assert!(close(p.x, CANVAS_MM / 2.0));
    assert!(close(p.y, CANVAS_MM / 2.0 - BASELINE));
}

#[test]
fn test_pixel_to_world_top_centre() {
    let vp = view();
    let p = vp.pixel_to_world(WIDTH / 2.0, 0.0);
    assert!(close(p.x, 0.0));
    assert!(close(p.y, CANVAS_MM - BASELINE));
}

#[test]
fn test_world_to_pixel_default_offset() {
    let vp = view();
    let p = vp.world_to_pixel(50.0, 75.0);
    assert!(close(p.x, WIDTH / 2.0 + 50.0 * 2.5));
    assert!(close(p.y, -(75.0 + BASELINE) * 2.5 + HEIGHT));
}

#[test]
fn test_world_to_pixel_zero_offset() {
    let vp = view();
    let p = vp.world_to_pixel_with_offset(38.0, 108.0, 0.0);
    assert!(close(p.x, WIDTH / 2.0 + 38.0 * 2.5));
    assert!(close(p.y, -108.0 * 2.5 + HEIGHT));
}

#[test]
fn test_world_to_pixel_axes_directions() {
    let vp = view();
    let origin = vp.world_to_pixel(0.0, 0.0);
    let up = vp.world_to_pixel(0.0, 100.0);
    let right = vp.world_to_pixel(100.0, 0.0);
    assert!(up.y < origin.y);
    assert!(right.x > origin.x);
}

#[test]
fn test_control_points_from_screen() {
    let vp = view();
    let scale = vp.scale();
    let centre = WIDTH / 2.0;
    let bottom = HEIGHT - BASELINE * scale;
    let pixels = [
        Point::new(centre + 38.0 * scale, bottom),
        Point::new(centre + 50.0 * scale, bottom),
        Point::new(centre + 50.0 * scale, bottom - 76.0 * scale),
        Point::new(centre + 63.0 * scale, bottom - 89.0 * scale),
    ];
    let set = ControlPointSet::from_screen(&vp, &pixels).unwrap();
    let expected = [(38.0, 0.0), (50.0, 0.0), (50.0, 76.0), (63.0, 89.0)];
    for (p, (x, y)) in set.points().iter().zip(expected) {
        assert!((p.x - x).abs() < 1e-6);
        assert!((p.y - y).abs() < 1e-6);
    }

    let back = set.to_screen(&vp);
    for (a, b) in back.iter().zip(pixels.iter()) {
        assert!(a.distance_to(b) < 1e-6);
    }
}

#[test]
fn test_from_screen_rejects_bad_count() {
    let vp = view();
    let pixels = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    assert!(ControlPointSet::from_screen(&vp, &pixels).is_err());
}

#[test]
fn test_resize_moves_axis() {
    let mut vp = view();
    vp.set_canvas_size(800.0, 600.0);
    let p = vp.world_to_pixel(0.0, -BASELINE);
    assert!(close(p.x, 400.0));
    assert!(close(p.y, 600.0));
}
