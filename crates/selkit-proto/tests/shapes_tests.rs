//! Tests for the shape value types.

use selkit_proto::{Circle, Rectangle};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_rectangle_area() {
    let rect = Rectangle::new(2.0, 3.0);
    assert!(approx_eq(rect.width(), 2.0));
    assert!(approx_eq(rect.height(), 3.0));
    assert!(approx_eq(rect.area(), 6.0));
}

#[test]
fn test_degenerate_rectangle_has_no_area() {
    assert!(approx_eq(Rectangle::new(0.0, 42.0).area(), 0.0));
}

#[test]
fn test_circle_area() {
    let circle = Circle::new(10.0);
    assert!(approx_eq(circle.radius(), 10.0));
    assert!(approx_eq(circle.area(), std::f64::consts::PI * 100.0));
}

#[test]
fn test_shapes_compare_by_value() {
    assert_eq!(Rectangle::new(1.5, 2.5), Rectangle::new(1.5, 2.5));
    assert_ne!(Rectangle::new(1.5, 2.5), Rectangle::new(2.5, 1.5));
    assert_eq!(Circle::new(4.0), Circle::new(4.0));
}
