#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flocksim::simulation::vector::Vector2;
use std::f64::consts::PI;

const EPS: f64 = 1e-12;

#[test]
fn test_arithmetic() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, -4.0);

    assert_eq!(a + b, Vector2::new(4.0, -2.0));
    assert_eq!(a - b, Vector2::new(-2.0, 6.0));
    assert_eq!(a.scale(3.0), Vector2::new(3.0, 6.0));
    assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));

    let mut acc = Vector2::ZERO;
    acc += a;
    acc += b;
    acc -= Vector2::new(1.0, 1.0);
    acc *= 2.0;
    assert_eq!(acc, Vector2::new(6.0, -6.0));
}

#[test]
fn test_magnitude_and_distance() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    assert_eq!(v.magnitude_squared(), 25.0);
    assert_eq!(Vector2::distance(Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0)), 5.0);
    assert_eq!(Vector2::distance(v, v), 0.0);
}

#[test]
fn test_normalize_zero_vector_stays_zero() {
    let n = Vector2::ZERO.normalize();
    assert_eq!(n, Vector2::ZERO);
    assert!(n.is_finite());
}

#[test]
fn test_normalize_unit_length() {
    let n = Vector2::new(3.0, 4.0).normalize();
    assert!((n.x - 0.6).abs() < EPS);
    assert!((n.y - 0.8).abs() < EPS);
    assert!((n.magnitude() - 1.0).abs() < EPS);
}

#[test]
fn test_limit_clamps_and_keeps_direction() {
    let v = Vector2::new(30.0, 40.0).limit(5.0);
    assert!((v.magnitude() - 5.0).abs() < EPS);
    assert!((v.x - 3.0).abs() < EPS);
    assert!((v.y - 4.0).abs() < EPS);

    // shorter vectors are untouched
    let short = Vector2::new(0.1, -0.2);
    assert_eq!(short.limit(5.0), short);
    assert_eq!(Vector2::ZERO.limit(0.0), Vector2::ZERO);
}

#[test]
fn test_heading() {
    assert_eq!(Vector2::new(1.0, 0.0).heading(), 0.0);
    assert!((Vector2::new(0.0, 1.0).heading() - PI / 2.0).abs() < EPS);
    assert!((Vector2::new(-1.0, 0.0).heading() - PI).abs() < EPS);
    assert!((Vector2::new(0.0, -2.0).heading() + PI / 2.0).abs() < EPS);
}
