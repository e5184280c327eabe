use super::*;

#[test]
fn clamp_bounds_and_passthrough() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
}

#[test]
fn clamp_with_inverted_range_returns_midpoint() {
    assert_eq!(clamp(0.9, 0.6, 0.4), 0.5);
}

#[test]
fn lerp_endpoints_and_extrapolation() {
    assert_eq!(lerp(0.2, 0.8, 0.0), 0.2);
    assert_eq!(lerp(0.2, 0.8, 1.0), 0.8);
    assert!((lerp(0.2, 0.8, 0.5) - 0.5).abs() < 1e-12);
    assert!((lerp(0.0, 1.0, 1.5) - 1.5).abs() < 1e-12);
}

#[test]
fn unit_range_rejects_nan() {
    assert!(is_unit(0.0));
    assert!(is_unit(1.0));
    assert!(!is_unit(f64::NAN));
    assert!(!is_unit(1.01));
}
