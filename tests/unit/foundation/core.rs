use super::*;

#[test]
fn polar_follows_screen_axes() {
    let right = polar(CANVAS_CENTER, 10.0, 0.0);
    assert!((right.x - 110.0).abs() < 1e-9);
    assert!((right.y - 100.0).abs() < 1e-9);

    let down = polar(CANVAS_CENTER, 10.0, std::f64::consts::FRAC_PI_2);
    assert!((down.x - 100.0).abs() < 1e-9);
    assert!((down.y - 110.0).abs() < 1e-9);
}

#[test]
fn squash_is_bounded_and_monotonic() {
    assert_eq!(squash(0.0), 0.0);
    assert_eq!(squash(-3.0), 0.0);
    assert!((squash(1.0) - 0.5).abs() < 1e-12);
    let mut prev = 0.0;
    for w in [0.1, 0.5, 1.0, 4.0, 25.0] {
        let s = squash(w);
        assert!(s > prev);
        assert!(s < 1.0);
        prev = s;
    }
}

#[test]
fn quantize_rounds_and_clears_negative_zero() {
    assert_eq!(quantize(1.234_9), 1.23);
    assert_eq!(quantize(-0.001), 0.0);
    assert!(quantize(-0.001).is_sign_positive());
}
