//! Trigonometric quadrant signs, inverse round-trips, and identities.

use proptest::prelude::*;
use softquad::Float128;

fn degrees(deg: i32) -> Float128 {
    Float128::from(deg) * Float128::pi() / Float128::from(180u32)
}

fn close_f64(a: Float128, b: f64, tol: f64) -> bool {
    (a.to_f64() - b).abs() <= tol
}

#[test]
fn quadrant_signs_at_fifteen_degree_steps() {
    for deg in (-360i32..=360).step_by(15) {
        let wrapped = deg.rem_euclid(360);
        let (s, c) = degrees(deg).sin_cos();
        // Skip the axes where one component is a signed zero.
        if wrapped % 90 == 0 {
            continue;
        }
        let (sin_positive, cos_positive) = match wrapped / 90 {
            0 => (true, true),
            1 => (true, false),
            2 => (false, false),
            _ => (false, true),
        };
        assert_eq!(s > Float128::ZERO, sin_positive, "sin sign at {deg}");
        assert_eq!(c > Float128::ZERO, cos_positive, "cos sign at {deg}");
    }
}

#[test]
fn inverse_trig_recovers_the_angle() {
    // asin(sin α) ≈ α over [−90°, 90°].
    for deg in (-90i32..=90).step_by(15) {
        let alpha = degrees(deg);
        let round = alpha.sin().asin();
        assert!(
            close_f64(round, alpha.to_f64(), 1e-3),
            "asin(sin {deg}°) = {round}"
        );
    }
    // acos(cos α) ≈ α over [0°, 180°].
    for deg in (0i32..=180).step_by(15) {
        let alpha = degrees(deg);
        let round = alpha.cos().acos();
        assert!(
            close_f64(round, alpha.to_f64(), 1e-3),
            "acos(cos {deg}°) = {round}"
        );
    }
    // atan(tan α) ≈ α over [−45°, 45°].
    for deg in (-45i32..=45).step_by(15) {
        let alpha = degrees(deg);
        let round = alpha.tan().atan();
        assert!(
            close_f64(round, alpha.to_f64(), 1e-3),
            "atan(tan {deg}°) = {round}"
        );
    }
}

#[test]
fn atan2_recovers_the_angle() {
    // atan2(sin α, cos α) ≈ α over (−180°, 180°].
    for deg in (-165i32..=180).step_by(15) {
        let alpha = degrees(deg);
        let (s, c) = alpha.sin_cos();
        let round = s.atan2(c);
        assert!(
            close_f64(round, alpha.to_f64(), 1e-3),
            "atan2 at {deg}° = {round}"
        );
    }
}

#[test]
fn scenario_atan2_at_150_degrees() {
    let alpha = degrees(150);
    let (s, c) = alpha.sin_cos();
    let round = s.atan2(c);
    assert!((round - alpha).abs().to_f64() < 1e-3);
}

proptest! {
    /// sin² + cos² = 1 modulo rounding, everywhere in a few turns.
    #[test]
    fn pythagorean_identity(millis in -20_000i32..20_000) {
        let alpha = Float128::from(millis) / Float128::from(1000u32);
        let (s, c) = alpha.sin_cos();
        let unit = s * s + c * c;
        prop_assert!(close_f64(unit, 1.0, 1e-8), "at {millis}e-3: {unit}");
    }

    /// sin is odd and cos is even.
    #[test]
    fn parity(millis in 0i32..10_000) {
        let alpha = Float128::from(millis) / Float128::from(1000u32);
        let (s_pos, c_pos) = alpha.sin_cos();
        let (s_neg, c_neg) = (-alpha).sin_cos();
        prop_assert!(close_f64(s_pos + s_neg, 0.0, 1e-9));
        prop_assert!(close_f64(c_pos - c_neg, 0.0, 1e-9));
    }
}
