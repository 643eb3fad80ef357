//! Arithmetic identities and the concrete end-to-end scenarios.

use proptest::prelude::*;
use softquad::Float128;

/// Strategy over finite (possibly subnormal) encodings.
fn finite_strategy() -> impl Strategy<Value = Float128> {
    any::<u128>().prop_map(Float128::from_bits).prop_filter("finite", |v| v.is_finite())
}

/// Strategy over integers small enough that sums and products stay exact
/// in both f64 and Float128.
fn small_int_strategy() -> impl Strategy<Value = i64> {
    -(1i64 << 40)..(1i64 << 40)
}

proptest! {
    /// x + 0 = x for every finite x (zero addends are returned as-is).
    #[test]
    fn additive_identity(x in finite_strategy()) {
        let zero = Float128::ZERO;
        prop_assert_eq!(x + zero, x);
        prop_assert_eq!(zero + x, x);
    }

    /// x + (−x) is +0 for every finite x.
    #[test]
    fn additive_inverse_is_positive_zero(x in finite_strategy()) {
        let sum = x + (-x);
        prop_assert!(sum.is_zero());
        prop_assert!(!sum.sign_bit());
        prop_assert_eq!(sum, Float128::ZERO);
    }

    /// NaN is absorbing through every operation.
    #[test]
    fn nan_absorbs(x in finite_strategy()) {
        prop_assert!((x + Float128::NAN).is_nan());
        prop_assert!((x * Float128::NAN).is_nan());
        prop_assert!((x / Float128::NAN).is_nan());
        prop_assert!(x.mul_add(Float128::NAN, x).is_nan());
    }

    /// x · 1 = x and x · (−1) = −x for every finite x.
    #[test]
    fn multiplicative_identity(x in finite_strategy()) {
        prop_assert_eq!(x * Float128::ONE, x);
        let negated = x * Float128::NEG_ONE;
        prop_assert_eq!(negated.to_bits(), (-x).to_bits());
    }

    /// x / 1 = x, x / (−1) = −x, and x / x = 1 for finite nonzero x.
    #[test]
    fn division_identities(x in finite_strategy()) {
        prop_assert_eq!(x / Float128::ONE, x);
        prop_assert_eq!((x / Float128::NEG_ONE).to_bits(), (-x).to_bits());
        if !x.is_zero() {
            prop_assert_eq!(x / x, Float128::ONE);
        }
    }

    /// Addition commutes bit-for-bit on finite operands.
    #[test]
    fn addition_commutes(a in finite_strategy(), b in finite_strategy()) {
        prop_assert_eq!((a + b).to_bits(), (b + a).to_bits());
    }

    /// Multiplication commutes bit-for-bit on finite operands.
    #[test]
    fn multiplication_commutes(a in finite_strategy(), b in finite_strategy()) {
        prop_assert_eq!((a * b).to_bits(), (b * a).to_bits());
    }

    /// Exact small-integer sums agree with f64 (both formats hold them
    /// exactly below 2^53).
    #[test]
    fn sums_agree_with_f64_on_exact_integers(a in small_int_strategy(), b in small_int_strategy()) {
        let (qa, qb) = (Float128::from(a), Float128::from(b));
        prop_assert_eq!((qa + qb).to_f64(), (a as f64) + (b as f64));
        prop_assert_eq!((qa - qb).to_f64(), (a as f64) - (b as f64));
    }

    /// Exact small-integer products agree with f64 (kept under 2^52).
    #[test]
    fn products_agree_with_f64_on_exact_integers(
        a in -(1i64 << 26)..(1i64 << 26),
        b in -(1i64 << 26)..(1i64 << 26),
    ) {
        let (qa, qb) = (Float128::from(a), Float128::from(b));
        prop_assert_eq!((qa * qb).to_f64(), (a as f64) * (b as f64));
    }

    /// fma on a zero addend equals the plain multiply for nonzero finite
    /// factors (with a zero factor the addend's zero-sign rules differ).
    #[test]
    fn fma_with_zero_addend_is_multiply(a in finite_strategy(), b in finite_strategy()) {
        prop_assume!(!a.is_zero() && !b.is_zero());
        prop_assert_eq!(a.mul_add(b, Float128::ZERO).to_bits(), (a * b).to_bits());
    }
}

#[test]
fn infinity_addition_table() {
    let inf = Float128::INFINITY;
    let ninf = Float128::NEG_INFINITY;
    let five = Float128::from(5u32);

    assert_eq!(inf + inf, inf);
    assert_eq!(ninf + ninf, ninf);
    assert_eq!(inf + five, inf);
    assert_eq!(ninf + five, ninf);
    assert_eq!((inf + ninf).to_bits(), Float128::SENTINEL_NAN.to_bits());
    assert!((inf + Float128::NAN).is_nan());
}

#[test]
fn multiplication_by_infinity_is_nan() {
    // This engine treats every ∞ multiplicand as invalid, while overflow
    // of finite operands still saturates.
    let inf = Float128::INFINITY;
    assert!((inf * Float128::TWO).is_nan());
    assert!((Float128::TWO * inf).is_nan());
    assert!((inf * inf).is_nan());
    assert!((Float128::ZERO * inf).is_nan());
}

#[test]
fn division_table() {
    let inf = Float128::INFINITY;
    let one = Float128::ONE;
    let zero = Float128::ZERO;

    assert_eq!((zero / zero).to_bits(), Float128::SENTINEL_NAN.to_bits());
    assert_eq!((inf / inf).to_bits(), Float128::SENTINEL_NAN.to_bits());
    assert_eq!(one / zero, inf);
    assert_eq!((-one) / zero, Float128::NEG_INFINITY);
    assert_eq!(one / Float128::NEG_ZERO, Float128::NEG_INFINITY);
    assert!((one / inf).is_zero());
    assert!(((-one) / inf).sign_bit());
}

#[test]
fn subnormal_addition_reaches_the_next_step() {
    let eps = Float128::EPSILON;
    let sum = eps + eps;
    assert!(sum.is_subnormal());
    assert_eq!(sum, eps.next_up());
}

#[test]
fn normal_plus_epsilon_is_absorbed() {
    let x = Float128::ONE;
    assert_eq!(x + Float128::EPSILON, x);
    let y = Float128::from(123456.75f64);
    assert_eq!(y + Float128::EPSILON, y);
}

// Concrete end-to-end scenarios.

#[test]
fn scenario_basic_multiply() {
    let r = Float128::from(0.25f64) * Float128::from(1.5f64);
    assert_eq!(r, Float128::from(0.375f64));
}

#[test]
fn scenario_multiply_to_infinity() {
    let r = Float128::from(5.5f64) * Float128::ONE.scale_b(16383);
    assert_eq!(r, Float128::INFINITY);
}

#[test]
fn scenario_subnormal_multiply() {
    let r = Float128::EPSILON * Float128::TWO;
    assert_eq!(r, Float128::EPSILON.next_up());
}

#[test]
fn scenario_divide_by_zero() {
    assert_eq!(Float128::ONE / Float128::ZERO, Float128::INFINITY);
}

#[test]
fn scenario_infinity_over_infinity() {
    let r = Float128::INFINITY / Float128::INFINITY;
    assert_eq!(r.to_bits(), Float128::SENTINEL_NAN.to_bits());
}

#[test]
fn scenario_fused_multiply_add() {
    let r = Float128::ONE.mul_add(Float128::TWO, Float128::from(3u32));
    assert_eq!(r, Float128::from(5u32));
}

#[test]
fn scenario_ieee_remainder() {
    // 5.5/2 = 2.75 rounds to 3 under ties-to-even, so the remainder is
    // 5.5 − 6 = −0.5.
    let r = Float128::from(5.5f64).ieee_rem(Float128::TWO);
    assert_eq!(r, Float128::from(-0.5f64));
}

#[test]
fn scale_b_round_trips_the_exponent() {
    let x = Float128::from(1.75f64);
    assert_eq!(x.scale_b(100).scale_b(-100), x);
    assert_eq!(x.scale_b(0), x);
}
