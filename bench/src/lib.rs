//! Shared inputs for the softquad benchmarks.

use softquad::Float128;

/// A spread of operand magnitudes: subnormal, small, near one, large, and
/// near the overflow boundary.
#[must_use]
pub fn operand_spread() -> Vec<Float128> {
    vec![
        Float128::EPSILON,
        Float128::MIN_POSITIVE,
        Float128::from(0.1f64),
        Float128::ONE,
        Float128::from(123456.789f64),
        Float128::ONE.scale_b(10_000),
        Float128::MAX,
    ]
}
