//! Multiplication over the exact 226-bit significand product.

use softquad_wide::U256;

use super::{round_pack, shr_sticky_u256, signed_zero, Accel};
use crate::bits::Float128;

/// `a × b`, correctly rounded.
///
/// Any NaN operand — and any infinite operand — produces the quiet NaN;
/// see DESIGN.md on the infinity rule. Overflow of finite operands still
/// saturates to ±∞.
pub(crate) fn mul(a: Float128, b: Float128) -> Float128 {
    if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
        return Float128::NAN;
    }

    let sign = a.sign_bit() ^ b.sign_bit();
    if a.is_zero() || b.is_zero() {
        // 0 × 0 is +0; a single zero operand keeps the xor'd sign.
        return if a.is_zero() && b.is_zero() {
            Float128::ZERO
        } else {
            signed_zero(sign)
        };
    }

    let (m_a, e_a) = a.normalized();
    let (m_b, e_b) = b.normalized();
    let e = e_a + e_b;

    // Exact product of two 113-bit significands: 225 or 226 bits, leading
    // bit at position 224 or 225.
    let p = U256::widening_mul::<Accel>(m_a, m_b);
    let (sig, e) = if p.bit(225) {
        (shr_sticky_u256(p, 110), e + 1)
    } else {
        (shr_sticky_u256(p, 109), e)
    };
    round_pack(sign, sig, e)
}
