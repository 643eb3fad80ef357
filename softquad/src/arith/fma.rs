//! Fused multiply-add: `a·b + c` with a single rounding.
//!
//! The exact 226-bit product and the addend are aligned in a 512-bit frame
//! so no information is lost before the one rounding step at the end.

use softquad_wide::{U256, U512};

use super::{mul::mul, round_pack, shr_sticky_u512, signed_infinity, Accel};
use crate::bits::Float128;

/// Position of the implicit significand bit inside the 512-bit frame.
const FRAME_BIT: u32 = 336;

/// `a·b + c` with one rounding at the end.
pub(crate) fn fma(a: Float128, b: Float128, c: Float128) -> Float128 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return Float128::NAN;
    }
    if a.is_infinite() || b.is_infinite() {
        // An infinite product follows the addition rules: ∞·0 and ∞ − ∞
        // are invalid, anything else keeps the product's infinity.
        if a.is_zero() || b.is_zero() {
            return Float128::SENTINEL_NAN;
        }
        let p_sign = a.sign_bit() ^ b.sign_bit();
        if c.is_infinite() && c.sign_bit() != p_sign {
            return Float128::SENTINEL_NAN;
        }
        return signed_infinity(p_sign);
    }
    if c.is_infinite() {
        return c;
    }
    if a.is_zero() || b.is_zero() {
        let p_sign = a.sign_bit() ^ b.sign_bit();
        if c.is_zero() {
            // Both terms are zeros: +0 unless both are negative.
            return if p_sign && c.sign_bit() {
                Float128::NEG_ZERO
            } else {
                Float128::ZERO
            };
        }
        return c;
    }
    if c.is_zero() {
        // The product of finite nonzero operands never cancels to exact
        // zero, so the single rounding of the plain multiply is the
        // single rounding of the fma.
        return mul(a, b);
    }

    let (m_a, e_a) = a.normalized();
    let (m_b, e_b) = b.normalized();
    let (m_c, e_c) = c.normalized();
    let p_sign = a.sign_bit() ^ b.sign_bit();
    let c_sign = c.sign_bit();

    // Product: leading bit at FRAME_BIT or FRAME_BIT+1 with exponent e_p.
    let e_p = e_a + e_b;
    let mut p = U512::from_u256(U256::widening_mul::<Accel>(m_a, m_b)) << (FRAME_BIT - 224);
    // Addend: leading bit exactly at FRAME_BIT with exponent e_c.
    let mut q = U512::from_u256(U256::from_u128(m_c)) << (FRAME_BIT - 112);

    // Align the term with the smaller exponent, folding dropped bits into
    // the frame's sticky position.
    let e = if e_p >= e_c {
        q = shr_sticky_u512(q, (e_p - e_c).min(512) as u32);
        e_p
    } else {
        p = shr_sticky_u512(p, (e_c - e_p).min(512) as u32);
        e_c
    };

    let (sum, sign) = if p_sign == c_sign {
        (p.wrapping_add(q), p_sign)
    } else if p >= q {
        (p.wrapping_sub(q), p_sign)
    } else {
        (q.wrapping_sub(p), c_sign)
    };
    if sum.is_zero() {
        // Exact cancellation of product against addend.
        return Float128::ZERO;
    }

    // Normalize the leading bit to position 115 of a 128-bit significand
    // and fold everything below into sticky.
    let top = 511 - sum.leading_zeros();
    let e = e + top as i32 - FRAME_BIT as i32;
    let sig = if top >= 115 {
        let shifted = shr_sticky_u512(sum, top - 115);
        shifted.low_u128()
    } else {
        (sum << (115 - top)).low_u128()
    };
    round_pack(sign, sig, e)
}
