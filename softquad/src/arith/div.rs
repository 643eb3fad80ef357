//! Division via 256-by-128-bit long division.

use softquad_wide::U256;

use super::{round_pack, shr_sticky_u256, signed_infinity, signed_zero, Accel};
use crate::bits::Float128;

/// `a ÷ b`, correctly rounded.
pub(crate) fn div(a: Float128, b: Float128) -> Float128 {
    if a.is_nan() || b.is_nan() {
        return Float128::NAN;
    }
    let sign = a.sign_bit() ^ b.sign_bit();
    if a.is_infinite() {
        if b.is_infinite() {
            return Float128::SENTINEL_NAN;
        }
        return signed_infinity(sign);
    }
    if b.is_infinite() {
        return signed_zero(sign);
    }
    if a.is_zero() {
        if b.is_zero() {
            return Float128::SENTINEL_NAN;
        }
        return signed_zero(sign);
    }
    if b.is_zero() {
        return signed_infinity(sign);
    }

    let (m_a, e_a) = a.normalized();
    let (m_b, e_b) = b.normalized();
    let e = e_a - e_b;

    // Widen the dividend by 2^128 so the quotient of the two significands
    // carries 128 fraction bits: q = ⌊m_a·2^128 / m_b⌋ has its leading bit
    // at 127 or 128 (the significand ratio lies in (1/2, 2)).
    let dividend = U256::from_parts(m_a, 0);
    let (q, r) = dividend.divrem::<Accel>(m_b);

    let (sig, e) = if q.bit(128) {
        (shr_sticky_u256(q, 13), e)
    } else {
        (shr_sticky_u256(q, 12), e - 1)
    };
    // A nonzero remainder is more discarded value below the quotient.
    let sig = sig | u128::from(r != 0);
    round_pack(sign, sig, e)
}
