//! The correctly rounded arithmetic core.
//!
//! Every operation follows the same data flow: classify the operands,
//! build an unrounded intermediate in a widened integer (the 113-bit
//! significand shifted left three bits for guard/round/sticky), normalize,
//! then construct the result with a single round-to-nearest-ties-to-even
//! step in [`round_pack`]. The sticky bit is the OR of every bit discarded
//! by alignment shifts or by the low half of a wide multiply or divide.

pub(crate) mod add;
pub(crate) mod div;
pub(crate) mod fma;
pub(crate) mod mul;
pub(crate) mod rem;
mod scale;

use crate::bits::{Float128, EXP_MAX, EXP_MIN};
use softquad_wide::{U256, U512};

/// The accelerator backend the engine is compiled against. Swapping in
/// [`softquad_wide::SoftWide`] changes no observable value.
pub(crate) type Accel = softquad_wide::HostWide;

/// ±0 with the given sign.
#[inline]
pub(crate) fn signed_zero(sign: bool) -> Float128 {
    if sign {
        Float128::NEG_ZERO
    } else {
        Float128::ZERO
    }
}

/// ±∞ with the given sign.
#[inline]
pub(crate) fn signed_infinity(sign: bool) -> Float128 {
    if sign {
        Float128::NEG_INFINITY
    } else {
        Float128::INFINITY
    }
}

/// Right shift that ORs every discarded bit into bit 0 of the result.
#[inline]
pub(crate) fn shr_sticky_u128(x: u128, n: u32) -> u128 {
    if n == 0 {
        x
    } else if n >= 128 {
        u128::from(x != 0)
    } else {
        x >> n | u128::from(x & ((1 << n) - 1) != 0)
    }
}

/// Right shift of a 256-bit intermediate down to 128 bits, with sticky.
///
/// The caller guarantees the kept window fits 128 bits.
pub(crate) fn shr_sticky_u256(x: U256, n: u32) -> u128 {
    debug_assert!(n >= 128 || (x >> n).high_u128() == 0);
    if n == 0 {
        return x.low_u128();
    }
    if n >= 256 {
        return u128::from(!x.is_zero());
    }
    let kept = x >> n;
    let dropped = !(x << (256 - n)).is_zero();
    kept.low_u128() | u128::from(dropped)
}

/// Right shift of a 512-bit intermediate, keeping full width, with sticky.
pub(crate) fn shr_sticky_u512(x: U512, n: u32) -> U512 {
    if n == 0 {
        return x;
    }
    if n >= 512 {
        return if x.is_zero() { U512::ZERO } else { U512::ONE };
    }
    let kept = x >> n;
    if (x << (512 - n)).is_zero() {
        kept
    } else {
        kept | U512::ONE
    }
}

/// Finishes an operation: denormalizes into the subnormal range when the
/// exponent is below −16382 (accumulating sticky), applies one
/// round-to-nearest-ties-to-even step on the three low bits, and encodes.
/// Saturates to ±∞ past the exponent range.
///
/// `sig` is the widened significand with its leading bit at position 115
/// (113 significand bits over guard/round/sticky); `e` is its unbiased
/// exponent.
pub(crate) fn round_pack(sign: bool, mut sig: u128, mut e: i32) -> Float128 {
    debug_assert!(sig >> 115 == 1, "round_pack takes a normalized significand");

    if e > EXP_MAX {
        return signed_infinity(sign);
    }
    if e < EXP_MIN {
        sig = shr_sticky_u128(sig, (EXP_MIN - e).min(128) as u32);
        e = EXP_MIN;
    }

    let guard = sig >> 2 & 1;
    let round_sticky = sig & 3;
    let lsb = sig >> 3 & 1;
    let mut m = sig >> 3;
    if guard == 1 && (round_sticky != 0 || lsb == 1) {
        m += 1;
    }
    if m == 1 << 113 {
        m >>= 1;
        e += 1;
        if e > EXP_MAX {
            return signed_infinity(sign);
        }
    }
    Float128::encode(sign, m, e)
}
