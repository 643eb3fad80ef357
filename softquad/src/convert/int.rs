//! Conversions between `Float128` and the integer widths 8..128.
//!
//! Inbound conversions are exact below 113 significant bits and RNE-rounded
//! above. Outbound conversions truncate toward zero, then either demand the
//! result be in range (checked) or clamp to the target's bounds
//! (saturating, with NaN mapping to zero).

use crate::arith::{round_pack, shr_sticky_u128};
use crate::bits::{Float128, SIG_BITS};
use crate::convert::FromQuad;
use crate::error::QuadError;

/// Builds a value from an unsigned magnitude, rounding when the magnitude
/// needs more than 113 bits.
fn from_unsigned(n: u128) -> Float128 {
    if n == 0 {
        return Float128::ZERO;
    }
    let top = 127 - n.leading_zeros();
    if top <= SIG_BITS {
        return Float128::encode(false, n << (SIG_BITS - top), top as i32);
    }
    // Up to 15 bits fall below the significand; keep them as G/R/S.
    let drop = top - SIG_BITS;
    let sig = if drop <= 3 {
        n << (3 - drop)
    } else {
        shr_sticky_u128(n, drop - 3)
    };
    round_pack(false, sig, top as i32)
}

/// The truncated magnitude of a value, when it fits 128 bits.
enum IntPart {
    Nan,
    TooBig,
    Magnitude(u128),
}

fn unsigned_magnitude(v: Float128) -> IntPart {
    if v.is_nan() {
        return IntPart::Nan;
    }
    if v.is_infinite() {
        return IntPart::TooBig;
    }
    let t = v.trunc();
    if t.is_zero() {
        return IntPart::Magnitude(0);
    }
    let (m, e) = t.normalized();
    if e > 127 {
        return IntPart::TooBig;
    }
    if e >= SIG_BITS as i32 {
        IntPart::Magnitude(m << (e as u32 - SIG_BITS))
    } else {
        // Truncation already cleared the bits this shift drops.
        IntPart::Magnitude(m >> (SIG_BITS as i32 - e) as u32)
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Float128 {
            fn from(n: $ty) -> Self {
                from_unsigned(u128::from(n))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Float128 {
            fn from(n: $ty) -> Self {
                let magnitude = from_unsigned(u128::from(n.unsigned_abs()));
                if n < 0 {
                    magnitude.flip_sign()
                } else {
                    magnitude
                }
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128);

macro_rules! impl_quad_to_unsigned {
    ($($ty:ty),*) => {$(
        impl FromQuad for $ty {
            fn from_quad_checked(value: Float128) -> Result<Self, QuadError> {
                const ERR: QuadError = QuadError::Conversion { target: stringify!($ty) };
                match unsigned_magnitude(value) {
                    IntPart::Nan | IntPart::TooBig => Err(ERR),
                    IntPart::Magnitude(0) => Ok(0),
                    IntPart::Magnitude(_) if value.sign_bit() => Err(ERR),
                    IntPart::Magnitude(m) => <$ty>::try_from(m).map_err(|_| ERR),
                }
            }

            fn from_quad_saturating(value: Float128) -> Self {
                match unsigned_magnitude(value) {
                    IntPart::Nan => 0,
                    IntPart::TooBig => {
                        if value.sign_bit() {
                            0
                        } else {
                            <$ty>::MAX
                        }
                    }
                    IntPart::Magnitude(_) if value.sign_bit() => 0,
                    IntPart::Magnitude(m) => <$ty>::try_from(m).unwrap_or(<$ty>::MAX),
                }
            }

            fn from_quad_truncating(value: Float128) -> Self {
                match unsigned_magnitude(value) {
                    IntPart::Nan | IntPart::TooBig => 0,
                    IntPart::Magnitude(m) => {
                        let low = m as $ty;
                        if value.sign_bit() {
                            low.wrapping_neg()
                        } else {
                            low
                        }
                    }
                }
            }
        }
    )*};
}

impl_quad_to_unsigned!(u8, u16, u32, u64, u128);

macro_rules! impl_quad_to_signed {
    ($($ty:ty),*) => {$(
        impl FromQuad for $ty {
            fn from_quad_checked(value: Float128) -> Result<Self, QuadError> {
                const ERR: QuadError = QuadError::Conversion { target: stringify!($ty) };
                match unsigned_magnitude(value) {
                    IntPart::Nan | IntPart::TooBig => Err(ERR),
                    IntPart::Magnitude(m) => {
                        if value.sign_bit() {
                            // The negative range reaches one further down.
                            if m > <$ty>::MIN.unsigned_abs() as u128 {
                                Err(ERR)
                            } else {
                                Ok((m as $ty).wrapping_neg())
                            }
                        } else {
                            <$ty>::try_from(m).map_err(|_| ERR)
                        }
                    }
                }
            }

            fn from_quad_saturating(value: Float128) -> Self {
                match unsigned_magnitude(value) {
                    IntPart::Nan => 0,
                    IntPart::TooBig => {
                        if value.sign_bit() {
                            <$ty>::MIN
                        } else {
                            <$ty>::MAX
                        }
                    }
                    IntPart::Magnitude(m) => {
                        if value.sign_bit() {
                            if m > <$ty>::MIN.unsigned_abs() as u128 {
                                <$ty>::MIN
                            } else {
                                (m as $ty).wrapping_neg()
                            }
                        } else {
                            <$ty>::try_from(m).unwrap_or(<$ty>::MAX)
                        }
                    }
                }
            }

            fn from_quad_truncating(value: Float128) -> Self {
                match unsigned_magnitude(value) {
                    IntPart::Nan | IntPart::TooBig => 0,
                    IntPart::Magnitude(m) => {
                        let low = m as $ty;
                        if value.sign_bit() {
                            low.wrapping_neg()
                        } else {
                            low
                        }
                    }
                }
            }
        }
    )*};
}

impl_quad_to_signed!(i8, i16, i32, i64, i128);
