//! Conversions to and from the narrower binary interchange formats.
//!
//! One pair of field-generic routines covers binary16, binary32, and
//! binary64: a narrow encoding is widened exactly (every narrow value is
//! representable), and narrowing applies round-to-nearest-ties-to-even on
//! the shifted mantissa with gradual underflow into the narrow format's
//! subnormal range. binary16 travels as raw `u16` bits since stable Rust
//! has no `f16` type.

use crate::arith::shr_sticky_u128;
use crate::bits::{Float128, SIG_BITS};
use crate::error::QuadError;
use crate::convert::FromQuad;

/// Widens a narrow IEEE binary encoding. Exact for every input.
fn from_narrow(bits: u128, exp_bits: u32, sig_bits: u32) -> Float128 {
    let bias = (1i32 << (exp_bits - 1)) - 1;
    let max_code = (1u32 << exp_bits) - 1;

    let sign = bits >> (exp_bits + sig_bits) & 1 == 1;
    let exp_code = (bits >> sig_bits) as u32 & max_code;
    let frac = bits & ((1 << sig_bits) - 1);

    if exp_code == max_code {
        return if frac == 0 {
            if sign {
                Float128::NEG_INFINITY
            } else {
                Float128::INFINITY
            }
        } else {
            Float128::NAN
        };
    }
    if exp_code == 0 {
        if frac == 0 {
            return if sign { Float128::NEG_ZERO } else { Float128::ZERO };
        }
        // Narrow subnormal: every one of them is a quad normal.
        let mut m = frac << (SIG_BITS - sig_bits);
        let shift = m.leading_zeros() - 15;
        m <<= shift;
        return Float128::encode(sign, m, 1 - bias - shift as i32);
    }
    let m = (frac | 1 << sig_bits) << (SIG_BITS - sig_bits);
    Float128::encode(sign, m, exp_code as i32 - bias)
}

/// Narrows to an IEEE binary encoding with one RNE rounding, overflow to
/// ±∞, and gradual underflow.
fn to_narrow(v: Float128, exp_bits: u32, sig_bits: u32) -> u128 {
    let bias = (1i32 << (exp_bits - 1)) - 1;
    let max_code = (1u128 << exp_bits) - 1;
    let sign_bit = u128::from(v.sign_bit()) << (exp_bits + sig_bits);

    if v.is_nan() {
        // The canonical narrow quiet NaN, positive sign.
        return max_code << sig_bits | 1 << (sig_bits - 1);
    }
    if v.is_infinite() {
        return sign_bit | max_code << sig_bits;
    }
    if v.is_zero() {
        return sign_bit;
    }

    let (m, mut e) = v.normalized();
    if e > bias {
        // Too large before rounding even starts.
        return sign_bit | max_code << sig_bits;
    }

    let min_e = 1 - bias;
    let extra = if e < min_e { (min_e - e) as u32 } else { 0 };
    let mut sig = shr_sticky_u128(m << 3, (SIG_BITS - sig_bits + extra).min(128));
    if extra > 0 {
        e = min_e;
    }

    let guard = sig >> 2 & 1;
    let round_sticky = sig & 3;
    let lsb = sig >> 3 & 1;
    let mut mant = sig >> 3;
    if guard == 1 && (round_sticky != 0 || lsb == 1) {
        mant += 1;
    }
    if mant >> (sig_bits + 1) != 0 {
        mant >>= 1;
        e += 1;
    }

    if mant >> sig_bits != 0 {
        if e > bias {
            return sign_bit | max_code << sig_bits;
        }
        sign_bit | ((e + bias) as u128) << sig_bits | (mant & ((1 << sig_bits) - 1))
    } else {
        // Subnormal (possibly rounded all the way down to zero).
        sign_bit | mant
    }
}

impl From<f64> for Float128 {
    fn from(x: f64) -> Self {
        from_narrow(u128::from(x.to_bits()), 11, 52)
    }
}

impl From<f32> for Float128 {
    fn from(x: f32) -> Self {
        from_narrow(u128::from(x.to_bits()), 8, 23)
    }
}

impl Float128 {
    /// Widens a binary16 value given as its raw bit pattern. Exact.
    #[must_use]
    pub fn from_bits16(bits: u16) -> Self {
        from_narrow(u128::from(bits), 5, 10)
    }

    /// Narrows to binary16, returned as its raw bit pattern.
    #[must_use]
    pub fn to_bits16(self) -> u16 {
        to_narrow(self, 5, 10) as u16
    }

    /// Narrows to binary32.
    #[must_use]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(to_narrow(self, 8, 23) as u32)
    }

    /// Narrows to binary64.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from_bits(to_narrow(self, 11, 52) as u64)
    }
}

impl FromQuad for f64 {
    fn from_quad_checked(value: Float128) -> Result<Self, QuadError> {
        let narrow = value.to_f64();
        if narrow.is_infinite() && value.is_finite() {
            return Err(QuadError::Conversion { target: "f64" });
        }
        Ok(narrow)
    }

    fn from_quad_saturating(value: Float128) -> Self {
        value.to_f64()
    }

    fn from_quad_truncating(value: Float128) -> Self {
        value.to_f64()
    }
}

impl FromQuad for f32 {
    fn from_quad_checked(value: Float128) -> Result<Self, QuadError> {
        let narrow = value.to_f32();
        if narrow.is_infinite() && value.is_finite() {
            return Err(QuadError::Conversion { target: "f32" });
        }
        Ok(narrow)
    }

    fn from_quad_saturating(value: Float128) -> Self {
        value.to_f32()
    }

    fn from_quad_truncating(value: Float128) -> Self {
        value.to_f32()
    }
}
