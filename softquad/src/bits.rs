//! The binary128 encoding: field layout, encode/decode, canonical forms.
//!
//! A value is one `u128` partitioned MSB→LSB as sign (bit 127), biased
//! exponent (bits 126..112, bias 16383), trailing significand (bits 111..0).
//! The exponent code 0 marks zero and subnormals (effective exponent
//! −16382, no implicit bit); the code 32767 marks ∞ (empty significand)
//! and NaN (nonempty significand); everything else is a normal with an
//! implicit leading significand bit.

use serde::{Deserialize, Serialize};

/// Sign bit mask.
pub(crate) const SIGN_MASK: u128 = 1 << 127;
/// Biased-exponent field mask.
pub(crate) const EXP_MASK: u128 = 0x7fff << 112;
/// Trailing-significand field mask.
pub(crate) const FRAC_MASK: u128 = (1 << 112) - 1;
/// The implicit leading significand bit of a normal value.
pub(crate) const IMPLICIT_BIT: u128 = 1 << 112;
/// Width of the trailing significand field.
pub(crate) const SIG_BITS: u32 = 112;
/// Exponent bias.
pub(crate) const EXP_BIAS: i32 = 16383;
/// Biased exponent code reserved for ∞ and NaN.
pub(crate) const EXP_SAT: u32 = 0x7fff;
/// Smallest unbiased exponent of a finite value (normals and subnormals).
pub(crate) const EXP_MIN: i32 = -16382;
/// Largest unbiased exponent of a finite value.
pub(crate) const EXP_MAX: i32 = 16383;
/// The unbiased-exponent sentinel reported for ∞ and NaN.
pub(crate) const EXP_SENTINEL: i32 = 16384;

/// An IEEE 754-2019 binary128 (quadruple precision) floating-point value.
///
/// Pure value semantics: `Copy`, no heap, no interior state. All arithmetic
/// rounds to nearest, ties to even. Equality follows IEEE semantics (NaN is
/// unequal to everything including itself, the two zeros are equal); use
/// [`Float128::to_bits`] for representation identity.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float128 {
    bits: u128,
}

impl Float128 {
    /// Reinterprets a raw 128-bit encoding as a value.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    /// The raw 128-bit encoding.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u128 {
        self.bits
    }

    /// The raw sign bit.
    #[inline]
    #[must_use]
    pub const fn sign_bit(self) -> bool {
        self.bits & SIGN_MASK != 0
    }

    /// The raw 15-bit biased exponent code.
    #[inline]
    #[must_use]
    pub const fn biased_exponent(self) -> u32 {
        ((self.bits & EXP_MASK) >> SIG_BITS) as u32
    }

    /// The raw 112-bit trailing significand.
    #[inline]
    #[must_use]
    pub const fn trailing_significand(self) -> u128 {
        self.bits & FRAC_MASK
    }

    /// The unbiased exponent: −16382 for zero and subnormals, 16384 for
    /// ∞ and NaN, `E − 16383` otherwise.
    #[inline]
    #[must_use]
    pub const fn exponent(self) -> i32 {
        match self.biased_exponent() {
            0 => EXP_MIN,
            EXP_SAT => EXP_SENTINEL,
            e => e as i32 - EXP_BIAS,
        }
    }

    /// The significand with the implicit bit included for normal values
    /// (and for the ∞/NaN codes, where bit 112 is the implicit-one
    /// position); the bare trailing significand for zero and subnormals.
    #[inline]
    #[must_use]
    pub const fn significand(self) -> u128 {
        if self.biased_exponent() == 0 {
            self.trailing_significand()
        } else {
            self.trailing_significand() | IMPLICIT_BIT
        }
    }

    /// Packs sign, biased exponent, and trailing significand. The caller
    /// guarantees the fields are already in range.
    #[inline]
    #[must_use]
    pub(crate) const fn from_fields(sign: bool, biased_exp: u32, frac: u128) -> Self {
        let mut bits = (biased_exp as u128) << SIG_BITS | (frac & FRAC_MASK);
        if sign {
            bits |= SIGN_MASK;
        }
        Self { bits }
    }

    /// Encodes a finite value from an unbiased exponent and a significand
    /// that already satisfies the canonical invariant: either `e > −16382`
    /// and bit 112 of `m` is set (normal), or `e = −16382` and `m` may
    /// have bit 112 clear (subnormal or zero).
    #[must_use]
    pub(crate) fn encode(sign: bool, m: u128, e: i32) -> Self {
        debug_assert!(e >= EXP_MIN && e <= EXP_MAX);
        debug_assert!(m < (1 << 113));
        debug_assert!(m & IMPLICIT_BIT != 0 || e == EXP_MIN);
        if m & IMPLICIT_BIT == 0 {
            // Subnormal (or zero): exponent code 0, no implicit bit.
            Self::from_fields(sign, 0, m)
        } else {
            Self::from_fields(sign, (e + EXP_BIAS) as u32, m & FRAC_MASK)
        }
    }

    /// Decomposes a finite nonzero value into `(m, e)` with
    /// `m ∈ [2^112, 2^113)`: subnormals are shifted up and their exponent
    /// adjusted below −16382 so every caller sees a full-width significand.
    #[must_use]
    pub(crate) fn normalized(self) -> (u128, i32) {
        debug_assert!(self.is_finite() && !self.is_zero());
        let t = self.trailing_significand();
        if self.biased_exponent() == 0 {
            let shift = t.leading_zeros() - 15;
            (t << shift, EXP_MIN - shift as i32)
        } else {
            (t | IMPLICIT_BIT, self.exponent())
        }
    }

    /// The value with the sign bit cleared.
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        Self::from_bits(self.bits & !SIGN_MASK)
    }

    /// The value with the sign bit flipped.
    #[inline]
    #[must_use]
    pub(crate) const fn flip_sign(self) -> Self {
        Self::from_bits(self.bits ^ SIGN_MASK)
    }

    /// A value with `self`'s magnitude and `sign`'s sign.
    #[inline]
    #[must_use]
    pub const fn copy_sign(self, sign: Self) -> Self {
        Self::from_bits(self.bits & !SIGN_MASK | sign.bits & SIGN_MASK)
    }
}

impl core::fmt::Debug for Float128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Float128({} = s:{} e:{} t:0x{:028x})",
            self,
            u8::from(self.sign_bit()),
            self.exponent(),
            self.trailing_significand()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_roundtrip() {
        let v = Float128::from_fields(true, 16383, 0xdead_beef);
        assert!(v.sign_bit());
        assert_eq!(v.biased_exponent(), 16383);
        assert_eq!(v.exponent(), 0);
        assert_eq!(v.trailing_significand(), 0xdead_beef);
        assert_eq!(v.significand(), IMPLICIT_BIT | 0xdead_beef);
    }

    #[test]
    fn subnormal_decode() {
        let v = Float128::from_fields(false, 0, 1);
        assert_eq!(v.exponent(), EXP_MIN);
        assert_eq!(v.significand(), 1);
        let (m, e) = v.normalized();
        assert_eq!(m, 1 << 112);
        assert_eq!(e, EXP_MIN - 112);
    }

    #[test]
    fn encode_subnormal_boundary() {
        // Largest subnormal and smallest normal sit one ulp apart.
        let largest_sub = Float128::encode(false, FRAC_MASK, EXP_MIN);
        let smallest_norm = Float128::encode(false, IMPLICIT_BIT, EXP_MIN);
        assert_eq!(largest_sub.biased_exponent(), 0);
        assert_eq!(smallest_norm.biased_exponent(), 1);
        assert_eq!(largest_sub.to_bits() + 1, smallest_norm.to_bits());
    }

    #[test]
    fn sign_helpers() {
        let one = Float128::from_fields(false, 16383 /* e = 0 */, 0);
        assert!(!one.sign_bit());
        assert!(one.flip_sign().sign_bit());
        assert!(!one.flip_sign().abs().sign_bit());
        assert!(one.copy_sign(one.flip_sign()).sign_bit());
    }
}
