//! Rounding to integral values.
//!
//! All of these operate directly on the encoding: with unbiased exponent
//! `e`, the fractional part of a finite value occupies the low `112 − e`
//! bits of the significand, so rounding is a mask plus an optional
//! increment at the 2^0 digit.

use crate::bits::{Float128, SIG_BITS};
use crate::consts::tables;
use crate::error::QuadError;

impl Float128 {
    /// Rounds toward zero.
    #[must_use]
    pub fn trunc(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        let e = self.exponent();
        if e < 0 {
            return if self.sign_bit() {
                Self::NEG_ZERO
            } else {
                Self::ZERO
            };
        }
        if e >= SIG_BITS as i32 {
            return self;
        }
        let frac_bits = (SIG_BITS as i32 - e) as u32;
        Self::from_bits(self.to_bits() & !((1 << frac_bits) - 1))
    }

    /// Rounds to the nearest integer, ties to even (banker's rounding).
    #[must_use]
    pub fn round_ties_even(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        let e = self.exponent();
        if e >= SIG_BITS as i32 || self.is_zero() {
            return self;
        }
        if e < -1 {
            // |v| < 1/2 rounds to zero of the same sign. Subnormals land
            // here: their effective exponent is −16382.
            return if self.sign_bit() {
                Self::NEG_ZERO
            } else {
                Self::ZERO
            };
        }
        if e == -1 {
            // |v| ∈ [1/2, 1): exactly 1/2 ties to 0, everything else
            // rounds to ±1.
            return if self.trailing_significand() == 0 {
                if self.sign_bit() {
                    Self::NEG_ZERO
                } else {
                    Self::ZERO
                }
            } else if self.sign_bit() {
                Self::NEG_ONE
            } else {
                Self::ONE
            };
        }

        let frac_bits = (SIG_BITS as i32 - e) as u32;
        let m = self.significand();
        let frac = m & ((1 << frac_bits) - 1);
        let half = 1u128 << (frac_bits - 1);
        let mut int_part = m >> frac_bits;
        if frac > half || (frac == half && int_part & 1 == 1) {
            int_part += 1;
        }
        // Re-position the integer as a significand; the increment may
        // carry into the next binade (e.g. 1.5 → 2).
        let mut e = e;
        let mut m = int_part << frac_bits;
        if m >> (SIG_BITS + 1) != 0 {
            m >>= 1;
            e += 1;
        }
        Self::encode(self.sign_bit(), m, e)
    }

    /// Rounds toward −∞.
    #[must_use]
    pub fn floor(self) -> Self {
        let t = self.trunc();
        if self.sign_bit() && t != self {
            t - Self::ONE
        } else {
            t
        }
    }

    /// Rounds toward +∞.
    #[must_use]
    pub fn ceil(self) -> Self {
        let t = self.trunc();
        if !self.sign_bit() && t != self {
            t + Self::ONE
        } else {
            t
        }
    }

    /// Rounds to `digits` decimal places, ties to even: the value is
    /// scaled by 10^digits, rounded to an integer, and scaled back.
    ///
    /// Digit counts of 38 and above return the value unchanged (the
    /// format carries at most 38 significant decimal digits).
    ///
    /// # Errors
    ///
    /// [`QuadError::DigitsOutOfRange`] when `digits` is negative.
    pub fn round_digits(self, digits: i32) -> Result<Self, QuadError> {
        if digits < 0 {
            return Err(QuadError::DigitsOutOfRange(digits));
        }
        if digits >= 38 || !self.is_finite() {
            return Ok(self);
        }
        let scale = tables().pow10[digits as usize];
        Ok((self * scale).round_ties_even() / scale)
    }
}
