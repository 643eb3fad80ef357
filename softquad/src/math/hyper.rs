//! Hyperbolic functions and their inverses, in terms of exp and ln.

use crate::bits::Float128;

impl Float128 {
    /// Hyperbolic sine: (e^x − e^−x)/2.
    #[must_use]
    pub fn sinh(self) -> Self {
        if self.is_zero() || self.is_nan() || self.is_infinite() {
            return self;
        }
        (self.exp() - self.flip_sign().exp()).scale_b(-1)
    }

    /// Hyperbolic cosine: (e^x + e^−x)/2.
    #[must_use]
    pub fn cosh(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        (self.exp() + self.flip_sign().exp()).scale_b(-1)
    }

    /// Hyperbolic tangent.
    #[must_use]
    pub fn tanh(self) -> Self {
        if self.is_zero() || self.is_nan() {
            return self;
        }
        // Past |x| = 40 the result is 1 to more than quad precision, and
        // the e^2x form would reach ∞/∞.
        if self.abs() > Self::from(40u32) {
            return Self::ONE.copy_sign(self);
        }
        let t = self.scale_b(1).exp();
        (t - Self::ONE) / (t + Self::ONE)
    }

    /// Inverse hyperbolic sine: ln(x + √(x² + 1)), via odd symmetry for
    /// negative inputs.
    #[must_use]
    pub fn asinh(self) -> Self {
        if self.is_zero() || self.is_nan() || self.is_infinite() {
            return self;
        }
        if self.sign_bit() {
            return self.flip_sign().asinh().flip_sign();
        }
        // For large x the square would overflow; asinh(x) ≈ ln(2x).
        if self > Self::ONE.scale_b(8000) {
            return self.ln() + Self::TWO.ln();
        }
        (self + self.mul_add(self, Self::ONE).sqrt()).ln()
    }

    /// Inverse hyperbolic cosine: ln(x + √(x² − 1)), domain x ≥ 1.
    #[must_use]
    pub fn acosh(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self < Self::ONE {
            return Self::SENTINEL_NAN;
        }
        if self == Self::ONE {
            return Self::ZERO;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        if self > Self::ONE.scale_b(8000) {
            return self.ln() + Self::TWO.ln();
        }
        (self + self.mul_add(self, Self::NEG_ONE).sqrt()).ln()
    }

    /// Inverse hyperbolic tangent: ln((1 + x)/(1 − x))/2, domain
    /// (−1, 1) with ±1 mapping to ±∞.
    #[must_use]
    pub fn atanh(self) -> Self {
        if self.is_zero() || self.is_nan() {
            return self;
        }
        if self == Self::ONE {
            return Self::INFINITY;
        }
        if self == Self::NEG_ONE {
            return Self::NEG_INFINITY;
        }
        if self.abs() > Self::ONE {
            return Self::SENTINEL_NAN;
        }
        ((Self::ONE + self) / (Self::ONE - self)).ln().scale_b(-1)
    }
}
