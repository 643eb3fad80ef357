//! Circular functions via CORDIC with angle reduction.

use super::cordic;
use crate::bits::Float128;

impl Float128 {
    /// Simultaneous sine and cosine.
    ///
    /// The argument is reduced modulo τ into [−π, π] by the IEEE
    /// remainder, then folded into the CORDIC convergence range
    /// [−π/2, π/2] by a half-turn that negates both results. NaN and ±∞
    /// have no angle: NaN propagates, ∞ is a domain error.
    #[must_use]
    pub fn sin_cos(self) -> (Self, Self) {
        if self.is_nan() {
            return (Self::NAN, Self::NAN);
        }
        if self.is_infinite() {
            return (Self::SENTINEL_NAN, Self::SENTINEL_NAN);
        }
        let mut phi = self.ieee_rem(Self::tau());
        let mut negate = false;
        if phi > Self::frac_pi_2() {
            phi = phi - Self::pi();
            negate = true;
        } else if phi < Self::frac_pi_2().flip_sign() {
            phi = phi + Self::pi();
            negate = true;
        }
        let (s, c) = cordic::rotate(phi);
        if negate {
            (s.flip_sign(), c.flip_sign())
        } else {
            (s, c)
        }
    }

    /// Sine.
    #[must_use]
    pub fn sin(self) -> Self {
        self.sin_cos().0
    }

    /// Cosine.
    #[must_use]
    pub fn cos(self) -> Self {
        self.sin_cos().1
    }

    /// Tangent.
    #[must_use]
    pub fn tan(self) -> Self {
        let (s, c) = self.sin_cos();
        s / c
    }

    /// sin(πx).
    #[must_use]
    pub fn sin_pi(self) -> Self {
        (self * Self::pi()).sin()
    }

    /// cos(πx).
    #[must_use]
    pub fn cos_pi(self) -> Self {
        (self * Self::pi()).cos()
    }

    /// tan(πx).
    #[must_use]
    pub fn tan_pi(self) -> Self {
        (self * Self::pi()).tan()
    }
}
