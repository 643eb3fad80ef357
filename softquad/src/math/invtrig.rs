//! Inverse circular functions by Newton iteration against sin/cos.

use super::NEWTON_ITERATIONS;
use crate::bits::Float128;

impl Float128 {
    /// Arcsine into [−π/2, π/2]. Inputs outside [−1, 1] are a domain
    /// error.
    #[must_use]
    pub fn asin(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.abs() > Self::ONE {
            return Self::SENTINEL_NAN;
        }
        if self.is_zero() {
            return self;
        }
        // Solve sin y = x. Near the ±1 endpoints cos y vanishes and the
        // step degrades to halving the residual; 25 iterations still land
        // within ~1e-8 of ±π/2.
        let mut y = Self::ZERO;
        for _ in 0..NEWTON_ITERATIONS {
            let (s, c) = y.sin_cos();
            let next = y + (self - s) / c;
            if next == y {
                break;
            }
            y = next;
        }
        y
    }

    /// Arccosine into [0, π]. Inputs outside [−1, 1] are a domain error.
    #[must_use]
    pub fn acos(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.abs() > Self::ONE {
            return Self::SENTINEL_NAN;
        }
        // Solve cos y = x from the interior seed y₀ = 1.
        let mut y = Self::ONE;
        for _ in 0..NEWTON_ITERATIONS {
            let (s, c) = y.sin_cos();
            let next = y + (c - self) / s;
            if next == y {
                break;
            }
            y = next;
        }
        y
    }

    /// Arctangent into (−π/2, π/2).
    #[must_use]
    pub fn atan(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return self;
        }
        if self.abs() > Self::ONE {
            // atan(x) = ±π/2 − atan(1/x) keeps the Newton seed inside its
            // convergence basin; ±∞ falls out as atan(±0).
            let folded = (Self::ONE / self).atan();
            return if self.sign_bit() {
                Self::frac_pi_2().flip_sign() - folded
            } else {
                Self::frac_pi_2() - folded
            };
        }
        // Solve tan y = x as sin y − x·cos y = 0, expressed in fma form.
        let mut y = Self::ZERO;
        for _ in 0..NEWTON_ITERATIONS {
            let (s, c) = y.sin_cos();
            let next = self.mul_add(c * c, s.flip_sign() * c) + y;
            if next == y {
                break;
            }
            y = next;
        }
        y
    }

    /// Four-quadrant arctangent of `self / x` (self is the ordinate).
    #[must_use]
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if y.is_nan() || x.is_nan() {
            return Self::NAN;
        }
        // Infinite legs have exact quadrant diagonals and axes.
        if y.is_infinite() {
            let base = if x.is_infinite() {
                if x.sign_bit() {
                    // 3π/4
                    Self::pi() - Self::frac_pi_4()
                } else {
                    Self::frac_pi_4()
                }
            } else {
                Self::frac_pi_2()
            };
            return base.copy_sign(y);
        }
        if x.is_infinite() {
            let base = if x.sign_bit() { Self::pi() } else { Self::ZERO };
            return base.copy_sign(y);
        }
        if y.is_zero() {
            // Includes the origin: the result follows the axis sign
            // conventions.
            let base = if x.sign_bit() { Self::pi() } else { Self::ZERO };
            return base.copy_sign(y);
        }
        if x.is_zero() {
            return Self::frac_pi_2().copy_sign(y);
        }

        let principal = (y / x).atan();
        if x.sign_bit() {
            if y.sign_bit() {
                principal - Self::pi()
            } else {
                principal + Self::pi()
            }
        } else {
            principal
        }
    }

    /// asin(x)/π.
    #[must_use]
    pub fn asin_pi(self) -> Self {
        self.asin() / Self::pi()
    }

    /// acos(x)/π.
    #[must_use]
    pub fn acos_pi(self) -> Self {
        self.acos() / Self::pi()
    }

    /// atan(x)/π.
    #[must_use]
    pub fn atan_pi(self) -> Self {
        self.atan() / Self::pi()
    }

    /// atan2(y, x)/π.
    #[must_use]
    pub fn atan2_pi(self, x: Self) -> Self {
        self.atan2(x) / Self::pi()
    }
}
