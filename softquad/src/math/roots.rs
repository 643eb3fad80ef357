//! Square, cube, and n-th roots, and the scaled hypotenuse.
//!
//! Each Newton iteration runs after reducing the argument by an exponent
//! multiple of the root index, so the fixed iteration count converges at
//! every magnitude and the final rescale is an exact exponent shift.

use super::NEWTON_ITERATIONS;
use crate::bits::Float128;

impl Float128 {
    /// Square root. Negative inputs (other than −0, which passes through)
    /// are a domain error.
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return self;
        }
        if self.sign_bit() {
            return Self::SENTINEL_NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        // Even-exponent reduction into [1, 4): √(z·4^k) = √z·2^k.
        let k = self.ilogb().div_euclid(2);
        let z = self.scale_b(-2 * k);
        let mut y = z;
        for _ in 0..NEWTON_ITERATIONS {
            let next = (y + z / y).scale_b(-1);
            if next == y {
                break;
            }
            y = next;
        }
        y.scale_b(k)
    }

    /// Cube root. Defined for every sign.
    #[must_use]
    pub fn cbrt(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() || self.is_infinite() {
            return self;
        }
        if self.sign_bit() {
            return self.flip_sign().cbrt().flip_sign();
        }
        let k = self.ilogb().div_euclid(3);
        let z = self.scale_b(-3 * k);
        let third = Self::ONE / Self::from(3u32);
        let mut y = z;
        for _ in 0..NEWTON_ITERATIONS {
            let next = (y.scale_b(1) + z / (y * y)) * third;
            if next == y {
                break;
            }
            y = next;
        }
        y.scale_b(k)
    }

    /// The n-th root. `n = 0` is a domain error; negative `n` is the
    /// reciprocal of the |n|-th root; even roots of negative values are a
    /// domain error.
    #[must_use]
    pub fn root_n(self, n: i32) -> Self {
        match n {
            0 => return Self::SENTINEL_NAN,
            1 => return self,
            2 => return self.sqrt(),
            3 => return self.cbrt(),
            _ => {}
        }
        if n < 0 {
            return Self::ONE / self.root_n(-n);
        }
        if self.is_nan() {
            return Self::NAN;
        }
        if self.sign_bit() && !self.is_zero() {
            if n % 2 == 0 {
                return Self::SENTINEL_NAN;
            }
            return self.flip_sign().root_n(n).flip_sign();
        }
        if self.is_zero() || self.is_infinite() || self == Self::ONE {
            return self;
        }
        // Seed from the exponential identity, then polish with Newton;
        // the seed is already good to ~7 digits so the polish converges
        // immediately.
        let inv_n = Self::ONE / Self::from(n);
        let mut y = (self.log2() * inv_n).exp2();
        let n_f = Self::from(n);
        for _ in 0..NEWTON_ITERATIONS {
            let pow = y.powi(n - 1);
            let next = ((n_f - Self::ONE) * y + self / pow) / n_f;
            if next == y {
                break;
            }
            y = next;
        }
        y
    }

    /// √(x² + y²) without intermediate overflow: both legs are scaled by
    /// the larger exponent before squaring.
    #[must_use]
    pub fn hypot(self, other: Self) -> Self {
        if self.is_infinite() || other.is_infinite() {
            return Self::INFINITY;
        }
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        let big = self.abs().max(other.abs());
        if big.is_zero() {
            return Self::ZERO;
        }
        let k = big.ilogb();
        let a = self.scale_b(-k);
        let b = other.scale_b(-k);
        a.mul_add(a, b * b).sqrt().scale_b(k)
    }

    /// Integer power by binary exponentiation.
    #[must_use]
    pub fn powi(self, n: i32) -> Self {
        if n < 0 {
            return Self::ONE / self.powi(-n);
        }
        let mut base = self;
        let mut n = n as u32;
        let mut acc = Self::ONE;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            n >>= 1;
        }
        acc
    }
}
