//! Operator wiring onto the arithmetic core.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::arith;
use crate::bits::Float128;

impl Add for Float128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        arith::add::add(self, rhs)
    }
}

impl Sub for Float128 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        arith::add::sub(self, rhs)
    }
}

impl Mul for Float128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        arith::mul::mul(self, rhs)
    }
}

impl Div for Float128 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        arith::div::div(self, rhs)
    }
}

impl Rem for Float128 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        arith::rem::modulo(self, rhs)
    }
}

impl Neg for Float128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.flip_sign()
    }
}

impl AddAssign for Float128 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Float128 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Float128 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Float128 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Float128 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Float128 {
    /// Fused multiply-add: `self · a + b` with a single rounding at the
    /// end.
    #[must_use]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        arith::fma::fma(self, a, b)
    }

    /// The IEEE 754 remainder of `self / rhs`: `self − rhs·n` where `n`
    /// is `self / rhs` rounded to the nearest integer, ties to even.
    /// Unlike `%` the result can have the opposite sign of `self`.
    #[must_use]
    pub fn ieee_rem(self, rhs: Self) -> Self {
        arith::rem::ieee_remainder(self, rhs)
    }
}
