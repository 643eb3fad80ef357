//! Logarithms, exponentials, and powf.
//!
//! log₂ is the primitive: a recursion that extracts one bit of the
//! logarithm per level by repeated squaring. ln and log₁₀ divide by the
//! cached log₂ constants; the exponentials step to the integer part and
//! polish the fraction with Newton against the matching logarithm.

use super::NEWTON_ITERATIONS;
use crate::bits::Float128;
use crate::consts::tables;
use crate::convert::FromQuad;

/// Recursion depth of the log₂ bit extraction.
const LOG2_DEPTH: u32 = 25;

/// exp overflows past ln(MAX) ≈ 11356.6 and vanishes below the subnormal
/// floor; the guards sit just outside.
const EXP_OVERFLOW: i32 = 11357;
const EXP_UNDERFLOW: i32 = -11433;

/// One bit of log₂ per level: square y ∈ [1, 2) until it crosses 2, then
/// recurse on the half.
fn log2_recursive(y: Float128, depth: u32) -> Float128 {
    if depth == 0 || y == Float128::ONE {
        return Float128::ZERO;
    }
    let mut y = y;
    let mut m = 0i32;
    while y < Float128::TWO {
        y = y * y;
        m -= 1;
        if y == Float128::ONE {
            // Rounded onto the fixed point; no log bits remain.
            return Float128::ZERO;
        }
    }
    (Float128::ONE + log2_recursive(y.scale_b(-1), depth - 1)).scale_b(m)
}

impl Float128 {
    /// The unbiased binary exponent of the value, with subnormals
    /// adjusted for their leading zeros. Zero reports `i32::MIN`, ∞ and
    /// NaN report `i32::MAX`.
    #[must_use]
    pub fn ilogb(self) -> i32 {
        if self.is_zero() {
            return i32::MIN;
        }
        if !self.is_finite() {
            return i32::MAX;
        }
        self.normalized().1
    }

    /// Base-2 logarithm. Zero and negative inputs are a domain error, +∞
    /// maps to +∞.
    #[must_use]
    pub fn log2(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() || self.sign_bit() {
            return Self::SENTINEL_NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        let n = self.ilogb();
        let y = self.scale_b(-n);
        if y == Self::ONE {
            return Self::from(n);
        }
        Self::from(n) + log2_recursive(y, LOG2_DEPTH)
    }

    /// Natural logarithm.
    #[must_use]
    pub fn ln(self) -> Self {
        self.log2() / tables().log2_e
    }

    /// Base-10 logarithm.
    #[must_use]
    pub fn log10(self) -> Self {
        self.log2() / tables().log2_10
    }

    /// Logarithm in an arbitrary base.
    #[must_use]
    pub fn log(self, base: Self) -> Self {
        self.log2() / base.log2()
    }

    /// e^x: multiply out the integer part, then Newton against ln.
    #[must_use]
    pub fn exp(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_infinite() {
            return if self.sign_bit() { Self::ZERO } else { Self::INFINITY };
        }
        if self > Self::from(EXP_OVERFLOW) {
            return Self::INFINITY;
        }
        if self < Self::from(EXP_UNDERFLOW) {
            return Self::ZERO;
        }
        let k = i32::from_quad_saturating(self.trunc());
        let e = Self::e();
        let mut x = Self::ONE;
        for _ in 0..k.unsigned_abs() {
            x = if k >= 0 { x * e } else { x / e };
        }
        if x.is_zero() {
            // The integer stepping underflowed; the fraction cannot lift
            // the result back above the subnormal floor.
            return Self::ZERO;
        }
        newton_exp(x, self)
    }

    /// 2^x: exact integer part by exponent shift, then Newton against
    /// log₂.
    #[must_use]
    pub fn exp2(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_infinite() {
            return if self.sign_bit() { Self::ZERO } else { Self::INFINITY };
        }
        if self > Self::from(16384u32) {
            return Self::INFINITY;
        }
        if self < Self::from(-16496i32) {
            return Self::ZERO;
        }
        let k = i32::from_quad_saturating(self.trunc());
        let x = Self::ONE.scale_b(k);
        if x.is_zero() || x.is_infinite() || self.fract_is_zero() {
            return x;
        }
        let ln2 = Self::ONE / tables().log2_e;
        let mut x = x;
        for _ in 0..NEWTON_ITERATIONS {
            let next = (self - x.log2()).mul_add(x * ln2, x);
            if next == x {
                break;
            }
            x = next;
        }
        x
    }

    /// 10^x: pow-10 table and repeated multiplication for the integer
    /// part, then Newton against log₁₀.
    #[must_use]
    pub fn exp10(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_infinite() {
            return if self.sign_bit() { Self::ZERO } else { Self::INFINITY };
        }
        if self > Self::from(4933u32) {
            return Self::INFINITY;
        }
        if self < Self::from(-4970i32) {
            return Self::ZERO;
        }
        let k = i32::from_quad_saturating(self.trunc());
        let mut x = Self::ONE;
        let mut remaining = k.unsigned_abs();
        while remaining > 0 {
            let chunk = remaining.min(37);
            let factor = tables().pow10[chunk as usize];
            x = if k >= 0 { x * factor } else { x / factor };
            remaining -= chunk;
        }
        if x.is_zero() {
            return Self::ZERO;
        }
        if self.fract_is_zero() {
            return x;
        }
        let ln10 = Self::from(10u32).ln();
        for _ in 0..NEWTON_ITERATIONS {
            let next = (self - x.log10()).mul_add(x * ln10, x);
            if next == x {
                break;
            }
            x = next;
        }
        x
    }

    /// x^y as exp(y·ln x), with the conventional closures at 0, 1, and ∞.
    #[must_use]
    pub fn powf(self, y: Self) -> Self {
        if y.is_zero() {
            return Self::ONE;
        }
        if self.is_nan() || y.is_nan() {
            return Self::NAN;
        }
        if self == Self::ONE {
            return Self::ONE;
        }
        if self.is_zero() {
            return if y.sign_bit() { Self::INFINITY } else { Self::ZERO };
        }
        if self.is_infinite() && !self.sign_bit() {
            return if y.sign_bit() { Self::ZERO } else { Self::INFINITY };
        }
        // Negative bases (and −∞) reach ln's domain error and surface the
        // sentinel, the formula-first reading of pow.
        (y * self.ln()).exp()
    }

    /// True iff the value has no fractional part (already known finite).
    fn fract_is_zero(self) -> bool {
        self == self.trunc()
    }
}

/// Newton for e^target starting from x₀ = e^⌊target⌋.
fn newton_exp(mut x: Float128, target: Float128) -> Float128 {
    for _ in 0..NEWTON_ITERATIONS {
        let next = (target - x.ln()).mul_add(x, x);
        if next == x {
            break;
        }
        x = next;
    }
    x
}
