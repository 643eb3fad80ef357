//! 256-bit unsigned integers as four 64-bit limbs.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::{adc, sbb, WideOps};

/// A 256-bit unsigned integer.
///
/// Limbs are stored least-significant first, independent of host endianness.
/// Arithmetic is wrapping unless the method name says otherwise; overflow is
/// reported through explicit carry/borrow flags, never through panics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256 {
    limbs: [u64; 4],
}

impl U256 {
    /// The value 0.
    pub const ZERO: Self = Self { limbs: [0; 4] };
    /// The value 1.
    pub const ONE: Self = Self { limbs: [1, 0, 0, 0] };
    /// The largest representable value, 2^256 − 1.
    pub const MAX: Self = Self { limbs: [u64::MAX; 4] };

    /// Builds a value from little-endian limbs.
    #[inline]
    #[must_use]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self { limbs }
    }

    /// The little-endian limbs.
    #[inline]
    #[must_use]
    pub const fn limbs(&self) -> [u64; 4] {
        self.limbs
    }

    /// Zero-extends a 128-bit value.
    #[inline]
    #[must_use]
    pub const fn from_u128(lo: u128) -> Self {
        Self {
            limbs: [lo as u64, (lo >> 64) as u64, 0, 0],
        }
    }

    /// Builds a value from 128-bit halves.
    #[inline]
    #[must_use]
    pub const fn from_parts(hi: u128, lo: u128) -> Self {
        Self {
            limbs: [
                lo as u64,
                (lo >> 64) as u64,
                hi as u64,
                (hi >> 64) as u64,
            ],
        }
    }

    /// The low 128 bits.
    #[inline]
    #[must_use]
    pub const fn low_u128(&self) -> u128 {
        self.limbs[0] as u128 | (self.limbs[1] as u128) << 64
    }

    /// The high 128 bits.
    #[inline]
    #[must_use]
    pub const fn high_u128(&self) -> u128 {
        self.limbs[2] as u128 | (self.limbs[3] as u128) << 64
    }

    /// True iff the value is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.limbs[0] == 0 && self.limbs[1] == 0 && self.limbs[2] == 0 && self.limbs[3] == 0
    }

    /// The bit at position `i` (0 = least significant). Positions ≥ 256
    /// read as zero.
    #[inline]
    #[must_use]
    pub const fn bit(&self, i: u32) -> bool {
        if i >= 256 {
            return false;
        }
        self.limbs[(i / 64) as usize] >> (i % 64) & 1 == 1
    }

    /// Sets the bit at position `i`. Positions ≥ 256 are ignored.
    #[inline]
    pub fn set_bit(&mut self, i: u32) {
        if i < 256 {
            self.limbs[(i / 64) as usize] |= 1 << (i % 64);
        }
    }

    /// Count of leading zero bits over the full 256-bit width.
    #[must_use]
    pub fn leading_zeros(&self) -> u32 {
        let mut total = 0;
        for limb in self.limbs.iter().rev() {
            if *limb == 0 {
                total += 64;
            } else {
                return total + limb.leading_zeros();
            }
        }
        total
    }

    /// Count of trailing zero bits over the full 256-bit width.
    #[must_use]
    pub fn trailing_zeros(&self) -> u32 {
        let mut total = 0;
        for limb in self.limbs.iter() {
            if *limb == 0 {
                total += 64;
            } else {
                return total + limb.trailing_zeros();
            }
        }
        total
    }

    /// Word-by-word carry-chain addition: `(sum, carry_out)`.
    #[must_use]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0;
        for i in 0..4 {
            let (s, c) = adc(self.limbs[i], rhs.limbs[i], carry);
            out[i] = s;
            carry = c;
        }
        (Self { limbs: out }, carry != 0)
    }

    /// Wrapping addition.
    #[inline]
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Word-by-word borrow-chain subtraction: `(diff, borrow_out)`.
    #[must_use]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0;
        for i in 0..4 {
            let (d, b) = sbb(self.limbs[i], rhs.limbs[i], borrow);
            out[i] = d;
            borrow = b;
        }
        (Self { limbs: out }, borrow != 0)
    }

    /// Wrapping subtraction.
    #[inline]
    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Full 128×128→256 unsigned product via four 64×64 partial products.
    #[must_use]
    pub fn widening_mul<W: WideOps>(a: u128, b: u128) -> Self {
        let (a0, a1) = (a as u64, (a >> 64) as u64);
        let (b0, b1) = (b as u64, (b >> 64) as u64);

        let (p00_lo, p00_hi) = W::bigmul64(a0, b0);
        let (p01_lo, p01_hi) = W::bigmul64(a0, b1);
        let (p10_lo, p10_hi) = W::bigmul64(a1, b0);
        let (p11_lo, p11_hi) = W::bigmul64(a1, b1);

        // Cross products land 64 bits up; the carries out of limb 1 feed
        // limb 2, and limb 3 absorbs whatever remains.
        let (l1, c1) = adc(p00_hi, p01_lo, 0);
        let (l1, c2) = adc(l1, p10_lo, 0);
        let (l2, c3) = adc(p01_hi, p10_hi, c1 + c2);
        let (l2, c4) = adc(l2, p11_lo, 0);
        let l3 = p11_hi + c3 + c4;

        Self {
            limbs: [p00_lo, l1, l2, l3],
        }
    }

    /// Long division of a 256-bit dividend by a 128-bit divisor:
    /// `(quotient, remainder)`.
    ///
    /// The divisor must be nonzero (the arithmetic core's contract). When
    /// the dividend already fits 128 bits the accelerator's `divrem128`
    /// answers directly; otherwise a restoring shift-subtract loop produces
    /// one quotient bit per step. The remainder always fits 128 bits
    /// because the divisor does.
    #[must_use]
    pub fn divrem<W: WideOps>(self, d: u128) -> (Self, u128) {
        debug_assert!(d != 0, "divrem divisor must be nonzero");
        if self.high_u128() == 0 {
            let (q, r) = W::divrem128(self.low_u128(), d);
            return (Self::from_u128(q), r);
        }

        let mut q = Self::ZERO;
        let mut r: u128 = 0;
        let top = 255 - self.leading_zeros();
        for i in (0..=top).rev() {
            // The true partial remainder is 2r + bit, up to 129 bits wide.
            // If the shift carries out of the 128-bit window the subtraction
            // is forced (2^128 ≥ d), and wrapping arithmetic yields the
            // exact in-range difference.
            let carry = r >> 127;
            r = (r << 1) | u128::from(self.bit(i));
            if carry != 0 || r >= d {
                r = r.wrapping_sub(d);
                q.set_bit(i);
            }
        }
        (q, r)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..4).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        if n >= 256 {
            return Self::ZERO;
        }
        let (limb_shift, bit_shift) = ((n / 64) as usize, n % 64);
        let mut out = [0u64; 4];
        for i in limb_shift..4 {
            out[i] = self.limbs[i - limb_shift] << bit_shift;
            if bit_shift > 0 && i > limb_shift {
                out[i] |= self.limbs[i - limb_shift - 1] >> (64 - bit_shift);
            }
        }
        Self { limbs: out }
    }
}

impl Shr<u32> for U256 {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        if n >= 256 {
            return Self::ZERO;
        }
        let (limb_shift, bit_shift) = ((n / 64) as usize, n % 64);
        let mut out = [0u64; 4];
        for i in 0..4 - limb_shift {
            out[i] = self.limbs[i + limb_shift] >> bit_shift;
            if bit_shift > 0 && i + limb_shift + 1 < 4 {
                out[i] |= self.limbs[i + limb_shift + 1] << (64 - bit_shift);
            }
        }
        Self { limbs: out }
    }
}

impl BitAnd for U256 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        let mut out = self.limbs;
        for i in 0..4 {
            out[i] &= rhs.limbs[i];
        }
        Self { limbs: out }
    }
}

impl BitOr for U256 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        let mut out = self.limbs;
        for i in 0..4 {
            out[i] |= rhs.limbs[i];
        }
        Self { limbs: out }
    }
}

impl BitXor for U256 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        let mut out = self.limbs;
        for i in 0..4 {
            out[i] ^= rhs.limbs[i];
        }
        Self { limbs: out }
    }
}

impl Not for U256 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        let mut out = self.limbs;
        for limb in &mut out {
            *limb = !*limb;
        }
        Self { limbs: out }
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{:032x}_{:032x})", self.high_u128(), self.low_u128())
    }
}
