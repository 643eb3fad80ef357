//! Decimal-to-binary conversion.
//!
//! The conversion is exact until the single rounding at the end: the whole
//! part is taken as a big integer, fraction bits are produced by the
//! classical doubling method (double the fractional numerator, emit a bit
//! when it crosses the denominator), and whatever value remains afterwards
//! becomes the sticky bit. `round_pack` then performs the one
//! round-to-nearest-ties-to-even step, including gradual underflow.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::arith::{round_pack, signed_infinity, signed_zero};
use crate::bits::Float128;
use crate::error::QuadError;
use crate::text::options::ParseOptions;

/// Decimal scales far past the representable range: 10^4934 overflows the
/// largest finite value, 10^−4970 underflows half the smallest subnormal.
const SCALE_OVERFLOW: i64 = 4934;
const SCALE_UNDERFLOW: i64 = -4970;

impl Float128 {
    /// Parses with the default options.
    ///
    /// # Errors
    ///
    /// [`QuadError::Parse`] when the input does not match the grammar.
    pub fn parse(s: &str) -> Result<Self, QuadError> {
        Self::parse_with(s, &ParseOptions::default())
    }

    /// Parses with explicit options.
    ///
    /// # Errors
    ///
    /// [`QuadError::Parse`] when the input does not match the grammar.
    pub fn parse_with(s: &str, options: &ParseOptions) -> Result<Self, QuadError> {
        Self::try_parse_with(s, options).ok_or_else(|| QuadError::Parse(s.to_owned()))
    }

    /// Parses with the default options, `None` on mismatch.
    #[must_use]
    pub fn try_parse(s: &str) -> Option<Self> {
        Self::try_parse_with(s, &ParseOptions::default())
    }

    /// Parses with explicit options, `None` on mismatch.
    #[must_use]
    pub fn try_parse_with(s: &str, options: &ParseOptions) -> Option<Self> {
        parse_impl(s.trim(), options)
    }
}

/// Engine-internal parse whose failure value is the sentinel NaN; the
/// constant bootstrap uses this before any error machinery is interesting.
pub(crate) fn parse_literal(s: &str) -> Float128 {
    parse_impl(s, &ParseOptions::default()).unwrap_or(Float128::SENTINEL_NAN)
}

fn parse_impl(s: &str, opts: &ParseOptions) -> Option<Float128> {
    if s.is_empty() {
        return None;
    }
    if s == opts.nan_token {
        return Some(Float128::NAN);
    }
    if s == opts.positive_infinity_token {
        return Some(Float128::INFINITY);
    }
    if s == opts.negative_infinity_token {
        return Some(Float128::NEG_INFINITY);
    }

    let mut negative = false;
    let mut body = s;
    if opts.allow_parentheses && body.len() >= 2 && body.starts_with('(') && body.ends_with(')') {
        negative = true;
        body = &body[1..body.len() - 1];
    } else if let Some(rest) = body.strip_prefix(opts.negative_sign.as_str()) {
        negative = true;
        body = rest;
    } else if let Some(rest) = body.strip_prefix('+') {
        body = rest;
    } else if let Some(rest) = body.strip_suffix(opts.negative_sign.as_str()) {
        negative = true;
        body = rest;
    }
    if body == opts.positive_infinity_token {
        return Some(signed_infinity(negative));
    }

    // Split off a scientific exponent at the last e/E.
    let (mantissa, exp10) = match body.rfind(['e', 'E']) {
        Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
        None => (body, 0),
    };

    let (whole_str, frac_str) = match mantissa.split_once(opts.decimal_separator) {
        Some((w, f)) => (w, f),
        None => (mantissa, ""),
    };
    if whole_str.is_empty() && frac_str.is_empty() {
        return None;
    }
    if !whole_str.bytes().all(|b| b.is_ascii_digit())
        || !frac_str.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let digits: Vec<u8> = whole_str.bytes().chain(frac_str.bytes()).collect();
    // Position of the decimal point within the digit string, after the
    // scientific exponent is folded in.
    let point = whole_str.len() as i64 + exp10;

    let Some(first_sig) = digits.iter().position(|&d| d != b'0') else {
        return Some(signed_zero(negative));
    };
    let scale = point - first_sig as i64;
    if scale >= SCALE_OVERFLOW {
        return Some(signed_infinity(negative));
    }
    if scale <= SCALE_UNDERFLOW {
        return Some(signed_zero(negative));
    }

    Some(assemble(negative, &digits, point))
}

/// Converts validated digits with a known decimal-point position into the
/// correctly rounded encoding.
fn assemble(negative: bool, digits: &[u8], point: i64) -> Float128 {
    let len = digits.len() as i64;

    let whole: BigUint = if point <= 0 {
        BigUint::zero()
    } else {
        let take = point.min(len) as usize;
        let mut w = BigUint::parse_bytes(&digits[..take], 10).unwrap_or_default();
        if point > len {
            w *= BigUint::from(10u32).pow((point - len) as u32);
        }
        w
    };
    let (mut num, frac_scale) = if point >= len {
        (BigUint::zero(), 0u32)
    } else {
        let start = point.max(0) as usize;
        let leading_zeros = (-point).max(0) as u32;
        (
            BigUint::parse_bytes(&digits[start..], 10).unwrap_or_default(),
            (len - start as i64) as u32 + leading_zeros,
        )
    };
    let den = BigUint::from(10u32).pow(frac_scale);

    let sig;
    let e;
    if !whole.is_zero() {
        let top = (whole.bits() - 1) as u32;
        if top <= 115 {
            let mut acc = (whole << (115 - top)).to_u128().expect("fits 116 bits");
            // The remaining low bits come off the fraction, one doubling
            // per bit position.
            for k in (0..115 - top).rev() {
                if num.is_zero() {
                    break;
                }
                num *= 2u32;
                if num >= den {
                    num -= &den;
                    acc |= 1u128 << k;
                }
            }
            sig = acc;
            e = top as i32;
        } else {
            // The whole part alone overfills the significand window; its
            // dropped bits and any fraction are sticky.
            let drop = top - 115;
            let acc = (whole.clone() >> drop).to_u128().expect("fits 116 bits");
            let dropped = !(whole & ((BigUint::one() << drop) - 1u32)).is_zero();
            sig = acc | u128::from(dropped || !num.is_zero());
            num = BigUint::zero();
            e = top as i32;
        }
    } else {
        // Pure fraction: double until the leading bit crosses the
        // denominator, then collect the 115 bits below it.
        let mut p = 0i64;
        loop {
            num *= 2u32;
            p -= 1;
            if num >= den {
                num -= &den;
                break;
            }
            if p < -16500 {
                // Below half the smallest subnormal.
                return signed_zero(negative);
            }
        }
        let mut acc = 1u128;
        for _ in 0..115 {
            num *= 2u32;
            acc <<= 1;
            if num >= den {
                num -= &den;
                acc |= 1;
            }
        }
        sig = acc;
        e = p as i32;
    }

    let sig = sig | u128::from(!num.is_zero());
    round_pack(negative, sig, e)
}

fn parse_exponent(s: &str) -> Option<i64> {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut value: i64 = 0;
    for b in digits.bytes() {
        // Saturate far past the representable decimal range instead of
        // overflowing.
        value = (value * 10 + i64::from(b - b'0')).min(1_000_000);
    }
    Some(if neg { -value } else { value })
}
