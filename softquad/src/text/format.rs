//! Binary-to-decimal formatting.
//!
//! The formatter emits up to 38 significant decimal digits: exact digits
//! first (big-integer whole part, then fraction digits one at a time by
//! repeated multiplication by ten), a round-half-up on the first dropped
//! digit with carry propagation, trailing-zero trimming, and finally the
//! positional/scientific choice and the negative pattern. At the default
//! 38 digits, reparsing the output restores the original bits.

use core::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use smallvec::SmallVec;

use crate::bits::{Float128, SIG_BITS};
use crate::text::options::{FormatOptions, NegativePattern};

/// Decimal exponents rendered positionally; outside this window the
/// formatter switches to scientific notation.
const POSITIONAL_MIN: i64 = -5;
const POSITIONAL_MAX: i64 = 20;

type Digits = SmallVec<[u8; 64]>;

impl fmt::Display for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&FormatOptions::default()))
    }
}

impl Float128 {
    /// Formats with explicit options.
    #[must_use]
    pub fn format_with(&self, opts: &FormatOptions) -> String {
        if self.is_nan() {
            return opts.nan_token.clone();
        }
        let magnitude = if self.is_infinite() {
            opts.infinity_token.clone()
        } else if self.is_zero() {
            "0".to_owned()
        } else {
            let count = opts.digits.clamp(1, 38) as usize;
            let (digits, dec_exp) = significant_digits(*self, count);
            render(&digits, dec_exp, opts)
        };
        if self.sign_bit() {
            apply_negative(&magnitude, opts)
        } else {
            magnitude
        }
    }
}

/// Produces `count` significant digits (half-up rounded, trailing zeros
/// trimmed) and the decimal exponent: value = d₀.d₁d₂… × 10^dec_exp.
fn significant_digits(v: Float128, count: usize) -> (Digits, i64) {
    let (m, e) = v.normalized();
    let s = e - SIG_BITS as i32;
    let mut digits: Digits = SmallVec::new();
    let mut dec_exp: i64;

    if s >= 0 {
        // A pure integer: its decimal expansion is exact.
        let text = (BigUint::from(m) << s as u32).to_str_radix(10);
        dec_exp = text.len() as i64 - 1;
        for b in text.bytes() {
            if digits.len() > count {
                break;
            }
            digits.push(b - b'0');
        }
    } else {
        let p = (-s) as u32;
        let wide = BigUint::from(m);
        let int_part = wide.clone() >> p;
        let mut frac = wide - (int_part.clone() << p);

        if int_part.is_zero() {
            // Pure fraction: leading zero digits adjust the exponent
            // instead of entering the output.
            dec_exp = -1;
            loop {
                frac *= 10u32;
                let d = (frac.clone() >> p).to_u8().expect("one decimal digit");
                frac -= BigUint::from(d) << p;
                if d != 0 {
                    digits.push(d);
                    break;
                }
                dec_exp -= 1;
            }
        } else {
            let text = int_part.to_str_radix(10);
            dec_exp = text.len() as i64 - 1;
            for b in text.bytes() {
                if digits.len() > count {
                    break;
                }
                digits.push(b - b'0');
            }
        }
        while digits.len() <= count && !frac.is_zero() {
            frac *= 10u32;
            let d = (frac.clone() >> p).to_u8().expect("one decimal digit");
            frac -= BigUint::from(d) << p;
            digits.push(d);
        }
    }
    while digits.len() <= count {
        digits.push(0);
    }

    // Round half-up on the first dropped digit, carrying leftward; a carry
    // off the front is a fresh leading 1 and bumps the exponent.
    let round_up = digits[count] >= 5;
    digits.truncate(count);
    if round_up {
        let mut i = count;
        loop {
            if i == 0 {
                digits.insert(0, 1);
                digits.truncate(count);
                dec_exp += 1;
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    (digits, dec_exp)
}

fn render(digits: &[u8], dec_exp: i64, opts: &FormatOptions) -> String {
    let mut out = String::new();
    if (POSITIONAL_MIN..POSITIONAL_MAX).contains(&dec_exp) {
        if dec_exp >= 0 {
            let int_len = dec_exp as usize + 1;
            for i in 0..int_len {
                out.push(digit_char(digits.get(i).copied().unwrap_or(0)));
            }
            if digits.len() > int_len {
                out.push(opts.decimal_separator);
                for &d in &digits[int_len..] {
                    out.push(digit_char(d));
                }
            }
        } else {
            out.push('0');
            out.push(opts.decimal_separator);
            for _ in 0..(-dec_exp - 1) {
                out.push('0');
            }
            for &d in digits {
                out.push(digit_char(d));
            }
        }
    } else {
        out.push(digit_char(digits[0]));
        if digits.len() > 1 {
            out.push(opts.decimal_separator);
            for &d in &digits[1..] {
                out.push(digit_char(d));
            }
        }
        out.push('E');
        out.push(if dec_exp < 0 { '-' } else { '+' });
        out.push_str(&dec_exp.unsigned_abs().to_string());
    }
    out
}

fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

fn apply_negative(magnitude: &str, opts: &FormatOptions) -> String {
    let sign = &opts.negative_sign;
    match opts.negative_pattern {
        NegativePattern::Parentheses => format!("({magnitude})"),
        NegativePattern::LeadingSign => format!("{sign}{magnitude}"),
        NegativePattern::LeadingSignSpace => format!("{sign} {magnitude}"),
        NegativePattern::TrailingSign => format!("{magnitude}{sign}"),
        NegativePattern::TrailingSignSpace => format!("{magnitude} {sign}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(v: Float128) -> String {
        v.to_string()
    }

    #[test]
    fn integers_render_positionally() {
        assert_eq!(fmt(Float128::ZERO), "0");
        assert_eq!(fmt(Float128::ONE), "1");
        assert_eq!(fmt(Float128::from(263u32)), "263");
        assert_eq!(fmt(Float128::from(-263i32)), "-263");
        assert_eq!(fmt(Float128::from(1000u32)), "1000");
        assert_eq!(fmt(Float128::from(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn fractions_render_positionally() {
        assert_eq!(fmt(Float128::from(0.5f64)), "0.5");
        assert_eq!(fmt(Float128::from(2.75f64)), "2.75");
        assert_eq!(fmt(Float128::from(-0.375f64)), "-0.375");
        assert_eq!(fmt(Float128::from(0.0625f64)), "0.0625");
    }

    #[test]
    fn extremes_render_scientifically() {
        let big = Float128::ONE.scale_b(120);
        assert_eq!(fmt(big), "1.329227995784915872903807060280344576E+36");
        assert_eq!(fmt(big.flip_sign()), "-1.329227995784915872903807060280344576E+36");
        let tiny = Float128::parse("1e-10").unwrap();
        assert_eq!(fmt(tiny), "1E-10");
        assert!(fmt(Float128::EPSILON).ends_with("E-4966"));
    }

    #[test]
    fn specials_use_tokens() {
        assert_eq!(fmt(Float128::INFINITY), "Infinity");
        assert_eq!(fmt(Float128::NEG_INFINITY), "-Infinity");
        assert_eq!(fmt(Float128::NAN), "NaN");
        assert_eq!(fmt(Float128::SENTINEL_NAN), "NaN");
        assert_eq!(fmt(Float128::NEG_ZERO), "-0");
    }

    #[test]
    fn negative_patterns_place_one_marker() {
        let v = Float128::from(-1.5f64);
        let expect = [
            (NegativePattern::Parentheses, "(1.5)"),
            (NegativePattern::LeadingSign, "-1.5"),
            (NegativePattern::LeadingSignSpace, "- 1.5"),
            (NegativePattern::TrailingSign, "1.5-"),
            (NegativePattern::TrailingSignSpace, "1.5 -"),
        ];
        for (pattern, want) in expect {
            let opts = FormatOptions {
                negative_pattern: pattern,
                ..FormatOptions::default()
            };
            assert_eq!(v.format_with(&opts), want);
        }
    }

    #[test]
    fn custom_separator() {
        let opts = FormatOptions {
            decimal_separator: ',',
            ..FormatOptions::default()
        };
        assert_eq!(Float128::from(2.75f64).format_with(&opts), "2,75");
    }

    #[test]
    fn digit_limit_rounds_half_up() {
        let opts = FormatOptions {
            digits: 3,
            ..FormatOptions::default()
        };
        assert_eq!(Float128::from(1.0f64 / 3.0f64).format_with(&opts), "0.333");
        assert_eq!(Float128::from(2.0f64 / 3.0f64).format_with(&opts), "0.667");
        // 9.999 at 3 digits carries all the way up.
        assert_eq!(Float128::parse("9.999").unwrap().format_with(&opts), "10");
    }

    #[test]
    fn roundtrip_spot_checks() {
        for s in ["0.1", "-263", "6.25e-2", "1.7976931348623157e308", "42"] {
            let v = Float128::parse(s).unwrap();
            assert_eq!(Float128::parse(&v.to_string()).unwrap().to_bits(), v.to_bits(), "{s}");
        }
    }
}
