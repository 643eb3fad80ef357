//! Parse/format round-trips and the negative-number patterns.

use proptest::prelude::*;
use softquad::{Float128, FormatOptions, NegativePattern, ParseOptions};

fn finite_strategy() -> impl Strategy<Value = Float128> {
    any::<u128>().prop_map(Float128::from_bits).prop_filter("finite", |v| v.is_finite())
}

proptest! {
    /// The formatter's default 38-digit output reparses to identical bits
    /// for every finite encoding, subnormals included.
    #[test]
    fn format_parse_roundtrip(v in finite_strategy()) {
        let text = v.to_string();
        let back = Float128::parse(&text).unwrap();
        prop_assert_eq!(back.to_bits(), v.to_bits(), "{}", text);
    }

    /// Round-tripping holds under a custom separator and sign style too.
    #[test]
    fn roundtrip_with_custom_symbols(v in finite_strategy()) {
        let fmt = FormatOptions {
            decimal_separator: ',',
            negative_sign: "~".to_owned(),
            ..FormatOptions::default()
        };
        let parse = ParseOptions {
            decimal_separator: ',',
            negative_sign: "~".to_owned(),
            ..ParseOptions::default()
        };
        let text = v.format_with(&fmt);
        let back = Float128::try_parse_with(&text, &parse).unwrap();
        prop_assert_eq!(back.to_bits(), v.to_bits(), "{}", text);
    }

    /// Integer values format exactly like the integers themselves.
    #[test]
    fn integers_format_like_integers(x in any::<i32>()) {
        let v = Float128::from(x);
        let text = v.to_string();
        prop_assert_eq!(text, x.to_string());
    }
}

#[test]
fn scenario_parse_format_roundtrip() {
    let v = Float128::from(-263.0f64);
    let text = v.to_string();
    assert_eq!(text, "-263");
    assert_eq!(Float128::parse(&text).unwrap(), v);
}

#[test]
fn special_values_roundtrip() {
    for v in [Float128::INFINITY, Float128::NEG_INFINITY, Float128::NAN] {
        let text = v.to_string();
        let back = Float128::parse(&text).unwrap();
        assert_eq!(back.to_bits(), v.to_bits(), "{text}");
    }
    assert_eq!(Float128::NEG_ZERO.to_string(), "-0");
    assert!(Float128::parse("-0").unwrap().sign_bit());
}

#[test]
fn negative_patterns_place_exactly_one_marker() {
    let v = Float128::from(-42i32);
    let cases = [
        (0u8, "(42)"),
        (1, "-42"),
        (2, "- 42"),
        (3, "42-"),
        (4, "42 -"),
    ];
    for (index, expected) in cases {
        let opts = FormatOptions {
            negative_pattern: NegativePattern::from_index(index).unwrap(),
            ..FormatOptions::default()
        };
        let text = v.format_with(&opts);
        assert_eq!(text, expected, "pattern {index}");
        // Exactly one marker: the sign (or the paren pair) appears once.
        if index == 0 {
            assert_eq!(text.matches('(').count(), 1);
            assert_eq!(text.matches(')').count(), 1);
        } else {
            assert_eq!(text.matches('-').count(), 1);
        }
    }
    assert!(NegativePattern::from_index(9).is_err());
}

#[test]
fn parse_accepts_every_negative_style() {
    let minus_five = Float128::from(-5i32);
    for text in ["-5", "(5)", "5-"] {
        assert_eq!(Float128::parse(text).unwrap(), minus_five, "{text}");
    }
}

#[test]
fn fixed_point_samples() {
    // Hand-checked decimal expansions of exact binary fractions.
    assert_eq!(Float128::parse("0.1875").unwrap().to_string(), "0.1875");
    assert_eq!(Float128::parse("123.5").unwrap().to_string(), "123.5");
    assert_eq!(
        Float128::parse("9007199254740993").unwrap().to_string(),
        "9007199254740993" // 2^53 + 1: exact here, not in f64
    );
}
