//! Conversion round-trips and classification invariants.

use proptest::prelude::*;
use softquad::{Float128, FromQuad, QuadError};

proptest! {
    /// Every integer representable in the source type survives the trip
    /// through Float128 and back.
    #[test]
    fn integer_roundtrips(a in any::<i64>(), b in any::<u32>(), c in any::<i16>()) {
        prop_assert_eq!(i64::from_quad_checked(Float128::from(a)), Ok(a));
        prop_assert_eq!(u32::from_quad_checked(Float128::from(b)), Ok(b));
        prop_assert_eq!(i16::from_quad_checked(Float128::from(c)), Ok(c));
    }

    /// Integers up to 113 bits convert exactly both ways.
    #[test]
    fn wide_integer_roundtrips(a in 0u128..(1u128 << 113)) {
        prop_assert_eq!(u128::from_quad_checked(Float128::from(a)), Ok(a));
    }

    /// Every f64 bit pattern (NaNs aside) widens and narrows losslessly.
    #[test]
    fn f64_roundtrips(bits in any::<u64>()) {
        let x = f64::from_bits(bits);
        prop_assume!(!x.is_nan());
        prop_assert_eq!(Float128::from(x).to_f64().to_bits(), bits);
    }

    /// Every f32 bit pattern (NaNs aside) widens and narrows losslessly.
    #[test]
    fn f32_roundtrips(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        prop_assume!(!x.is_nan());
        prop_assert_eq!(Float128::from(x).to_f32().to_bits(), bits);
    }

    /// Every binary16 bit pattern (NaNs aside) widens and narrows
    /// losslessly.
    #[test]
    fn binary16_roundtrips(bits in any::<u16>()) {
        let v = Float128::from_bits16(bits);
        prop_assume!(!v.is_nan());
        prop_assert_eq!(v.to_bits16(), bits);
    }

    /// Classification invariants over arbitrary encodings: the predicates
    /// read exactly the fields the encoding defines.
    #[test]
    fn classification_matches_fields(bits in any::<u128>()) {
        let v = Float128::from_bits(bits);
        let exp_code = (bits >> 112) & 0x7fff;
        let frac = bits & ((1u128 << 112) - 1);

        prop_assert_eq!(v.is_nan(), exp_code == 0x7fff && frac != 0);
        prop_assert_eq!(v.is_infinite(), exp_code == 0x7fff && frac == 0);
        prop_assert_eq!(v.is_subnormal(), exp_code == 0 && frac != 0);
        prop_assert_eq!(v.is_normal(), exp_code != 0 && exp_code != 0x7fff);
        prop_assert_eq!(v.is_zero(), exp_code == 0 && frac == 0);
        prop_assert_eq!(v.is_finite(), exp_code != 0x7fff);
    }

    /// Saturating conversion clamps exactly at the target's range.
    #[test]
    fn saturation_clamps(x in any::<i64>()) {
        let v = Float128::from(x);
        let clamped = i8::from_quad_saturating(v);
        prop_assert_eq!(i64::from(clamped), x.clamp(-128, 127));
    }
}

#[test]
fn checked_conversion_errors() {
    assert_eq!(
        u8::from_quad_checked(Float128::from(256u32)),
        Err(QuadError::Conversion { target: "u8" })
    );
    assert!(i128::from_quad_checked(Float128::INFINITY).is_err());
    assert!(u64::from_quad_checked(Float128::NAN).is_err());
    assert!(u32::from_quad_checked(Float128::from(-7i32)).is_err());
}

#[test]
fn subnormal_f64_widening_is_normal_quad() {
    // Every f64 subnormal has plenty of headroom in quad's exponent range.
    let sub = f64::from_bits(1);
    let wide = Float128::from(sub);
    assert!(wide.is_normal());
    assert_eq!(wide.to_f64(), sub);
}
