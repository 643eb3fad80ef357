//! Literal constants and the one-shot computed tables.
//!
//! The bit-pattern constants are free; everything else requires arithmetic,
//! and the arithmetic requires no tables, so initialization bootstraps in
//! dependency order: (1) parse π, π/2, π/4, τ, e from their 36-digit
//! decimal literals; (2) build the pow-10 table by repeated multiplication;
//! (3) build the CORDIC rotation angles and scaling constant. The whole
//! bundle is published once through a `OnceLock`, which provides the
//! release/acquire ordering that makes the tables safely readable from any
//! thread afterwards.

use std::sync::OnceLock;

use tracing::debug;

use crate::bits::{Float128, EXP_BIAS, EXP_SAT, FRAC_MASK, SIG_BITS, SIGN_MASK};
use crate::math::cordic;
use crate::text::parse_literal;

impl Float128 {
    /// Positive zero.
    pub const ZERO: Self = Self::from_bits(0);
    /// Negative zero.
    pub const NEG_ZERO: Self = Self::from_bits(SIGN_MASK);
    /// The value 1.
    pub const ONE: Self = Self::from_bits((EXP_BIAS as u128) << SIG_BITS);
    /// The value −1.
    pub const NEG_ONE: Self = Self::from_bits(SIGN_MASK | (EXP_BIAS as u128) << SIG_BITS);
    /// The value 2.
    pub const TWO: Self = Self::from_bits(((EXP_BIAS + 1) as u128) << SIG_BITS);
    /// Positive infinity.
    pub const INFINITY: Self = Self::from_bits((EXP_SAT as u128) << SIG_BITS);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self::from_bits(SIGN_MASK | (EXP_SAT as u128) << SIG_BITS);
    /// The canonical quiet NaN: positive sign, top significand bit set.
    pub const NAN: Self = Self::from_bits((EXP_SAT as u128) << SIG_BITS | 1 << 111);
    /// The sentinel NaN produced by invalid operations and failed parses:
    /// negative sign, significand 1. Observably a NaN.
    pub const SENTINEL_NAN: Self = Self::from_bits(SIGN_MASK | (EXP_SAT as u128) << SIG_BITS | 1);
    /// The smallest positive subnormal, 2^−16494.
    pub const EPSILON: Self = Self::from_bits(1);
    /// The smallest positive normal, 2^−16382.
    pub const MIN_POSITIVE: Self = Self::from_bits(1u128 << SIG_BITS);
    /// The largest finite value.
    pub const MAX: Self = Self::from_bits(((EXP_SAT - 1) as u128) << SIG_BITS | FRAC_MASK);
    /// The most negative finite value.
    pub const MIN: Self = Self::from_bits(SIGN_MASK | ((EXP_SAT - 1) as u128) << SIG_BITS | FRAC_MASK);

    /// π to full precision.
    #[must_use]
    pub fn pi() -> Self {
        tables().pi
    }

    /// π/2.
    #[must_use]
    pub fn frac_pi_2() -> Self {
        tables().frac_pi_2
    }

    /// π/4.
    #[must_use]
    pub fn frac_pi_4() -> Self {
        tables().frac_pi_4
    }

    /// τ = 2π.
    #[must_use]
    pub fn tau() -> Self {
        tables().tau
    }

    /// Euler's number e.
    #[must_use]
    pub fn e() -> Self {
        tables().e
    }
}

/// Process-wide read-only tables, built on first use.
pub(crate) struct Tables {
    pub(crate) pi: Float128,
    pub(crate) frac_pi_2: Float128,
    pub(crate) frac_pi_4: Float128,
    pub(crate) tau: Float128,
    pub(crate) e: Float128,
    /// 10^0 .. 10^37.
    pub(crate) pow10: [Float128; 38],
    /// log₂(e), the divisor that turns log₂ into ln.
    pub(crate) log2_e: Float128,
    /// log₂(10), the divisor that turns log₂ into log₁₀.
    pub(crate) log2_10: Float128,
    /// CORDIC rotation angles atan(2^−k) for k < 64.
    pub(crate) cordic_theta: [Float128; 64],
    /// CORDIC scaling constant for the 32-iteration rotation.
    pub(crate) cordic_k: Float128,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// The shared tables. The builders below must not call back into
/// `tables()`: the constants come from the parser and the CORDIC entries
/// from table-free arithmetic, so initialization never re-enters.
pub(crate) fn tables() -> &'static Tables {
    TABLES.get_or_init(build)
}

fn build() -> Tables {
    debug!("building softquad constant tables");

    let pi = parse_literal("3.14159265358979323846264338327950288");
    let frac_pi_2 = parse_literal("1.57079632679489661923132169163975144");
    let frac_pi_4 = parse_literal("0.785398163397448309615660845819875721");
    let tau = parse_literal("6.28318530717958647692528676655900577");
    let e = parse_literal("2.71828182845904523536028747135266250");
    debug_assert!(!pi.is_nan() && !tau.is_nan() && !e.is_nan());

    let mut pow10 = [Float128::ONE; 38];
    let ten = Float128::from(10u32);
    for i in 1..pow10.len() {
        pow10[i] = pow10[i - 1] * ten;
    }

    // log2 is table-free arithmetic, so it is safe to call here; ln and
    // log10 are not (they read these very fields).
    let log2_e = e.log2();
    let log2_10 = ten.log2();

    let cordic_theta = cordic::theta_table(frac_pi_4);
    let cordic_k = cordic::scale_constant();
    debug!("softquad constant tables ready");

    Tables {
        pi,
        frac_pi_2,
        frac_pi_4,
        tau,
        e,
        pow10,
        log2_e,
        log2_10,
        cordic_theta,
        cordic_k,
    }
}
