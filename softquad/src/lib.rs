//! softquad — IEEE 754-2019 binary128 arithmetic in software.
//!
//! [`Float128`] is a quadruple-precision floating-point value backed entirely
//! by 64-bit integer arithmetic: 1 sign bit, a 15-bit biased exponent
//! (bias 16383), and a 112-bit trailing significand packed into one 128-bit
//! word. The crate provides:
//!
//! - correctly rounded (round-to-nearest, ties-to-even) `+`, `-`, `*`, `/`,
//!   fused multiply-add, IEEE remainder, and scale-by-power-of-two,
//! - classification predicates and the IEEE constant surface,
//! - exact conversions from binary16/32/64 and all integer widths, with
//!   checked/saturating conversions back out,
//! - a decimal parser and a 38-digit formatter that round-trip bitwise,
//! - CORDIC/Newton transcendentals (trigonometric, logarithmic, exponential,
//!   roots, hyperbolics).
//!
//! # Examples
//!
//! ```
//! use softquad::Float128;
//!
//! let a = Float128::from(0.25f64);
//! let b = Float128::parse("1.5").unwrap();
//! assert_eq!(a * b, Float128::from(0.375f64));
//!
//! // The formatter round-trips bitwise.
//! let x = Float128::from(-263.0f64);
//! assert_eq!(Float128::parse(&x.to_string()).unwrap(), x);
//! ```
//!
//! # Edge-case policy
//!
//! Arithmetic never returns `Result`: invalid operations (0/0, ∞−∞, domain
//! errors) produce a sentinel NaN, any NaN operand propagates as the quiet
//! NaN, overflow saturates to ±∞, underflow is gradual. Only argument
//! errors (bad digit counts, bad format patterns) and checked conversions
//! surface a [`QuadError`].
//!
//! Every value is `Copy`, every operation is pure, and the one-shot
//! constant tables are published through a `OnceLock`, so the type is safe
//! to share across threads without synchronization.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod arith;
mod bits;
mod bytes;
mod classify;
mod cmp;
mod consts;
mod convert;
mod error;
mod math;
mod ops;
mod round;
mod text;

pub use bits::Float128;
pub use classify::FpClass;
pub use convert::FromQuad;
pub use error::QuadError;
pub use text::{FormatOptions, NegativePattern, ParseOptions};
