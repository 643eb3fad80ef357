//! Error taxonomy for the non-arithmetic surfaces.
//!
//! Arithmetic itself never errors: invalid operations become the sentinel
//! NaN, NaN operands propagate as the quiet NaN, overflow saturates to ±∞.
//! `QuadError` covers what remains — argument validation, checked
//! conversions, and strict parsing.

use thiserror::Error;

/// Error type for argument validation, checked conversion, and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuadError {
    /// `round(x, digits)` was called with a negative digit count.
    #[error("round digits must be non-negative, got {0}")]
    DigitsOutOfRange(i32),

    /// A negative-number pattern index outside 0..=4.
    #[error("negative pattern index must be 0..=4, got {0}")]
    InvalidNegativePattern(u8),

    /// A checked conversion target cannot represent the value.
    #[error("value cannot be represented as {target}")]
    Conversion {
        /// Name of the conversion target type.
        target: &'static str,
    },

    /// The input did not match the numeric grammar.
    #[error("cannot parse {0:?} as a binary128 value")]
    Parse(String),
}
