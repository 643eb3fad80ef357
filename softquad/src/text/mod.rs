//! Textual parsing and formatting.
//!
//! The parser converts decimal text to a correctly rounded encoding by
//! exact big-integer arithmetic; the formatter emits up to 38 significant
//! decimal digits, enough that reparsing its output always restores the
//! original bits. Both ends are configurable: NaN/∞ tokens, the decimal
//! separator, the negative-sign string, and the negative-number pattern.

pub(crate) mod format;
mod options;
pub(crate) mod parse;

pub use options::{FormatOptions, NegativePattern, ParseOptions};
pub(crate) use parse::parse_literal;
