//! Configuration for the textual surfaces.

use serde::{Deserialize, Serialize};

use crate::error::QuadError;

/// Where the negative marker goes in formatted output.
///
/// The indices 0..4 mirror the classical negative-number pattern table:
/// parentheses; leading sign; leading sign with a space; trailing sign;
/// trailing sign with a space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativePattern {
    /// `(n)`
    Parentheses,
    /// `-n`
    #[default]
    LeadingSign,
    /// `- n`
    LeadingSignSpace,
    /// `n-`
    TrailingSign,
    /// `n -`
    TrailingSignSpace,
}

impl NegativePattern {
    /// Resolves a pattern index.
    ///
    /// # Errors
    ///
    /// [`QuadError::InvalidNegativePattern`] for indices outside 0..=4.
    pub fn from_index(index: u8) -> Result<Self, QuadError> {
        match index {
            0 => Ok(Self::Parentheses),
            1 => Ok(Self::LeadingSign),
            2 => Ok(Self::LeadingSignSpace),
            3 => Ok(Self::TrailingSign),
            4 => Ok(Self::TrailingSignSpace),
            other => Err(QuadError::InvalidNegativePattern(other)),
        }
    }

    /// The pattern's index in the classical table.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Parentheses => 0,
            Self::LeadingSign => 1,
            Self::LeadingSignSpace => 2,
            Self::TrailingSign => 3,
            Self::TrailingSignSpace => 4,
        }
    }
}

/// Options accepted by [`crate::Float128::parse_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Separator between the whole and fractional digits.
    pub decimal_separator: char,
    /// The negative-sign token, accepted leading or trailing.
    pub negative_sign: String,
    /// Token for a quiet NaN.
    pub nan_token: String,
    /// Token for +∞ (also accepted with a sign prefix).
    pub positive_infinity_token: String,
    /// Token for −∞.
    pub negative_infinity_token: String,
    /// Whether `(n)` denotes a negative value (pattern 0).
    pub allow_parentheses: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            negative_sign: "-".to_owned(),
            nan_token: "NaN".to_owned(),
            positive_infinity_token: "Infinity".to_owned(),
            negative_infinity_token: "-Infinity".to_owned(),
            allow_parentheses: true,
        }
    }
}

/// Options accepted by [`crate::Float128::format_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Separator between the whole and fractional digits.
    pub decimal_separator: char,
    /// The negative-sign token the pattern places.
    pub negative_sign: String,
    /// Token emitted for any NaN.
    pub nan_token: String,
    /// Token emitted for infinity (the negative pattern adds the sign).
    pub infinity_token: String,
    /// Placement of the negative marker.
    pub negative_pattern: NegativePattern,
    /// Significant decimal digits to emit, capped at 38. At the default
    /// 38 the output reparses to identical bits.
    pub digits: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            negative_sign: "-".to_owned(),
            nan_token: "NaN".to_owned(),
            infinity_token: "Infinity".to_owned(),
            negative_pattern: NegativePattern::LeadingSign,
            digits: 38,
        }
    }
}
