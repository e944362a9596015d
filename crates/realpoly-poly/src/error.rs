//! Error types for polynomial construction and parsing.

use thiserror::Error;

/// Errors raised when building a polynomial from explicit terms.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// The exponent is negative or does not fit in [`crate::Exponent`].
    #[error("invalid exponent {0}: exponents must be non-negative and fit in 32 bits")]
    InvalidExponent(i64),

    /// The coefficient is NaN or infinite.
    #[error("coefficient {0} is not a finite real number")]
    NonFiniteCoefficient(f64),
}

/// Errors raised while parsing the textual form of a polynomial.
///
/// Offsets are byte offsets into the trimmed input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is empty or only whitespace.
    #[error("empty expression")]
    Empty,

    /// Whitespace inside the expression.
    #[error("unexpected whitespace at offset {offset}")]
    Whitespace {
        /// Position of the first whitespace character.
        offset: usize,
    },

    /// A sign with no term after it (`"5+"`, `"+-3"`).
    #[error("stray operator '{operator}' at offset {offset}")]
    StrayOperator {
        /// The sign character.
        operator: char,
        /// Position of the sign.
        offset: usize,
    },

    /// The coefficient is not a numeric literal.
    #[error("invalid coefficient '{fragment}' at offset {offset}")]
    InvalidCoefficient {
        /// The offending text.
        fragment: String,
        /// Position of the fragment.
        offset: usize,
    },

    /// The exponent is not a non-negative integer that fits in 32 bits.
    #[error("invalid exponent '{fragment}' at offset {offset}")]
    InvalidExponent {
        /// The offending text.
        fragment: String,
        /// Position of the fragment.
        offset: usize,
    },

    /// The literal is well formed but overflows to infinity.
    #[error("coefficient '{fragment}' at offset {offset} is out of range")]
    NonFiniteCoefficient {
        /// The offending text.
        fragment: String,
        /// Position of the fragment.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at, if any.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Whitespace { offset }
            | Self::StrayOperator { offset, .. }
            | Self::InvalidCoefficient { offset, .. }
            | Self::InvalidExponent { offset, .. }
            | Self::NonFiniteCoefficient { offset, .. } => Some(*offset),
        }
    }
}
