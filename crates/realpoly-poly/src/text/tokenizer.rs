//! Sign-aware splitting of an expression into terms.
//!
//! Every `+` or `-` starts a new term; the sign belongs to the term it
//! introduces. An expression that does not start with a sign has an
//! implicit leading `+`.

use std::iter::FusedIterator;

use crate::error::ParseError;

/// The sign introducing a term.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    /// `+`, or no sign on the first term.
    Plus,
    /// `-`.
    Minus,
}

impl Sign {
    /// Parses a sign character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }

    /// Returns the sign character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }

    /// Applies the sign to a magnitude.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
        }
    }
}

/// A signed term, still in textual form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    /// Sign in front of the term.
    pub sign: Sign,
    /// Term text without its sign, e.g. `3x2`.
    pub body: &'a str,
    /// Byte offset of `body` in the input.
    pub offset: usize,
}

/// Lazily yields the signed terms of an expression.
///
/// The tokenizer borrows its input and can be cloned to restart the
/// sequence from the current position. It stops after the first error.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Returns the input being tokenized.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        if self.failed || self.pos >= input.len() {
            return None;
        }

        let (sign, sign_len) = match input[self.pos..].chars().next().and_then(Sign::from_char) {
            Some(sign) => (sign, 1),
            None => (Sign::Plus, 0),
        };

        let start = self.pos + sign_len;
        let body_len = input[start..]
            .find(|c: char| Sign::from_char(c).is_some())
            .unwrap_or(input.len() - start);

        if body_len == 0 {
            self.failed = true;
            return Some(Err(ParseError::StrayOperator {
                operator: sign.as_char(),
                offset: self.pos,
            }));
        }

        self.pos = start + body_len;
        Some(Ok(Token {
            sign,
            body: &input[start..self.pos],
            offset: start,
        }))
    }
}

impl FusedIterator for Tokenizer<'_> {}
