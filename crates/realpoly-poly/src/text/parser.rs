//! Text to polynomial.

use std::str::FromStr;

use crate::algorithms::TermAccumulator;
use crate::error::ParseError;
use crate::sparse::Polynomial;
use crate::term::{Exponent, Term};
use crate::text::tokenizer::{Token, Tokenizer};

/// Parses a single-line expression such as `5-3x2+7x8`.
///
/// Leading and trailing whitespace is ignored; whitespace inside the
/// expression is an error. Terms with the same exponent are summed, so
/// `x+x` is `2x` and `x-x` is the zero polynomial.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the first malformed fragment.
pub fn parse(text: &str) -> Result<Polynomial, ParseError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(offset) = input.find(char::is_whitespace) {
        return Err(ParseError::Whitespace { offset });
    }

    let mut acc = TermAccumulator::new();
    for token in Tokenizer::new(input) {
        let term = parse_term(&token?)?;
        acc.add_term(term.exponent, term.coeff);
    }

    Ok(Polynomial::from_canonical(acc.into_terms()))
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses one signed term: a constant, or `[coefficient]x[exponent]`.
fn parse_term(token: &Token<'_>) -> Result<Term, ParseError> {
    let Some((coeff, exponent)) = token.body.split_once('x') else {
        let value = parse_literal(token.body, token.offset)?;
        return Ok(Term::new(0, token.sign.apply(value)));
    };

    let magnitude = if coeff.is_empty() {
        1.0
    } else {
        parse_literal(coeff, token.offset)?
    };
    let exponent = if exponent.is_empty() {
        1
    } else {
        parse_exponent(exponent, token.offset + coeff.len() + 1)?
    };

    Ok(Term::new(exponent, token.sign.apply(magnitude)))
}

/// Parses an unsigned decimal literal: digits with at most one `.`.
fn parse_literal(text: &str, offset: usize) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidCoefficient {
        fragment: text.to_string(),
        offset,
    };

    let digits = text.bytes().filter(u8::is_ascii_digit).count();
    let dots = text.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != text.len() {
        return Err(invalid());
    }

    let value: f64 = text.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(ParseError::NonFiniteCoefficient {
            fragment: text.to_string(),
            offset,
        });
    }
    Ok(value)
}

/// Parses exponent digits after `x`.
fn parse_exponent(text: &str, offset: usize) -> Result<Exponent, ParseError> {
    let invalid = || ParseError::InvalidExponent {
        fragment: text.to_string(),
        offset,
    };

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}
