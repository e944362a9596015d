//! Polynomial to text.
//!
//! Coefficients are printed with `f64`'s `Display`, which produces the
//! shortest decimal that reads back to the same value and never uses
//! exponent notation. Parsing the output therefore reproduces the
//! polynomial exactly.

use std::fmt::{self, Write};

use crate::sparse::Polynomial;
use crate::term::Term;

/// Serializes a polynomial, e.g. `5-3x2+7x8`.
///
/// The zero polynomial is written `0`.
#[must_use]
pub fn serialize(poly: &Polynomial) -> String {
    poly.to_string()
}

/// Writes the textual form of `poly` to `w`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_text<W: Write>(w: &mut W, poly: &Polynomial) -> fmt::Result {
    if poly.is_zero() {
        return w.write_char('0');
    }

    for (i, term) in poly.iter().enumerate() {
        if i > 0 && term.coeff > 0.0 {
            w.write_char('+')?;
        }
        write_term(w, term)?;
    }
    Ok(())
}

/// Writes one term, carrying its own minus sign.
#[allow(clippy::float_cmp)]
fn write_term<W: Write>(w: &mut W, term: &Term) -> fmt::Result {
    if term.is_constant() {
        return write!(w, "{}", term.coeff);
    }

    if term.coeff == -1.0 {
        w.write_char('-')?;
    } else if term.coeff != 1.0 {
        write!(w, "{}", term.coeff)?;
    }

    w.write_char('x')?;
    if term.exponent > 1 {
        write!(w, "{}", term.exponent)?;
    }
    Ok(())
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::parse;

    fn poly(pairs: &[(i64, f64)]) -> Polynomial {
        Polynomial::from_terms(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(serialize(&Polynomial::zero()), "0");
    }

    #[test]
    fn test_signs() {
        assert_eq!(serialize(&poly(&[(0, 5.0), (2, -3.0), (8, 7.0)])), "5-3x2+7x8");
        assert_eq!(serialize(&poly(&[(0, -6.0), (1, 2.0)])), "-6+2x");
    }

    #[test]
    fn test_unit_coefficients() {
        assert_eq!(serialize(&poly(&[(1, 1.0)])), "x");
        assert_eq!(serialize(&poly(&[(1, -1.0)])), "-x");
        assert_eq!(serialize(&poly(&[(0, 1.0), (2, -1.0)])), "1-x2");
        assert_eq!(serialize(&poly(&[(0, -1.0), (3, 1.0)])), "-1+x3");
    }

    #[test]
    fn test_fractional_coefficients() {
        assert_eq!(serialize(&poly(&[(0, 0.5), (1, -2.25), (4, 1.5)])), "0.5-2.25x+1.5x4");
        assert_eq!(serialize(&poly(&[(2, 1e-7)])), "0.0000001x2");
    }

    #[test]
    fn test_display_matches_serialize() {
        let p = poly(&[(0, 10.0), (1, 4.0), (3, -2.0), (5, -1.0)]);
        assert_eq!(format!("{p}"), "10+4x-2x3-x5");
    }

    #[test]
    fn test_round_trip() {
        for text in ["5-3x2+7x8", "-x", "0", "0.1+0.2x+0.3x2", "-2.5x3+x100"] {
            let p = parse(text).unwrap();
            assert_eq!(parse(&serialize(&p)).unwrap(), p);
        }
    }
}
