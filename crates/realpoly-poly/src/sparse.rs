//! Sparse univariate polynomials.
//!
//! This module provides the canonical term store: a polynomial is an
//! immutable sequence of (exponent, coefficient) pairs with distinct,
//! ascending exponents and no zero coefficients. The zero polynomial has
//! no terms at all. Every constructor and every arithmetic operation
//! re-establishes this form before returning.

use crate::algorithms::{convolve, merge_sorted, TermAccumulator};
use crate::error::PolyError;
use crate::term::{Exponent, Term};

/// A univariate polynomial with real coefficients.
///
/// Terms are stored in ascending exponent order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polynomial {
    /// Terms in canonical order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from explicit `(exponent, coefficient)` pairs.
    ///
    /// Duplicate exponents are summed, terms whose final coefficient is
    /// exactly zero are dropped, and the rest are sorted.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidExponent`] for a negative (or too large)
    /// exponent and [`PolyError::NonFiniteCoefficient`] for NaN or infinite
    /// coefficients.
    pub fn from_terms<I>(terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        let mut acc = TermAccumulator::new();
        for (exponent, coeff) in terms {
            let exponent =
                Exponent::try_from(exponent).map_err(|_| PolyError::InvalidExponent(exponent))?;
            if !coeff.is_finite() {
                return Err(PolyError::NonFiniteCoefficient(coeff));
            }
            acc.add_term(exponent, coeff);
        }
        Ok(Self::from_canonical(acc.into_terms()))
    }

    /// Wraps terms that are already canonical.
    pub(crate) fn from_canonical(terms: Vec<Term>) -> Self {
        debug_assert!(is_canonical(&terms), "terms are not canonical: {terms:?}");
        Self { terms }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Creates a constant polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `c` is NaN or infinite.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial `c * x^n`.
    ///
    /// A zero coefficient gives the zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `c` is NaN or infinite.
    #[must_use]
    pub fn monomial(c: f64, n: Exponent) -> Self {
        assert!(c.is_finite(), "coefficient {c} is not finite");
        if c == 0.0 {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(n, c)],
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the term at position `i` in ascending exponent order.
    #[must_use]
    pub fn term(&self, i: usize) -> Option<Term> {
        self.terms.get(i).copied()
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterates over the terms in ascending exponent order.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<Exponent> {
        self.terms.last().map(|t| t.exponent)
    }

    /// Returns the leading (highest exponent) term.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms.last().copied()
    }

    /// Returns the coefficient of `x^n`, 0.0 if there is no such term.
    #[must_use]
    pub fn coeff(&self, n: Exponent) -> f64 {
        self.terms
            .binary_search_by_key(&n, |t| t.exponent)
            .map_or(0.0, |i| self.terms[i].coeff)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_canonical(merge_sorted(&self.terms, &other.terms))
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|t| Term::new(t.exponent, -t.coeff)).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// Costs `O(self.len() * other.len())` regardless of degree.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent overflows [`Exponent`].
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_canonical(convolve(&self.terms, &other.terms))
    }

    /// Multiplies by a scalar.
    ///
    /// Products that underflow to zero are dropped; products that
    /// overflow follow IEEE semantics like the other arithmetic.
    ///
    /// # Panics
    ///
    /// Panics if `c` is NaN or infinite.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        assert!(c.is_finite(), "scalar {c} is not finite");
        if c == 0.0 {
            return Self::zero();
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.exponent, t.coeff * c))
                .filter(|t| t.coeff != 0.0)
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Checks strictly ascending exponents and non-zero coefficients.
fn is_canonical(terms: &[Term]) -> bool {
    terms.windows(2).all(|w| w[0].exponent < w[1].exponent) && terms.iter().all(|t| t.coeff != 0.0)
}
