//! Dense, exponent-indexed coefficient storage.
//!
//! Dense vectors are never the canonical representation. They appear as
//! input to [`Polynomial::from_dense`] and as scratch space during
//! multiplication when the degree bound is small, and are always frozen
//! back into sparse canonical form before being returned.

use crate::error::PolyError;
use crate::sparse::Polynomial;
use crate::term::{Exponent, Term};

/// Scratch space indexed by exponent.
///
/// Slot `i` holds the running coefficient of `x^i`.
#[derive(Clone, Debug)]
pub struct DenseScratch {
    coeffs: Vec<f64>,
}

impl DenseScratch {
    /// Creates scratch space for exponents `0..=degree_bound`.
    #[must_use]
    pub fn with_degree_bound(degree_bound: usize) -> Self {
        Self {
            coeffs: vec![0.0; degree_bound + 1],
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Adds `coeff * x^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` exceeds the degree bound.
    pub fn add_term(&mut self, exponent: Exponent, coeff: f64) {
        self.coeffs[exponent as usize] += coeff;
    }

    /// Freezes the scratch space into canonical sparse terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term> {
        dense_to_terms(&self.coeffs)
    }
}

/// Converts coefficients indexed by exponent into canonical terms.
fn dense_to_terms(coeffs: &[f64]) -> Vec<Term> {
    coeffs
        .iter()
        .zip(0..=Exponent::MAX)
        .filter(|&(&c, _)| c != 0.0)
        .map(|(&c, e)| Term::new(e, c))
        .collect()
}

impl Polynomial {
    /// Creates a polynomial from dense coefficients, index = exponent.
    ///
    /// Zero entries are dropped, so `[6.0, 0.0, 0.0, 5.0]` is `6+5x3`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NonFiniteCoefficient`] for NaN or infinite
    /// entries, and [`PolyError::InvalidExponent`] if the slice is longer
    /// than the exponent range.
    pub fn from_dense(coeffs: &[f64]) -> Result<Self, PolyError> {
        if let Some(&c) = coeffs.iter().find(|c| !c.is_finite()) {
            return Err(PolyError::NonFiniteCoefficient(c));
        }
        if let Some(last) = coeffs.len().checked_sub(1) {
            if Exponent::try_from(last).is_err() {
                return Err(PolyError::InvalidExponent(
                    i64::try_from(last).unwrap_or(i64::MAX),
                ));
            }
        }

        Ok(Self::from_canonical(dense_to_terms(coeffs)))
    }

    /// Returns the coefficients as a dense vector, index = exponent.
    ///
    /// The zero polynomial yields an empty vector.
    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let Some(degree) = self.degree() else {
            return Vec::new();
        };

        let mut coeffs = vec![0.0; degree as usize + 1];
        for term in self.terms() {
            coeffs[term.exponent as usize] = term.coeff;
        }
        coeffs
    }
}
