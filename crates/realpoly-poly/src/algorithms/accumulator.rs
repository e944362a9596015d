//! Hashed scratch space for accumulating sparse terms.
//!
//! Terms are summed per exponent in insertion order and frozen into
//! canonical form (ascending exponents, no zero coefficients) once all
//! of them have been added.

use rustc_hash::FxHashMap;

use crate::term::{Exponent, Term};

/// Accumulates terms keyed by exponent.
///
/// Suitable when exponents are sparse or unbounded, e.g. while parsing.
#[derive(Clone, Debug, Default)]
pub struct TermAccumulator {
    scratch: FxHashMap<Exponent, f64>,
}

impl TermAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator with room for `capacity` distinct exponents.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Adds `coeff * x^exponent`.
    pub fn add_term(&mut self, exponent: Exponent, coeff: f64) {
        *self.scratch.entry(exponent).or_insert(0.0) += coeff;
    }

    /// Returns the number of distinct exponents seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scratch.len()
    }

    /// Returns true if no term has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scratch.is_empty()
    }

    /// Freezes the accumulated terms into canonical order.
    ///
    /// Exponents whose coefficients summed to exactly zero are dropped.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term> {
        let mut terms: Vec<Term> = self
            .scratch
            .into_iter()
            .filter(|&(_, c)| c != 0.0)
            .map(Term::from)
            .collect();
        terms.sort_unstable_by_key(|t| t.exponent);
        terms
    }
}
