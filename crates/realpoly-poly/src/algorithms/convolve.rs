//! Sparse term convolution (polynomial multiplication).
//!
//! Every pair of terms contributes `ca * cb` at exponent `ea + eb`. The
//! partial products are accumulated in one of two scratch structures:
//! - Dense `Vec<f64>` when the degree bound is small relative to the
//!   number of partial products
//! - Hashed map otherwise, so that `x^1000000 * x` does not allocate a
//!   million slots
//!
//! Both visit the pairs in the same order, so they produce identical sums.
//! The operands are put in a fixed order first, which makes the visiting
//! order, and thus every rounded sum, independent of argument order.

use std::cmp::Ordering;

use crate::algorithms::accumulator::TermAccumulator;
use crate::dense::DenseScratch;
use crate::term::{Exponent, Term};

/// Dense scratch is used while `degree_bound + 1 <= DENSE_SCRATCH_FACTOR * a.len() * b.len()`.
pub const DENSE_SCRATCH_FACTOR: usize = 4;

/// Scratch structure used for a convolution.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scratch {
    /// Exponent-indexed vector.
    Dense,
    /// Hash map keyed by exponent.
    Hashed,
}

/// Multiplies two canonical term slices in `O(a.len() * b.len())`.
///
/// # Panics
///
/// Panics if a product exponent overflows [`Exponent`].
#[must_use]
pub fn convolve(a: &[Term], b: &[Term]) -> Vec<Term> {
    match select_scratch(a, b) {
        Some(scratch) => convolve_with(a, b, scratch),
        None => Vec::new(),
    }
}

/// Picks the scratch structure for `a * b`, or `None` if either side is zero.
///
/// # Panics
///
/// Panics if the degree bound overflows [`Exponent`].
#[must_use]
pub fn select_scratch(a: &[Term], b: &[Term]) -> Option<Scratch> {
    let bound = degree_bound(a, b)?;
    let products = a.len().saturating_mul(b.len());

    if (bound as usize) < DENSE_SCRATCH_FACTOR.saturating_mul(products) {
        Some(Scratch::Dense)
    } else {
        Some(Scratch::Hashed)
    }
}

/// Multiplies using the given scratch structure.
///
/// # Panics
///
/// Panics if a product exponent overflows [`Exponent`].
#[must_use]
pub fn convolve_with(a: &[Term], b: &[Term], scratch: Scratch) -> Vec<Term> {
    let Some(bound) = degree_bound(a, b) else {
        return Vec::new();
    };
    let (a, b) = if operand_order(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    };

    match scratch {
        Scratch::Dense => {
            let mut acc = DenseScratch::with_degree_bound(bound as usize);
            for ta in a {
                for tb in b {
                    acc.add_term(ta.exponent + tb.exponent, ta.coeff * tb.coeff);
                }
            }
            acc.into_terms()
        }
        Scratch::Hashed => {
            let mut acc = TermAccumulator::with_capacity(a.len().max(b.len()));
            for ta in a {
                for tb in b {
                    acc.add_term(ta.exponent + tb.exponent, ta.coeff * tb.coeff);
                }
            }
            acc.into_terms()
        }
    }
}

/// Total order on term slices: length, then exponents and coefficients.
fn operand_order(a: &[Term], b: &[Term]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b)
            .map(|(ta, tb)| {
                ta.exponent
                    .cmp(&tb.exponent)
                    .then_with(|| ta.coeff.total_cmp(&tb.coeff))
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Largest exponent the product can reach, `None` if either side is empty.
///
/// Once this is known to fit, no individual exponent sum can overflow.
fn degree_bound(a: &[Term], b: &[Term]) -> Option<Exponent> {
    let da = a.last()?.exponent;
    let db = b.last()?.exponent;
    match da.checked_add(db) {
        Some(bound) => Some(bound),
        None => panic!("product degree {da} + {db} overflows the exponent range"),
    }
}
