//! Linear-time merge of two canonical term sequences.

use std::cmp::Ordering;

use crate::term::Term;

/// Merges two sorted term slices, combining like terms.
///
/// Both inputs must be in canonical order (strictly ascending exponents).
/// Colliding exponents are summed and dropped if the sum is exactly zero,
/// so the output is canonical as well. Runs in `O(a.len() + b.len())`.
#[must_use]
pub fn merge_sorted(a: &[Term], b: &[Term]) -> Vec<Term> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].exponent.cmp(&b[j].exponent) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                let sum = a[i].coeff + b[j].coeff;
                if sum != 0.0 {
                    result.push(Term::new(a[i].exponent, sum));
                }
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_interleaved() {
        let a = [Term::new(0, 6.0), Term::new(3, 5.0)];
        let b = [Term::new(1, -2.0), Term::new(4, -9.0)];
        let merged = merge_sorted(&a, &b);
        let exps: Vec<_> = merged.iter().map(|t| t.exponent).collect();
        assert_eq!(exps, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_merge_cancellation() {
        let a = [Term::new(1, 1.0), Term::new(2, 3.0)];
        let b = [Term::new(1, -1.0)];
        assert_eq!(merge_sorted(&a, &b), vec![Term::new(2, 3.0)]);
    }

    #[test]
    fn test_merge_with_empty() {
        let a = [Term::new(5, 1.5)];
        assert_eq!(merge_sorted(&a, &[]), a.to_vec());
        assert_eq!(merge_sorted(&[], &a), a.to_vec());
    }
}
