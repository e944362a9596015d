//! Property-based tests for polynomial arithmetic and the text grammar.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::convolve::{convolve_with, Scratch};
    use crate::sparse::Polynomial;
    use crate::text::{parse, serialize};

    // Small integer coefficients keep every sum and product exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Arbitrary finite reals, including non-dyadic fractions
    fn real_coeff() -> impl Strategy<Value = f64> {
        prop_oneof![small_coeff(), -1.0e6..1.0e6f64, -1.0..1.0f64]
    }

    fn poly_with(coeff: impl Strategy<Value = f64>) -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((0i64..24, coeff), 0..=8)
            .prop_map(|terms| Polynomial::from_terms(terms).unwrap())
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        poly_with(small_coeff())
    }

    fn real_poly() -> impl Strategy<Value = Polynomial> {
        poly_with(real_coeff())
    }

    // Sum of |c * x^e|, the scale rounding error is proportional to
    fn magnitude(p: &Polynomial, x: f64) -> f64 {
        p.iter().map(|t| t.eval(x).abs()).sum()
    }

    fn close(a: f64, b: f64, scale: f64) -> bool {
        (a - b).abs() <= 1e-12 * (1.0 + scale)
    }

    proptest! {
        // Canonical form

        #[test]
        fn constructed_polys_are_canonical(p in real_poly()) {
            let terms = p.terms();
            prop_assert!(terms.windows(2).all(|w| w[0].exponent < w[1].exponent));
            prop_assert!(terms.iter().all(|t| t.coeff != 0.0));
        }

        #[test]
        fn round_trip(p in real_poly()) {
            let text = serialize(&p);
            prop_assert_eq!(parse(&text).unwrap(), p);
        }

        #[test]
        fn serialized_form_never_has_plus_minus(p in real_poly()) {
            prop_assert!(!serialize(&p).contains("+-"));
        }

        // Ring laws

        #[test]
        fn add_zero_identity(p in real_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(p.add(&zero), p.clone());
            prop_assert_eq!(zero.add(&p), p);
        }

        #[test]
        fn mul_zero(p in real_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(p.mul(&zero).is_zero());
            prop_assert!(zero.mul(&p).is_zero());
        }

        #[test]
        fn add_commutative(p in real_poly(), q in real_poly()) {
            prop_assert_eq!(p.add(&q), q.add(&p));
        }

        #[test]
        fn mul_commutative(p in real_poly(), q in real_poly()) {
            prop_assert_eq!(p.mul(&q), q.mul(&p));
        }

        #[test]
        fn additive_inverse(p in real_poly()) {
            prop_assert!(p.add(&p.neg()).is_zero());
        }

        #[test]
        fn distributive(p in small_poly(), q in small_poly(), r in small_poly()) {
            // p * (q + r) = p * q + p * r
            prop_assert_eq!(p.mul(&q.add(&r)), p.mul(&q).add(&p.mul(&r)));
        }

        // Degree properties

        #[test]
        fn mul_degree_bound(p in real_poly(), q in real_poly()) {
            let product = p.mul(&q);
            if let (Some(dp), Some(dq), Some(d)) = (p.degree(), q.degree(), product.degree()) {
                prop_assert!(d <= dp + dq);
            }
        }

        // Evaluation

        #[test]
        fn eval_add(p in real_poly(), q in real_poly(), x in -2.0..2.0f64) {
            // (p + q)(x) = p(x) + q(x)
            let sum = p.add(&q);
            let scale = magnitude(&p, x) + magnitude(&q, x);
            prop_assert!(close(sum.eval(x), p.eval(x) + q.eval(x), scale));
        }

        #[test]
        fn eval_mul(p in small_poly(), q in small_poly(), x in -1.0..1.0f64) {
            // (p * q)(x) = p(x) * q(x)
            let product = p.mul(&q);
            let scale = magnitude(&p, x) * magnitude(&q, x);
            prop_assert!(close(product.eval(x), p.eval(x) * q.eval(x), scale));
        }

        // Dense vs hashed scratch equivalence

        #[test]
        fn scratch_structures_agree(p in real_poly(), q in real_poly()) {
            prop_assert_eq!(
                convolve_with(p.terms(), q.terms(), Scratch::Dense),
                convolve_with(p.terms(), q.terms(), Scratch::Hashed)
            );
        }
    }
}
