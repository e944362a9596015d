//! Evaluation and the approximate root test.

use crate::sparse::Polynomial;

/// Default tolerance for [`Polynomial::has_root`].
pub const ROOT_TOLERANCE: f64 = 1e-9;

impl Polynomial {
    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are summed in ascending exponent order. The zero polynomial
    /// evaluates to `0.0` everywhere. Overflow follows IEEE semantics and
    /// yields an infinity rather than an error.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.iter().fold(0.0, |acc, t| acc + t.eval(x))
    }

    /// Approximate root test: `|p(x)| < ROOT_TOLERANCE`.
    ///
    /// This is not an exact test. It tolerates rounding error accumulated
    /// during evaluation, so it may also accept points merely close to a
    /// root.
    #[must_use]
    pub fn has_root(&self, x: f64) -> bool {
        self.has_root_within(x, ROOT_TOLERANCE)
    }

    /// Approximate root test with a caller-chosen tolerance.
    #[must_use]
    pub fn has_root_within(&self, x: f64, tolerance: f64) -> bool {
        self.eval(x).abs() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2
        let p = Polynomial::from_dense(&[1.0, 2.0, 3.0]).unwrap();

        // p(2) = 1 + 4 + 12 = 17
        assert_eq!(p.eval(2.0), 17.0);
        assert_eq!(p.eval(0.0), 1.0);
    }

    #[test]
    fn test_eval_zero_polynomial() {
        let zero = Polynomial::zero();
        for x in [0.0, 3.0, -1.5, 1e300] {
            let v = zero.eval(x);
            assert_eq!(v, 0.0);
            assert!(v.is_sign_positive());
        }
        assert!(zero.has_root(5.0));
    }

    #[test]
    fn test_eval_overflow() {
        let p = Polynomial::monomial(1.0, 400);
        assert_eq!(p.eval(10.0), f64::INFINITY);
        assert_eq!(p.eval(0.1), 0.0);
    }

    #[test]
    fn test_has_root() {
        // 3 + 2x has a root at -1.5
        let p = Polynomial::from_dense(&[3.0, 2.0]).unwrap();
        assert!(p.has_root(-1.5));
        assert!(!p.has_root(0.0));

        // 1 + x^2 has no real root
        let q = Polynomial::from_dense(&[1.0, 0.0, 1.0]).unwrap();
        assert!(!q.has_root(0.0));
        assert!(!q.has_root(1.0));
    }

    #[test]
    fn test_has_root_is_approximate() {
        // x - 1 at a point 1e-12 away from the root
        let p = Polynomial::from_terms([(0, -1.0), (1, 1.0)]).unwrap();
        assert!(p.has_root(1.0 + 1e-12));
        assert!(!p.has_root_within(1.0 + 1e-12, 1e-15));
    }
}
