//! Single terms `c * x^e` of a univariate polynomial.

/// Exponent of a term.
pub type Exponent = u32;

/// A term `coeff * x^exponent`.
///
/// Inside a [`crate::Polynomial`] the coefficient is never exactly zero.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Term {
    /// Power of `x`.
    pub exponent: Exponent,
    /// Real coefficient.
    pub coeff: f64,
}

impl Term {
    /// Creates the term `coeff * x^exponent`.
    #[must_use]
    pub const fn new(exponent: Exponent, coeff: f64) -> Self {
        Self { exponent, coeff }
    }

    /// Returns true if this term has no `x` factor.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.exponent == 0
    }

    /// Evaluates the term at `x`, with `0^0 = 1`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeff * pow(x, self.exponent)
    }
}

impl From<(Exponent, f64)> for Term {
    fn from((exponent, coeff): (Exponent, f64)) -> Self {
        Self::new(exponent, coeff)
    }
}

/// Raises `x` to a non-negative integer power.
///
/// `powi` only takes an `i32`; larger exponents fall back to `powf`.
#[must_use]
pub fn pow(x: f64, e: Exponent) -> f64 {
    match i32::try_from(e) {
        Ok(n) => x.powi(n),
        Err(_) => x.powf(f64::from(e)),
    }
}
