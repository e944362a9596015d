//! Operator overloads and `num-traits` identities for [`Polynomial`].
//!
//! All impls delegate to the inherent methods; the inherent names are
//! called with explicit paths here because `std::ops` is in scope.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::sparse::Polynomial;

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(&self, &rhs)
            }
        }

        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(&self, rhs)
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_methods() {
        let p = Polynomial::from_dense(&[1.0, 1.0]).unwrap();
        let q = Polynomial::from_dense(&[1.0, -1.0]).unwrap();

        assert_eq!(&p + &q, Polynomial::constant(2.0));
        assert_eq!(&p - &q, Polynomial::monomial(2.0, 1));
        assert_eq!(p.clone() * q.clone(), Polynomial::from_terms([(0, 1.0), (2, -1.0)]).unwrap());
        assert_eq!(-&p, Polynomial::from_dense(&[-1.0, -1.0]).unwrap());
        assert_eq!(p.clone() + &q, &p + &q);
        assert_eq!(-p, Polynomial::neg(&Polynomial::from_dense(&[1.0, 1.0]).unwrap()));
    }

    #[test]
    fn test_num_traits_identities() {
        let p = Polynomial::from_dense(&[0.5, 0.0, -4.0]).unwrap();
        assert_eq!(&p + &<Polynomial as Zero>::zero(), p);
        assert_eq!(&p * &<Polynomial as One>::one(), p);
        assert!(Zero::is_zero(&(&p * &<Polynomial as Zero>::zero())));
    }
}
