//! # realpoly-poly
//!
//! Sparse univariate polynomials with real coefficients.
//!
//! This crate provides:
//! - The canonical term store ([`Polynomial`]): distinct ascending
//!   exponents, no zero coefficients, immutable once built
//! - A parser and serializer for the `5-3x2+7x8` text grammar
//! - Addition, multiplication, evaluation and an approximate root test
//!
//! ## Algorithm Selection
//!
//! Multiplication is `O(|P|·|Q|)` in the number of terms and picks its
//! scratch space by size:
//! - Degree bound small next to `|P|·|Q|`: dense exponent-indexed vector
//! - Otherwise: hashed accumulator
//!
//! ## Example
//!
//! ```
//! use realpoly_poly::{parse, serialize};
//!
//! let p = parse("1+x").unwrap();
//! let q = parse("1-x").unwrap();
//! let r = p.mul(&q);
//!
//! assert_eq!(serialize(&r), "1-x2");
//! assert_eq!(r.eval(3.0), -8.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod eval;
pub mod ops;
pub mod sparse;
pub mod term;
pub mod text;

#[cfg(test)]
mod proptests;

pub use dense::DenseScratch;
pub use error::{ParseError, PolyError};
pub use eval::ROOT_TOLERANCE;
pub use sparse::Polynomial;
pub use term::{Exponent, Term};
pub use text::{parse, serialize, Sign, Token, Tokenizer};
