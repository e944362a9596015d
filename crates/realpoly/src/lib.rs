//! # realpoly
//!
//! Univariate polynomials with real coefficients.
//!
//! `realpoly` reads polynomials written as `5-3x2+7x8`, adds and
//! multiplies them, evaluates them and writes them back in the same
//! form. The arithmetic lives in [`realpoly_poly`]; this crate adds the
//! one-line-per-file persistence in [`io`].
//!
//! ## Quick Start
//!
//! ```
//! use realpoly::prelude::*;
//!
//! let p: Polynomial = "6+5x3".parse().unwrap();
//! let q: Polynomial = "-2x-9x4".parse().unwrap();
//! let s = p.add(&q);
//!
//! assert_eq!(s.to_string(), "6-2x+5x3-9x4");
//! assert!(s.has_root(1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod io;


pub use realpoly_poly as poly;
pub use realpoly_poly::{
    parse, serialize, Exponent, ParseError, PolyError, Polynomial, Term, ROOT_TOLERANCE,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::io::{load, save, IoError};
    pub use realpoly_poly::{parse, serialize, ParseError, PolyError, Polynomial, Term};
}
