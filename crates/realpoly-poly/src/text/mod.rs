//! The textual polynomial grammar.
//!
//! A polynomial is written as a signed sum of terms with no whitespace,
//! e.g. `5-3x2+7x8`:
//! - `x` stands for `x^1`, `xN` for `x^N`
//! - A missing coefficient before `x` means 1
//! - A term without `x` is a constant
//! - The zero polynomial is written `0`
//!
//! [`parse`] and [`serialize`] are inverse to each other on canonical
//! polynomials.

pub mod parser;
pub mod serializer;
pub mod tokenizer;

pub use parser::parse;
pub use serializer::serialize;
pub use tokenizer::{Sign, Token, Tokenizer};
