//! Polynomial algorithms.
//!
//! This module contains the term-level kernels behind the arithmetic on
//! [`crate::Polynomial`]:
//! - Linear merge of two canonical term sequences (addition)
//! - Sparse convolution with dense or hashed scratch (multiplication)
//! - Hashed term accumulation (parsing, explicit construction)

pub mod accumulator;
pub mod convolve;
pub mod merge;

pub use accumulator::TermAccumulator;
pub use convolve::{convolve, Scratch, DENSE_SCRATCH_FACTOR};
pub use merge::merge_sorted;
