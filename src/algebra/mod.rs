//! Generic ring dispatch layer.
//!
//! Every algebraic structure is described by a context implementing
//! [`Ring`].  Elements live in caller-owned storage and every operation
//! writes into an output element and reports a [`Status`].  The vector
//! and matrix engines ([`VectorOps`], [`MatrixOps`]) are written once
//! against the trait and work for every context.

mod error_types;
mod flags;
mod matrix;
mod random;
mod ring_traits;
mod scalars;
mod status;
pub mod storage;
mod vector;

pub use error_types::*;
pub use flags::*;
pub use matrix::*;
pub use random::*;
pub use ring_traits::*;
pub use scalars::*;
pub use status::*;
pub use vector::*;

#[cfg(test)]
mod tests;
