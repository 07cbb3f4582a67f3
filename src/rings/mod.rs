//! Reference contexts.
//!
//! Exact rings ([`IntegerRing`], [`RationalField`], [`NmodRing`]), an
//! approximate field ([`RealBallField`]) and two composite constructions
//! ([`MatrixRing`], [`PolynomialRing`]) that work over any base context.

mod integer;
mod matrix_ring;
mod nmod;
mod polynomial;
mod rational;
mod realball;

pub use integer::*;
pub use matrix_ring::*;
pub use nmod::NmodRing;
pub use polynomial::*;
pub use rational::*;
pub use realball::*;

/// Largest result, in bits, an unlimited bigint context attempts to build
/// in `pow`.  Larger powers report `UNABLE`.
pub const MAX_POWER_BITS: u64 = 1 << 31;
