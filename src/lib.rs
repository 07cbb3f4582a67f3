//! __gring__ is a generic ring-arithmetic layer with a property-based
//! conformance harness.
//!
//! Algebraic structures are described by *contexts*.  A context implements
//! the [`Ring`](algebra::Ring) trait, which plays the role of an operation
//! table: every operation writes into a caller-owned element and returns a
//! [`Status`](algebra::Status) that reports domain errors (`DOMAIN`) and
//! incapability (`UNABLE`) instead of panicking.  Generic algorithms, the
//! vector and matrix engines and the law harness are written once against
//! the trait and work for every context.
//!
//! ## Features
//!
//! * __Reference contexts__: integers, rationals with an optional size
//!   limit, integers mod n, real balls, and matrix and polynomial rings over
//!   any base context.  See [`rings`].
//!
//! * __Engines__: positionwise vector arithmetic and classical matrix
//!   multiplication through the dispatch layer.  See [`algebra`].
//!
//! * __Conformance harness__: randomised checks of the ring axioms,
//!   aliasing behaviour and typed-operand equivalence for any context.  See
//!   [`harness`].
//!
//! ```
//! use gring::algebra::*;
//! use gring::rings::NmodRing;
//!
//! let ring = NmodRing::new(107).unwrap();
//! let mut x = ring.init();
//! assert!(ring.set_si(&mut x, -1).is_success());
//! assert_eq!(x, 106);
//!
//! let report = gring::harness::assert_ring_laws(&ring, 10);
//! assert!(report.laws.iter().all(|law| law.is_conclusive()));
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of this crate.
pub fn version() -> &'static str {
    VERSION
}

pub mod algebra;
pub mod harness;
pub mod io;
pub mod rings;
