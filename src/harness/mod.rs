//! Property-based conformance testing of ring contexts.
//!
//! [`RingTester`] draws random elements through a context's own
//! `randtest`, checks every law of the [catalogue](catalogue()) by
//! computing the same value two ways, and counts `DOMAIN` and `UNABLE`
//! outcomes.  A law that succeeds with unequal results stops the run with
//! [`HarnessError::LawViolation`].

mod catalogue;
mod driver;
mod error_types;
mod laws;
mod report;
mod settings;

pub use catalogue::*;
pub use driver::*;
pub use error_types::*;
pub use laws::*;
pub use report::{LawReport, RingReport};
pub use settings::*;
