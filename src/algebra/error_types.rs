use thiserror::Error;

/// Error type returned by context constructors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// The modulus of a residue ring must be at least one
    #[error("Modulus must be positive")]
    ZeroModulus,
    /// A size limit of zero bits admits no elements
    #[error("Size limit must be positive")]
    ZeroSizeLimit,
}
