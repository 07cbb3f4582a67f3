use super::SettingsError;
use thiserror::Error;

/// Error type returned by the harness driver.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Two computation paths that must agree succeeded with different
    /// results.  Carries the operand dump of the failing iteration.
    #[error("law \"{law}\" violated in {ring} at iteration {iteration}\n{dump}")]
    LawViolation {
        ring: String,
        law: String,
        iteration: u64,
        dump: String,
    },
    #[error("Bad harness settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("Failed to write harness output: {0}")]
    Io(#[from] std::io::Error),
}
