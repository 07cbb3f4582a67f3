use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside its admissible range
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Parameters of a conformance run.
///
/// The random ranges distinguish finite contexts, where full-width
/// exponents are cheap, from infinite ones, where element sizes grow
/// with the exponent.

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarnessSettings {
    ///iterations of every law
    #[builder(default = "100")]
    pub iterations: u64,

    ///seed of the random state
    #[builder(default = "0")]
    pub seed: u64,

    ///print the operands of every iteration, not only of failures
    #[builder(default = "false")]
    pub verbose: bool,

    ///exclusive bound on machine-word exponents for infinite contexts
    #[builder(default = "256")]
    pub infinite_exponent_bound: u64,

    ///bit size of big exponents for finite contexts
    #[builder(default = "100")]
    pub finite_bigint_exponent_bits: u64,

    ///bit size of big exponents for infinite contexts
    #[builder(default = "8")]
    pub infinite_bigint_exponent_bits: u64,

    ///bit size of big integer and rational scalar operands
    #[builder(default = "100")]
    pub scalar_bits: u64,

    ///exclusive bound on random vector lengths
    #[builder(default = "10")]
    pub vector_max_len: u64,

    ///exclusive bound on random matrix dimensions for finite contexts
    #[builder(default = "5")]
    pub finite_matrix_max_dim: u64,

    ///exclusive bound on random matrix dimensions for infinite contexts
    #[builder(default = "3")]
    pub infinite_matrix_max_dim: u64,
}

impl Default for HarnessSettings {
    fn default() -> HarnessSettings {
        HarnessSettingsBuilder::default().build().unwrap()
    }
}

impl HarnessSettings {
    /// Checks that every random range is non-empty.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_positive("infinite_exponent_bound", Some(self.infinite_exponent_bound))?;
        check_positive("vector_max_len", Some(self.vector_max_len))?;
        check_positive("finite_matrix_max_dim", Some(self.finite_matrix_max_dim))?;
        check_positive("infinite_matrix_max_dim", Some(self.infinite_matrix_max_dim))?;
        Ok(())
    }

    /// Bound on machine-word exponents, or `None` for the full range.
    pub fn exponent_bound(&self, finite: bool) -> Option<u64> {
        if finite {
            None
        } else {
            Some(self.infinite_exponent_bound)
        }
    }

    pub fn bigint_exponent_bits(&self, finite: bool) -> u64 {
        if finite {
            self.finite_bigint_exponent_bits
        } else {
            self.infinite_bigint_exponent_bits
        }
    }

    pub fn matrix_max_dim(&self, finite: bool) -> u64 {
        if finite {
            self.finite_matrix_max_dim
        } else {
            self.infinite_matrix_max_dim
        }
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for HarnessSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        HarnessSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl HarnessSettingsBuilder {
    /// check that the random ranges set so far are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_positive("infinite_exponent_bound", self.infinite_exponent_bound)?;
        check_positive("vector_max_len", self.vector_max_len)?;
        check_positive("finite_matrix_max_dim", self.finite_matrix_max_dim)?;
        check_positive("infinite_matrix_max_dim", self.infinite_matrix_max_dim)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: Option<u64>) -> Result<(), SettingsError> {
    match value {
        Some(0) => Err(SettingsError::BadFieldValue(field)),
        _ => Ok(()),
    }
}
