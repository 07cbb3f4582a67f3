use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome counts of one law over all iterations.
///
/// A law that produced `WRONG` never yields a report; the run stops with
/// [`HarnessError::LawViolation`](super::HarnessError::LawViolation).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LawReport {
    pub name: String,
    pub iterations: u64,
    /// iterations that returned `SUCCESS`
    pub success: u64,
    /// iterations with the `DOMAIN` flag set
    pub domain: u64,
    /// iterations with the `UNABLE` flag set
    pub unable: u64,
    pub elapsed: Duration,
}

impl LawReport {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            iterations: 0,
            success: 0,
            domain: 0,
            unable: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Whether at least one iteration decided the law.  Iterations that
    /// were `DOMAIN` or `UNABLE` check nothing.
    pub fn is_conclusive(&self) -> bool {
        self.success > 0
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ... PASS   ({} successful, {} domain, {} unable, 0 wrong, {:.3e}s)",
            self.name,
            self.success,
            self.domain,
            self.unable,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Outcome of the whole catalogue on one context.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingReport {
    /// description of the context under test
    pub ring: String,
    pub laws: Vec<LawReport>,
    pub elapsed: Duration,
}

impl RingReport {
    pub fn law(&self, name: &str) -> Option<&LawReport> {
        self.laws.iter().find(|law| law.name == name)
    }

    pub fn total_success(&self) -> u64 {
        self.laws.iter().map(|law| law.success).sum()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub(crate) const DOUBLE_RULE: &str =
    "===============================================================================";
pub(crate) const SINGLE_RULE: &str =
    "-------------------------------------------------------------------------------";

impl fmt::Display for RingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", DOUBLE_RULE)?;
        writeln!(f, "Testing {}", self.ring)?;
        writeln!(f, "{}", SINGLE_RULE)?;
        for law in &self.laws {
            writeln!(f, "{}", law)?;
        }
        writeln!(f, "{}", SINGLE_RULE)?;
        writeln!(f, "Tests finished in {:.3e}s", self.elapsed.as_secs_f64())?;
        write!(f, "{}", DOUBLE_RULE)
    }
}
