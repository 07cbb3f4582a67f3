use bitflags::bitflags;
use std::ops::{BitAnd, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Result flags returned by every dispatch operation.
    ///
    /// An empty set means the operation succeeded and the output holds a
    /// fully determined value.  Flags from a sequence of operations are
    /// combined with `|`, so a whole computation can be checked at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Status: u8 {
        /// The operation is mathematically undefined for the given inputs.
        /// The output is unspecified and must not be read.
        const DOMAIN = 1;
        /// The context could not decide the answer with its current
        /// representation.  The output may hold a best-effort value.
        const UNABLE = 2;
        /// Two computations required to agree did not.  Produced only by
        /// the test harness.
        const WRONG = 4;
    }
}

impl Status {
    /// Alias for the empty flag set.
    pub const SUCCESS: Status = Status::empty();

    pub fn is_success(self) -> bool {
        self.is_empty()
    }

    pub fn has_domain(self) -> bool {
        self.contains(Status::DOMAIN)
    }

    pub fn has_unable(self) -> bool {
        self.contains(Status::UNABLE)
    }

    pub fn is_wrong(self) -> bool {
        self.contains(Status::WRONG)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::SUCCESS
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_success() {
            return write!(f, "SUCCESS");
        }
        let mut names = Vec::with_capacity(3);
        if self.has_domain() {
            names.push("DOMAIN");
        }
        if self.has_unable() {
            names.push("UNABLE");
        }
        if self.is_wrong() {
            names.push("WRONG");
        }
        write!(f, "{}", names.join(" | "))
    }
}

/// Three-valued answer to a predicate such as equality.
///
/// Contexts with inexact elements may be unable to decide a predicate, in
/// which case they answer `Unknown` rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    pub fn is_true(self) -> bool {
        self == Truth::True
    }

    pub fn is_false(self) -> bool {
        self == Truth::False
    }

    pub fn is_unknown(self) -> bool {
        self == Truth::Unknown
    }

    /// Status contribution of having asked this predicate.
    pub fn status(self) -> Status {
        match self {
            Truth::Unknown => Status::UNABLE,
            _ => Status::SUCCESS,
        }
    }

    /// Kleene conjunction over an iterator.  Stops early on `False`.
    pub fn all<I>(iter: I) -> Truth
    where
        I: IntoIterator<Item = Truth>,
    {
        let mut out = Truth::True;
        for t in iter {
            out = out & t;
            if out.is_false() {
                break;
            }
        }
        out
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }
}

impl BitAnd for Truth {
    type Output = Truth;
    fn bitand(self, rhs: Truth) -> Truth {
        match (self, rhs) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::True, Truth::True) => Truth::True,
            _ => Truth::Unknown,
        }
    }
}

impl Not for Truth {
    type Output = Truth;
    fn not(self) -> Truth {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Truth::True => "T_TRUE",
            Truth::False => "T_FALSE",
            Truth::Unknown => "T_UNKNOWN",
        };
        write!(f, "{}", s)
    }
}
