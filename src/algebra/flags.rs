use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Declared algebraic properties of a context.
    ///
    /// Generic algorithms consult these to skip inapplicable checks (no
    /// commutativity law for a matrix ring) or to choose safe random ranges
    /// (finite rings may use full-width exponents).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct RingFlags: u32 {
        /// The ring has finitely many elements.
        const FINITE = 1;
        /// Multiplication is commutative.
        const COMMUTATIVE = 1 << 1;
        /// Elements are limited in size; operations exceeding the limit
        /// report `UNABLE`.
        const SIZE_LIMITED = 1 << 2;
        /// Every nonzero element is a unit.
        const FIELD = 1 << 3;
        /// Commutative with no zero divisors.
        const INTEGRAL_DOMAIN = 1 << 4;
    }
}

impl RingFlags {
    pub fn is_finite(self) -> bool {
        self.contains(RingFlags::FINITE)
    }

    pub fn is_commutative(self) -> bool {
        self.contains(RingFlags::COMMUTATIVE)
    }

    pub fn is_size_limited(self) -> bool {
        self.contains(RingFlags::SIZE_LIMITED)
    }

    pub fn is_field(self) -> bool {
        self.contains(RingFlags::FIELD)
    }

    pub fn is_integral_domain(self) -> bool {
        self.contains(RingFlags::INTEGRAL_DOMAIN)
    }
}
