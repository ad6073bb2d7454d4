use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-negative value amount in the ledger's smallest unit.
///
/// Used for ticket prices and attached payments. Amounts are plain
/// integers; the external environment decides what one unit is worth.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    /// Create from a raw unit count.
    pub fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw unit count.
    pub fn as_units(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(&self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Saturating addition.
    pub fn saturating_add(&self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
