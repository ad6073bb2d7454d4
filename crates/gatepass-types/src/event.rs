use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequential event identifier.
///
/// Assigned by the event registry at creation, starting at 1 and
/// increasing by one per event. Never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(u64);

impl EventId {
    /// Create from a raw id. Ids are normally allocated by the registry.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ev:{}", self.0)
    }
}
