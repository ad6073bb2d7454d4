use serde::{Deserialize, Serialize};

use gatepass_types::{ActorId, Amount, EventId};

/// Domain notification emitted by a committed operation.
///
/// The ledger returns notifications to the caller instead of publishing
/// them; any transport (or none) is the caller's concern. A rejected
/// operation emits nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A new event was stored in the registry.
    EventCreated {
        event_id: EventId,
        organizer: ActorId,
    },
    /// Collection metadata was established for an event's tickets.
    TicketSeriesCreated {
        event_id: EventId,
        name: String,
        symbol: String,
    },
    /// A ticket was minted for an attendee.
    TicketMinted {
        event_id: EventId,
        attendee: ActorId,
        paid_amount: Amount,
    },
    /// An organizer verified an attendee's ticket.
    AttendanceVerified {
        event_id: EventId,
        attendee: ActorId,
    },
}

impl Notification {
    /// Stable name of this notification kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EventCreated { .. } => "EventCreated",
            Self::TicketSeriesCreated { .. } => "TicketSeriesCreated",
            Self::TicketMinted { .. } => "TicketMinted",
            Self::AttendanceVerified { .. } => "AttendanceVerified",
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A committed operation's return value together with the notifications
/// it emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed<T> {
    pub value: T,
    pub notifications: Vec<Notification>,
}

impl<T> Committed<T> {
    /// A committed value with a single notification.
    pub(crate) fn with(value: T, notification: Notification) -> Self {
        Self {
            value,
            notifications: vec![notification],
        }
    }
}
