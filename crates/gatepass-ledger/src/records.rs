use std::fmt;

use serde::{Deserialize, Serialize};

use gatepass_types::{ActorId, Amount, EventId, Timestamp};

use crate::error::LedgerError;

/// Pricing classification for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// No payment expected at registration.
    Free,
    /// Registration requires an attached payment.
    Paid,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
        };
        write!(f, "{s}")
    }
}

/// Creation input for a new event.
///
/// The registry validates a proposal and turns it into an [`EventRecord`],
/// with the submitting caller as organizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProposal {
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub kind: EventKind,
    pub ticket_price: Amount,
    /// Capacity ceiling; 0 means unlimited.
    pub expected_guest_count: u32,
}

impl EventProposal {
    /// Check creation invariants, in rejection order.
    pub(crate) fn validate(&self) -> Result<(), LedgerError> {
        if self.end_time <= self.start_time {
            return Err(LedgerError::InvalidDateRange);
        }
        if self.kind == EventKind::Paid && self.ticket_price.is_zero() {
            return Err(LedgerError::InvalidPricing);
        }
        Ok(())
    }
}

/// A registered event.
///
/// Created once by the registry and never deleted. After creation only
/// `registered_count` changes, and only through successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub organizer: ActorId,
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub kind: EventKind,
    pub ticket_price: Amount,
    /// Capacity ceiling; 0 means unlimited.
    pub expected_guest_count: u32,
    pub registered_count: u32,
}

impl EventRecord {
    /// Returns `true` if registration requires payment.
    pub fn is_paid(&self) -> bool {
        self.kind == EventKind::Paid
    }

    /// Returns `true` if registration has closed because the event ended.
    /// The end time itself counts as ended.
    pub fn has_ended(&self, now: Timestamp) -> bool {
        now >= self.end_time
    }

    /// Returns `true` if the capacity ceiling has been reached.
    /// A ceiling of 0 means unlimited.
    pub fn is_full(&self) -> bool {
        self.expected_guest_count > 0 && self.registered_count >= self.expected_guest_count
    }
}

/// One issued ticket, keyed by `(event_id, attendee)`.
///
/// An identity holds at most one ticket per event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub event_id: EventId,
    pub attendee: ActorId,
    /// Amount transferred at registration; zero for free events.
    pub paid_amount: Amount,
    /// Set true only by attendance verification.
    pub attended: bool,
}

/// Descriptive metadata for the batch of tickets minted for one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSeries {
    pub event_id: EventId,
    pub name: String,
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal(kind: EventKind, price: u64) -> EventProposal {
        EventProposal {
            title: "pool party".into(),
            description: "Matured minds only".into(),
            start_time: Timestamp::from_secs(1_000),
            end_time: Timestamp::from_secs(2_000),
            kind,
            ticket_price: Amount::from_units(price),
            expected_guest_count: 10,
        }
    }

    #[test]
    fn valid_proposal_passes() {
        proposal(EventKind::Paid, 1).validate().unwrap();
        proposal(EventKind::Free, 0).validate().unwrap();
    }

    #[test]
    fn end_time_must_exceed_start_time() {
        let mut p = proposal(EventKind::Free, 0);
        p.end_time = p.start_time;
        assert_eq!(p.validate().unwrap_err(), LedgerError::InvalidDateRange);

        p.end_time = Timestamp::from_secs(500);
        assert_eq!(p.validate().unwrap_err(), LedgerError::InvalidDateRange);
    }

    #[test]
    fn paid_event_requires_nonzero_price() {
        let p = proposal(EventKind::Paid, 0);
        assert_eq!(p.validate().unwrap_err(), LedgerError::InvalidPricing);
    }

    #[test]
    fn free_event_price_is_unconstrained() {
        // A free event may carry any nominal price, including zero.
        proposal(EventKind::Free, 20).validate().unwrap();
    }

    #[test]
    fn date_range_is_checked_before_pricing() {
        let mut p = proposal(EventKind::Paid, 0);
        p.end_time = Timestamp::from_secs(500);
        assert_eq!(p.validate().unwrap_err(), LedgerError::InvalidDateRange);
    }

    #[test]
    fn end_time_counts_as_ended() {
        let record = EventRecord {
            id: EventId::from_raw(1),
            organizer: ActorId::from_raw([1; 32]),
            title: "t".into(),
            description: "d".into(),
            start_time: Timestamp::from_secs(1_000),
            end_time: Timestamp::from_secs(2_000),
            kind: EventKind::Free,
            ticket_price: Amount::zero(),
            expected_guest_count: 0,
            registered_count: 0,
        };
        assert!(!record.has_ended(Timestamp::from_secs(1_999)));
        assert!(record.has_ended(Timestamp::from_secs(2_000)));
        assert!(record.has_ended(Timestamp::from_secs(2_001)));
    }

    #[test]
    fn zero_guest_count_means_unlimited() {
        let mut record = EventRecord {
            id: EventId::from_raw(1),
            organizer: ActorId::from_raw([1; 32]),
            title: "t".into(),
            description: "d".into(),
            start_time: Timestamp::from_secs(1_000),
            end_time: Timestamp::from_secs(2_000),
            kind: EventKind::Free,
            ticket_price: Amount::zero(),
            expected_guest_count: 0,
            registered_count: 1_000_000,
        };
        assert!(!record.is_full());

        record.expected_guest_count = 2;
        record.registered_count = 1;
        assert!(!record.is_full());
        record.registered_count = 2;
        assert!(record.is_full());
    }

    #[test]
    fn serde_roundtrip() {
        let record = TicketRecord {
            event_id: EventId::from_raw(3),
            attendee: ActorId::from_raw([9; 32]),
            paid_amount: Amount::from_units(1),
            attended: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TicketRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
