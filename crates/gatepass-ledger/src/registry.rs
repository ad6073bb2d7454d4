//! Event registry: the event table and its sequential id counter.

use std::collections::BTreeMap;

use gatepass_types::{ActorId, EventId};

use crate::error::LedgerError;
use crate::records::{EventProposal, EventRecord};

/// Owns the mapping from event id to record and enforces creation
/// invariants.
///
/// The id counter is private to the registry: ids start at 1, increase by
/// one per created event, and are never reused. Events are never deleted.
#[derive(Debug, Default)]
pub struct EventRegistry {
    last_id: u64,
    events: BTreeMap<EventId, EventRecord>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a proposal and store a new event; the caller becomes the
    /// organizer. On rejection nothing is allocated or stored.
    pub fn create(
        &mut self,
        organizer: ActorId,
        proposal: EventProposal,
    ) -> Result<EventId, LedgerError> {
        proposal.validate()?;

        let id = EventId::from_raw(self.last_id + 1);
        let record = EventRecord {
            id,
            organizer,
            title: proposal.title,
            description: proposal.description,
            start_time: proposal.start_time,
            end_time: proposal.end_time,
            kind: proposal.kind,
            ticket_price: proposal.ticket_price,
            expected_guest_count: proposal.expected_guest_count,
            registered_count: 0,
        };

        self.last_id += 1;
        self.events.insert(id, record);
        Ok(id)
    }

    /// Look up an event by id.
    pub fn get(&self, id: EventId) -> Result<&EventRecord, LedgerError> {
        self.events.get(&id).ok_or(LedgerError::NoSuchEvent(id))
    }

    pub(crate) fn get_mut(&mut self, id: EventId) -> Result<&mut EventRecord, LedgerError> {
        self.events.get_mut(&id).ok_or(LedgerError::NoSuchEvent(id))
    }

    /// Number of events ever created.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events have been created.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatepass_types::{Amount, Timestamp};

    use crate::records::EventKind;

    fn proposal() -> EventProposal {
        EventProposal {
            title: "pool party".into(),
            description: "Matured minds only".into(),
            start_time: Timestamp::from_secs(1_000),
            end_time: Timestamp::from_secs(2_000),
            kind: EventKind::Free,
            ticket_price: Amount::zero(),
            expected_guest_count: 100,
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut registry = EventRegistry::new();
        let organizer = ActorId::ephemeral();

        let first = registry.create(organizer, proposal()).unwrap();
        let second = registry.create(organizer, proposal()).unwrap();

        assert_eq!(first, EventId::from_raw(1));
        assert_eq!(second, EventId::from_raw(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn caller_becomes_organizer() {
        let mut registry = EventRegistry::new();
        let organizer = ActorId::from_raw([3; 32]);

        let id = registry.create(organizer, proposal()).unwrap();
        let record = registry.get(id).unwrap();

        assert_eq!(record.organizer, organizer);
        assert_eq!(record.registered_count, 0);
        assert_eq!(record.title, "pool party");
    }

    #[test]
    fn rejected_proposal_leaves_registry_unchanged() {
        let mut registry = EventRegistry::new();
        let organizer = ActorId::ephemeral();

        let mut bad = proposal();
        bad.end_time = Timestamp::from_secs(500);
        let error = registry.create(organizer, bad).unwrap_err();
        assert_eq!(error, LedgerError::InvalidDateRange);
        assert!(registry.is_empty());

        // The failed attempt must not burn an id.
        let id = registry.create(organizer, proposal()).unwrap();
        assert_eq!(id, EventId::from_raw(1));
    }

    #[test]
    fn unknown_event_is_rejected() {
        let registry = EventRegistry::new();
        let error = registry.get(EventId::from_raw(1)).unwrap_err();
        assert_eq!(error, LedgerError::NoSuchEvent(EventId::from_raw(1)));
        assert_eq!(error.to_string(), "No Event");
    }
}
