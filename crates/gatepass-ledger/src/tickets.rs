//! Ticket issuance: registration gates, capacity accounting, and series
//! metadata.

use std::collections::HashMap;

use gatepass_types::{ActorId, Amount, EventId, Timestamp};

use crate::error::LedgerError;
use crate::records::{EventRecord, TicketRecord, TicketSeries};

/// Owns per-event ticket records and collection metadata.
///
/// Tickets are keyed by `(event_id, attendee)`; an identity holds at most
/// one ticket per event.
#[derive(Debug, Default)]
pub struct TicketBook {
    tickets: HashMap<(EventId, ActorId), TicketRecord>,
    series: HashMap<EventId, TicketSeries>,
}

impl TicketBook {
    /// Create an empty ticket book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish collection metadata for an event's tickets. One-shot:
    /// a second call for the same event is rejected.
    pub fn init_series(
        &mut self,
        event_id: EventId,
        name: String,
        symbol: String,
    ) -> Result<&TicketSeries, LedgerError> {
        if self.series.contains_key(&event_id) {
            return Err(LedgerError::SeriesAlreadyInitialized);
        }
        let entry = self.series.entry(event_id).or_insert(TicketSeries {
            event_id,
            name,
            symbol,
        });
        Ok(entry)
    }

    /// Collection metadata for an event, if established.
    pub fn series(&self, event_id: EventId) -> Option<&TicketSeries> {
        self.series.get(&event_id)
    }

    /// Run the registration gates in rejection order and mint a ticket.
    ///
    /// The event's registered count is bumped only after every gate has
    /// passed, so a rejection leaves the record and the book untouched and
    /// the attached payment is not retained.
    pub fn issue(
        &mut self,
        event: &mut EventRecord,
        attendee: ActorId,
        attached_payment: Amount,
        now: Timestamp,
    ) -> Result<TicketRecord, LedgerError> {
        if event.has_ended(now) {
            return Err(LedgerError::EventEnded);
        }
        if event.is_full() {
            return Err(LedgerError::RegistrationClosed);
        }
        if self.tickets.contains_key(&(event.id, attendee)) {
            return Err(LedgerError::AlreadyRegistered);
        }
        if event.is_paid() && attached_payment.is_zero() {
            return Err(LedgerError::InsufficientPayment);
        }

        let ticket = TicketRecord {
            event_id: event.id,
            attendee,
            paid_amount: attached_payment,
            attended: false,
        };
        self.tickets.insert((event.id, attendee), ticket.clone());
        event.registered_count += 1;
        Ok(ticket)
    }

    /// Returns `true` if the identity holds a ticket for the event.
    /// Never fails; unknown events and identities report `false`.
    pub fn has_registered(&self, attendee: ActorId, event_id: EventId) -> bool {
        self.tickets.contains_key(&(event_id, attendee))
    }

    /// The ticket for `(event_id, attendee)`, if issued.
    pub fn get(&self, event_id: EventId, attendee: ActorId) -> Option<&TicketRecord> {
        self.tickets.get(&(event_id, attendee))
    }

    pub(crate) fn get_mut(
        &mut self,
        event_id: EventId,
        attendee: ActorId,
    ) -> Option<&mut TicketRecord> {
        self.tickets.get_mut(&(event_id, attendee))
    }

    /// All tickets issued for one event.
    pub fn tickets_for(&self, event_id: EventId) -> impl Iterator<Item = &TicketRecord> {
        self.tickets.values().filter(move |t| t.event_id == event_id)
    }
}
