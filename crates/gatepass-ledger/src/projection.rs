//! Derived per-event statistics.
//!
//! Projections fold over the ticket book to answer organizer reporting
//! questions without exposing ledger state by reference.

use serde::{Deserialize, Serialize};

use gatepass_types::{Amount, EventId};

use crate::records::{EventKind, EventRecord};
use crate::tickets::TicketBook;

/// Read-only statistics for one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub event_id: EventId,
    pub title: String,
    pub kind: EventKind,
    pub registered: u32,
    /// Capacity ceiling; 0 means unlimited.
    pub capacity: u32,
    /// Tickets verified as attended.
    pub attended: u32,
    /// Sum of amounts attached at registration.
    pub gross_proceeds: Amount,
}

/// Build the summary for one event from its record and the ticket book.
pub(crate) fn summarize(event: &EventRecord, tickets: &TicketBook) -> EventSummary {
    let mut attended = 0u32;
    let mut gross_proceeds = Amount::zero();
    for ticket in tickets.tickets_for(event.id) {
        if ticket.attended {
            attended += 1;
        }
        gross_proceeds = gross_proceeds.saturating_add(ticket.paid_amount);
    }

    EventSummary {
        event_id: event.id,
        title: event.title.clone(),
        kind: event.kind,
        registered: event.registered_count,
        capacity: event.expected_guest_count,
        attended,
        gross_proceeds,
    }
}
