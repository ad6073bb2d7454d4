use std::sync::RwLock;

use tracing::debug;

use gatepass_types::{ActorId, Amount, CallerContext, EventId, Timestamp};

use crate::attendance::verify_attendance;
use crate::error::LedgerError;
use crate::notify::{Committed, Notification};
use crate::projection::{summarize, EventSummary};
use crate::records::{EventProposal, EventRecord, TicketRecord};
use crate::registry::EventRegistry;
use crate::tickets::TicketBook;
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory ledger for tests, local demos, and embedding.
///
/// All state lives behind a single `RwLock`; each mutating operation
/// validates under the write lock and then commits in full or not at all.
/// State is never handed out by reference, so every access goes through
/// the operations of [`LedgerWriter`] and [`LedgerReader`].
pub struct InMemoryLedger {
    inner: RwLock<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    registry: EventRegistry,
    tickets: TicketBook,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerState::default()),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn create_event(
        &self,
        ctx: &CallerContext,
        proposal: EventProposal,
    ) -> Result<Committed<EventId>, LedgerError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger write lock poisoned".into()))?;

        let event_id = state.registry.create(ctx.identity, proposal)?;
        debug!(event = %event_id, organizer = %ctx.identity, "event created");

        Ok(Committed::with(
            event_id,
            Notification::EventCreated {
                event_id,
                organizer: ctx.identity,
            },
        ))
    }

    fn initialize_ticket_series(
        &self,
        ctx: &CallerContext,
        event_id: EventId,
        name: &str,
        symbol: &str,
    ) -> Result<Committed<()>, LedgerError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger write lock poisoned".into()))?;

        let LedgerState { registry, tickets } = &mut *state;
        registry.get(event_id)?;
        let series = tickets.init_series(event_id, name.to_string(), symbol.to_string())?;
        debug!(event = %event_id, caller = %ctx.identity, series = %series.name, "ticket series created");

        Ok(Committed::with(
            (),
            Notification::TicketSeriesCreated {
                event_id,
                name: name.to_string(),
                symbol: symbol.to_string(),
            },
        ))
    }

    fn register_for_event(
        &self,
        ctx: &CallerContext,
        now: Timestamp,
        event_id: EventId,
        attached_payment: Amount,
    ) -> Result<Committed<TicketRecord>, LedgerError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger write lock poisoned".into()))?;

        let LedgerState { registry, tickets } = &mut *state;
        let event = registry.get_mut(event_id)?;
        let ticket = tickets.issue(event, ctx.identity, attached_payment, now)?;
        debug!(
            event = %event_id,
            attendee = %ctx.identity,
            paid = %attached_payment,
            registered = event.registered_count,
            "ticket minted"
        );

        Ok(Committed::with(
            ticket.clone(),
            Notification::TicketMinted {
                event_id,
                attendee: ctx.identity,
                paid_amount: attached_payment,
            },
        ))
    }

    fn validate_ticket(
        &self,
        ctx: &CallerContext,
        event_id: EventId,
        attendee: ActorId,
    ) -> Result<Committed<bool>, LedgerError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger write lock poisoned".into()))?;

        let LedgerState { registry, tickets } = &mut *state;
        let event = registry.get(event_id)?;
        let attended = verify_attendance(ctx, event, tickets, attendee)?;
        debug!(event = %event_id, attendee = %attendee, "attendance verified");

        Ok(Committed::with(
            attended,
            Notification::AttendanceVerified { event_id, attendee },
        ))
    }
}

impl LedgerReader for InMemoryLedger {
    fn get_event(&self, event_id: EventId) -> Result<EventRecord, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;

        state.registry.get(event_id).cloned()
    }

    fn has_registered(&self, attendee: ActorId, event_id: EventId) -> Result<bool, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;

        Ok(state.tickets.has_registered(attendee, event_id))
    }

    fn ticket(
        &self,
        event_id: EventId,
        attendee: ActorId,
    ) -> Result<Option<TicketRecord>, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;

        Ok(state.tickets.get(event_id, attendee).cloned())
    }

    fn summary(&self, event_id: EventId) -> Result<EventSummary, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;

        let event = state.registry.get(event_id)?;
        Ok(summarize(event, &state.tickets))
    }

    fn event_count(&self) -> Result<u64, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;

        Ok(state.registry.len() as u64)
    }
}
