use gatepass_types::{ActorId, Amount, CallerContext, EventId, Timestamp};

use crate::error::LedgerError;
use crate::notify::Committed;
use crate::projection::EventSummary;
use crate::records::{EventProposal, EventRecord, TicketRecord};

/// Write boundary for ledger mutating operations.
///
/// Every operation takes the caller's context and, where time matters,
/// the caller-supplied current timestamp. Operations are atomic: they
/// commit their full effect and notifications, or nothing.
pub trait LedgerWriter: Send + Sync {
    fn create_event(
        &self,
        ctx: &CallerContext,
        proposal: EventProposal,
    ) -> Result<Committed<EventId>, LedgerError>;

    fn initialize_ticket_series(
        &self,
        ctx: &CallerContext,
        event_id: EventId,
        name: &str,
        symbol: &str,
    ) -> Result<Committed<()>, LedgerError>;

    fn register_for_event(
        &self,
        ctx: &CallerContext,
        now: Timestamp,
        event_id: EventId,
        attached_payment: Amount,
    ) -> Result<Committed<TicketRecord>, LedgerError>;

    fn validate_ticket(
        &self,
        ctx: &CallerContext,
        event_id: EventId,
        attendee: ActorId,
    ) -> Result<Committed<bool>, LedgerError>;
}

/// Read boundary for ledger queries. Queries have no side effects.
pub trait LedgerReader: Send + Sync {
    fn get_event(&self, event_id: EventId) -> Result<EventRecord, LedgerError>;

    /// Never fails on unknown events or identities; those report `false`.
    fn has_registered(&self, attendee: ActorId, event_id: EventId) -> Result<bool, LedgerError>;

    fn ticket(
        &self,
        event_id: EventId,
        attendee: ActorId,
    ) -> Result<Option<TicketRecord>, LedgerError>;

    fn summary(&self, event_id: EventId) -> Result<EventSummary, LedgerError>;

    fn event_count(&self) -> Result<u64, LedgerError>;
}
