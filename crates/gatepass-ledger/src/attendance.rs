//! Attendance verification, restricted to the event's organizer.

use gatepass_types::{ActorId, CallerContext};

use crate::error::LedgerError;
use crate::records::EventRecord;
use crate::tickets::TicketBook;

/// Authorize the caller and mark the attendee's ticket as attended.
///
/// Only the event's organizer may verify. Verification is idempotent: an
/// already-attended ticket verifies again without error. Returns the
/// resulting attendance flag.
pub fn verify_attendance(
    ctx: &CallerContext,
    event: &EventRecord,
    tickets: &mut TicketBook,
    attendee: ActorId,
) -> Result<bool, LedgerError> {
    if ctx.identity != event.organizer {
        return Err(LedgerError::Unauthorized);
    }

    let ticket = tickets
        .get_mut(event.id, attendee)
        .ok_or(LedgerError::TicketNotFound)?;
    ticket.attended = true;
    Ok(ticket.attended)
}
