use gatepass_types::EventId;

/// Errors produced by ledger operations.
///
/// Every domain rejection carries a fixed, human-readable reason string
/// as its `Display` output; callers match on it verbatim. A rejection
/// guarantees the pre-call state is fully restored, including any
/// attached payment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("END DATE MUST BE GREATER")]
    InvalidDateRange,

    #[error("PAID EVENTS MUST HAVE TICKET PRICE > 0")]
    InvalidPricing,

    #[error("No Event")]
    NoSuchEvent(EventId),

    #[error("EVENT HAS ENDED")]
    EventEnded,

    #[error("REGISTRATION CLOSED")]
    RegistrationClosed,

    #[error("ALREADY REGISTERED")]
    AlreadyRegistered,

    #[error("INSUFFICIENT PAYMENT")]
    InsufficientPayment,

    #[error("ONLY ORGANIZER CAN VERIFY")]
    Unauthorized,

    #[error("TICKET NOT FOUND")]
    TicketNotFound,

    #[error("TICKET SERIES ALREADY CREATED")]
    SeriesAlreadyInitialized,

    #[error("storage error: {0}")]
    Storage(String),
}
