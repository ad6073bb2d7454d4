//! Event-and-ticketing ledger core for Gatepass.
//!
//! This crate is the heart of Gatepass. It provides:
//! - Event, ticket, and series records with creation invariants
//! - Registration gates: time, capacity, duplicate, payment
//! - Organizer-restricted attendance verification
//! - Notifications returned to the caller instead of published
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - `InMemoryLedger` implementation for tests and embedding
//! - Per-event summary projections
//!
//! Every operation is atomic: it commits its full set of state changes
//! and notifications, or (on any validation failure) commits nothing and
//! the caller's attached payment is not retained. The external
//! environment supplies the caller identity and the current time with
//! each call; the ledger holds no ambient authority and reads no clock.

pub mod attendance;
pub mod error;
pub mod memory;
pub mod notify;
pub mod projection;
pub mod records;
pub mod registry;
pub mod tickets;
pub mod traits;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use notify::{Committed, Notification};
pub use projection::EventSummary;
pub use records::{EventKind, EventProposal, EventRecord, TicketRecord, TicketSeries};
pub use registry::EventRegistry;
pub use tickets::TicketBook;
pub use traits::{LedgerReader, LedgerWriter};
