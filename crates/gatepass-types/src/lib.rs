//! Foundation types for the Gatepass event-and-ticketing ledger.
//!
//! This crate provides the identity, temporal, and value types used
//! throughout Gatepass. Every other Gatepass crate depends on
//! `gatepass-types`.
//!
//! # Key Types
//!
//! - [`ActorId`] — Opaque caller identity supplied by the external environment
//! - [`CallerContext`] — Explicit caller identity threaded through every operation
//! - [`EventId`] — Sequential event identifier, assigned at creation
//! - [`Timestamp`] — Caller-supplied wall-clock time in whole seconds
//! - [`Amount`] — Non-negative value amount for pricing and payments

pub mod amount;
pub mod error;
pub mod event;
pub mod identity;
pub mod temporal;

pub use amount::Amount;
pub use error::TypeError;
pub use event::EventId;
pub use identity::{ActorId, CallerContext};
pub use temporal::Timestamp;
