use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque caller identity for ledger operations.
///
/// An `ActorId` is a 32-byte value supplied by the external identity
/// source with each call. The ledger never interprets the bytes; it only
/// compares them. The same bytes always denote the same actor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId {
    bytes: [u8; 32],
}

impl ActorId {
    /// Create from a raw 32-byte value.
    pub fn from_raw(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Create an ephemeral (random) ActorId for tests and demos.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self { bytes }
    }

    /// The raw 32-byte value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("act:{}", hex::encode(&self.bytes[..4]))
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("act:").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { bytes: arr })
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.short_id())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}

/// Explicit caller context threaded through every mutating operation.
///
/// There is no ambient caller identity in Gatepass: authority comes only
/// from the context the external environment constructs for each call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    /// The identity submitting the operation.
    pub identity: ActorId,
}

impl CallerContext {
    /// Build a context for the given caller.
    pub fn new(identity: ActorId) -> Self {
        Self { identity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_ids_are_unique() {
        let id1 = ActorId::ephemeral();
        let id2 = ActorId::ephemeral();
        assert_ne!(id1, id2);
    }

    #[test]
    fn short_id_format() {
        let id = ActorId::from_raw([0; 32]);
        let short = id.short_id();
        assert!(short.starts_with("act:"));
        assert_eq!(short.len(), 12); // "act:" + 8 hex chars
    }

    #[test]
    fn hex_roundtrip() {
        let id = ActorId::from_raw([99; 32]);
        let hex = id.to_hex();
        let parsed = ActorId::from_hex(&hex).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn hex_roundtrip_with_prefix() {
        let id = ActorId::from_raw([99; 32]);
        let prefixed = format!("act:{}", id.to_hex());
        let parsed = ActorId::from_hex(&prefixed).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let error = ActorId::from_hex("abcd").unwrap_err();
        assert_eq!(
            error,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn serde_roundtrip() {
        let id = ActorId::from_raw([10; 32]);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ActorId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn ordering_is_consistent() {
        let id1 = ActorId::from_raw([0; 32]);
        let id2 = ActorId::from_raw([1; 32]);
        assert!(id1 < id2);
    }

    #[test]
    fn caller_context_carries_identity() {
        let id = ActorId::from_raw([7; 32]);
        let ctx = CallerContext::new(id);
        assert_eq!(ctx.identity, id);
    }
}
