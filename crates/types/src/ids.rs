//! Newtype wrapper for pattern identifiers.
//!
//! Keeps pattern ids from being mixed up with the other string-shaped
//! values (breed ids, color keys) that flow through the compiler.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// The identifier of a compiled pattern aggregate.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(Arc<str>);

impl PatternId {
    /// Creates a new PatternId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh id from the current wall clock plus a process-local
    /// sequence number, so rapid recompiles within one millisecond still
    /// get distinct ids.
    pub fn generate() -> Self {
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self::new(format!(
            "pattern-{}-{}",
            Utc::now().timestamp_millis(),
            seq
        ))
    }

    /// Returns the string representation of this pattern ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PatternId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for PatternId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for PatternId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_id_creation() {
        let id1 = PatternId::new("pattern-1");
        let id2 = PatternId::from("pattern-1");

        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "pattern-1");
    }

    #[test]
    fn test_generated_ids_carry_prefix() {
        let id = PatternId::generate();
        assert!(id.as_str().starts_with("pattern-"));
    }

    #[test]
    fn test_generated_ids_are_unique_within_a_process() {
        assert_ne!(PatternId::generate(), PatternId::generate());
    }
}
