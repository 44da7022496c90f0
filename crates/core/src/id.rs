//! Identifier generation.
//!
//! Identifiers are opaque strings. Production code uses random (v4) UUIDs;
//! tests can swap in [`SequentialIdGenerator`] for determinism.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces fresh, unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 128-bit identifiers (UUIDv4, hyphenated lowercase).
#[derive(Debug, Default, Copy, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` identifiers, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
