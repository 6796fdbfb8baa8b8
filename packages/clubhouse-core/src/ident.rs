//! # Club Identifiers
//!
//! Club identifiers come from an immutable identity-generation primitive
//! owned by the embedding environment. The core only consumes it, through
//! the [`IdAllocator`] seam. The default allocator mints UUID v4 hex strings;
//! tests use [`SequentialAllocator`] for deterministic identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Globally unique club identifier.
pub type ClubId = String;

/// Produces globally unique identifiers for new clubs.
pub trait IdAllocator: Send + Sync {
    /// Allocate a fresh identifier. Never returns the same value twice.
    fn allocate(&self) -> ClubId;
}

/// UUID v4 backed allocator (default).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidAllocator;

impl IdAllocator for UuidAllocator {
    fn allocate(&self) -> ClubId {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic allocator for tests: `club-0`, `club-1`, ...
#[derive(Debug, Default)]
pub struct SequentialAllocator {
    next: AtomicU64,
}

impl IdAllocator for SequentialAllocator {
    fn allocate(&self) -> ClubId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("club-{}", n)
    }
}
