//! # In-Memory Store
//!
//! The store provides the isolation the execution substrate guarantees:
//! every top-level operation runs against a consistent snapshot of the
//! entities it touches and either commits all of its writes or none.
//!
//! ## Locking Discipline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LOCKING DISCIPLINE                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌───────────────────┐        ┌──────────────────────────────────────┐  │
//! │  │ RwLock<Registry>  │        │ RwLock<HashMap<ClubId,               │  │
//! │  │                   │        │        Arc<Mutex<Club>>>>            │  │
//! │  │ Serializes all    │        │                                      │  │
//! │  │ registry writes   │        │ Map lock held only to fetch the      │  │
//! │  └───────────────────┘        │ per-club handle; the club's own      │  │
//! │                               │ Mutex serializes its operations      │  │
//! │  Lock order: registry before  └──────────────────────────────────────┘  │
//! │  club map (club creation is                                             │
//! │  the only path taking both)                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations on distinct clubs run in parallel. Operations on the same club
//! serialize on its Mutex, so two concurrent channel additions both survive.
//! Mutating closures check every precondition before touching state, so a
//! failure leaves the entity untouched.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::club::Club;
use crate::error::{Error, Result};
use crate::ident::ClubId;
use crate::registry::Registry;

/// In-memory store holding the registry and every club.
#[derive(Default)]
pub struct ClubStore {
    /// `None` until `initialize` runs.
    registry: RwLock<Option<Registry>>,
    /// One lock per club so distinct clubs never contend.
    clubs: RwLock<HashMap<ClubId, Arc<Mutex<Club>>>>,
}

impl ClubStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry, seeded with the caller as sole administrator.
    ///
    /// Runs exactly once per store lifetime; a second call fails
    /// `AlreadyInitialized`.
    pub fn initialize(&self, caller: &str, track_owners: bool) -> Result<()> {
        let mut registry = self.registry.write();
        if registry.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        *registry = Some(Registry::new(caller, track_owners));
        tracing::info!(administrator = %caller, track_owners, "registry initialized");
        Ok(())
    }

    /// Whether `initialize` has run.
    pub fn is_initialized(&self) -> bool {
        self.registry.read().is_some()
    }

    // ── Registry access ─────────────────────────────────────────────────

    /// Run a read-only closure against the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&Registry) -> R) -> Result<R> {
        let registry = self.registry.read();
        let registry = registry.as_ref().ok_or(Error::NotInitialized)?;
        Ok(f(registry))
    }

    /// Run a mutating closure against the registry. An `Err` from the
    /// closure must leave the registry untouched.
    pub fn with_registry_mut<R>(&self, f: impl FnOnce(&mut Registry) -> Result<R>) -> Result<R> {
        let mut registry = self.registry.write();
        let registry = registry.as_mut().ok_or(Error::NotInitialized)?;
        f(registry)
    }

    // ── Club access ─────────────────────────────────────────────────────

    /// Register a club and insert it into the store as one atomic step.
    ///
    /// The registry write lock is held across both the index assignment and
    /// the map insertion, so a sequence number is never observable before
    /// its club is addressable.
    pub(crate) fn create_club_entry(
        &self,
        type_tag: &str,
        id: &ClubId,
        creator: &str,
        build: impl FnOnce(u64) -> Club,
    ) -> Result<u64> {
        let mut registry = self.registry.write();
        let registry = registry.as_mut().ok_or(Error::NotInitialized)?;
        let index = registry.register_club(type_tag, id, creator);
        let club = build(index);
        self.clubs
            .write()
            .insert(id.clone(), Arc::new(Mutex::new(club)));
        Ok(index)
    }

    /// Fetch the lock handle for a club.
    fn club_handle(&self, id: &str) -> Result<Arc<Mutex<Club>>> {
        self.clubs.read().get(id).cloned().ok_or(Error::ClubNotFound)
    }

    /// Run a read-only closure against a club.
    pub fn with_club<R>(&self, id: &str, f: impl FnOnce(&Club) -> R) -> Result<R> {
        let handle = self.club_handle(id)?;
        let club = handle.lock();
        Ok(f(&club))
    }

    /// Run a mutating closure against a club. An `Err` from the closure
    /// must leave the club untouched.
    pub fn with_club_mut<R>(&self, id: &str, f: impl FnOnce(&mut Club) -> Result<R>) -> Result<R> {
        let handle = self.club_handle(id)?;
        let mut club = handle.lock();
        f(&mut club)
    }
}
