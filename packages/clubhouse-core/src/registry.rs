//! # Club Registry
//!
//! Process-wide state created once at initialization: the registry
//! administrator set, a dense index of every club ever created, a per-type
//! index, and (fee variant) a per-owner index.
//!
//! ## Indexing Invariants
//!
//! - Club indices are strictly increasing and form a dense 0-based sequence
//!   with no gaps. The next index to assign equals the current size of the
//!   dense index; clubs are never removed, so indices are never reused.
//! - A club's type tag never changes after creation; the type index for that
//!   tag contains the club's identifier exactly once, in creation order.
//! - Type and owner slots are lazily created on first use.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ident::ClubId;

/// Process-wide registry of all clubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// Registry administrators. Non-empty; seeded with the initializer.
    administrators: HashSet<String>,
    /// Dense index: position = sequence number assigned at creation.
    club_index: Vec<ClubId>,
    /// Type tag → club identifiers created under that tag, in creation order.
    clubs_by_type: HashMap<String, Vec<ClubId>>,
    /// Creator address → club identifiers, in creation order. Fee variant only.
    clubs_by_owner: HashMap<String, Vec<ClubId>>,
    /// Whether the owner index is maintained.
    track_owners: bool,
}

impl Registry {
    /// Create the registry, seeded with the initializer's address.
    ///
    /// There is no prior authority, so no authorization check.
    pub fn new(initializer: &str, track_owners: bool) -> Self {
        let mut administrators = HashSet::new();
        administrators.insert(initializer.to_string());
        Self {
            administrators,
            club_index: Vec::new(),
            clubs_by_type: HashMap::new(),
            clubs_by_owner: HashMap::new(),
            track_owners,
        }
    }

    // ── Club bookkeeping ────────────────────────────────────────────────

    /// Record a newly created club and return its assigned sequence number.
    ///
    /// Pure bookkeeping, invoked internally by club creation; not exposed as
    /// a standalone boundary operation and therefore unauthorized.
    pub(crate) fn register_club(&mut self, type_tag: &str, club_id: &str, creator: &str) -> u64 {
        let index = self.club_index.len() as u64;
        self.club_index.push(club_id.to_string());
        self.clubs_by_type
            .entry(type_tag.to_string())
            .or_default()
            .push(club_id.to_string());
        if self.track_owners {
            self.clubs_by_owner
                .entry(creator.to_string())
                .or_default()
                .push(club_id.to_string());
        }
        index
    }

    /// The club identifier at sequence number `index`.
    pub fn lookup_by_index(&self, index: u64) -> Result<ClubId> {
        self.club_index
            .get(index as usize)
            .cloned()
            .ok_or(Error::ClubNotFound)
    }

    /// All club identifiers created under `tag`, in creation order.
    ///
    /// An absent tag yields an empty result, never an error.
    pub fn lookup_by_type(&self, tag: &str) -> Vec<ClubId> {
        self.clubs_by_type.get(tag).cloned().unwrap_or_default()
    }

    /// All club identifiers created by `owner`, in creation order.
    ///
    /// Same contract as [`lookup_by_type`](Self::lookup_by_type). Always
    /// empty when owner tracking is disabled.
    pub fn lookup_by_owner(&self, owner: &str) -> Vec<ClubId> {
        self.clubs_by_owner.get(owner).cloned().unwrap_or_default()
    }

    /// Number of clubs ever registered. Also the next sequence number.
    pub fn club_count(&self) -> u64 {
        self.club_index.len() as u64
    }

    // ── Registry administrators ─────────────────────────────────────────

    /// Whether `addr` is a registry administrator.
    pub fn is_administrator(&self, addr: &str) -> bool {
        self.administrators.contains(addr)
    }

    /// The current administrator set.
    pub fn administrators(&self) -> Vec<String> {
        self.administrators.iter().cloned().collect()
    }

    /// Add a registry administrator. Only existing administrators may do so.
    pub fn add_administrator(&mut self, caller: &str, addr: &str) -> Result<()> {
        if !self.is_administrator(caller) {
            return Err(Error::NotAuthorized);
        }
        if !self.administrators.insert(addr.to_string()) {
            return Err(Error::AlreadyAdmin);
        }
        Ok(())
    }

    /// Remove a registry administrator. The set must stay non-empty.
    pub fn remove_administrator(&mut self, caller: &str, addr: &str) -> Result<()> {
        if !self.is_administrator(caller) {
            return Err(Error::NotAuthorized);
        }
        if !self.administrators.contains(addr) {
            return Err(Error::AdminNotFound);
        }
        if self.administrators.len() == 1 {
            return Err(Error::LastAdministrator);
        }
        self.administrators.remove(addr);
        Ok(())
    }
}
