//! # Club Service
//!
//! Core service struct for club operations.
//!
//! The service coordinates the store, the configured variant, and the
//! external collaborators (identifier allocation, clock, event sink). All
//! operation families — admins, metadata, channels, messages — hang off
//! [`ClubService`] from their own files in this module.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::event::{ClubCreatedEvent, EventSink, TracingSink};
use crate::ident::{ClubId, IdAllocator, UuidAllocator};
use crate::store::ClubStore;
use crate::time::{Clock, SystemClock};

use super::types::Club;

/// The main club service — coordinates all club and registry operations.
pub struct ClubService {
    store: Arc<ClubStore>,
    config: ServiceConfig,
    ids: Arc<dyn IdAllocator>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventSink>,
}

/// Inputs to club creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClubParams {
    /// Runtime partitioning key for lookup. Carries no behavioral meaning.
    pub type_tag: String,
    /// Club name. Must be non-empty at creation.
    pub name: String,
    /// Club logo.
    pub logo: String,
    /// Club description.
    pub description: String,
    /// Club announcement.
    pub announcement: String,
    /// Membership threshold, interpreted by callers.
    pub threshold: u64,
    /// Name of the single default channel. Must be non-empty.
    pub default_channel_name: String,
}

/// The fee the core validated and the caller must forward. The core itself
/// moves no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeForward {
    /// Full fee amount, forwarded without change.
    pub amount: u64,
    /// Address credited with the fee.
    pub receiver: String,
}

/// Result of creating a new club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCreateResult {
    /// The new club's identifier
    pub id: ClubId,
    /// The assigned sequence number
    pub index: u64,
    /// The emitted creation event payload
    pub event: ClubCreatedEvent,
    /// Present in the fee variant: the transfer the caller must execute
    pub fee_forward: Option<FeeForward>,
}

impl ClubService {
    /// Create a service with the default collaborators: UUID identifiers,
    /// the system clock, and a tracing event sink.
    pub fn new(store: Arc<ClubStore>, config: ServiceConfig) -> Self {
        Self::with_collaborators(
            store,
            config,
            Arc::new(UuidAllocator),
            Arc::new(SystemClock),
            Arc::new(TracingSink),
        )
    }

    /// Create a service with explicit collaborators.
    pub fn with_collaborators(
        store: Arc<ClubStore>,
        config: ServiceConfig,
        ids: Arc<dyn IdAllocator>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            store,
            config,
            ids,
            clock,
            events,
        }
    }

    pub(crate) fn store(&self) -> &ClubStore {
        &self.store
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    /// The configuration this service runs under.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Initialize the registry with the caller as sole administrator.
    ///
    /// No authorization check: there is no prior authority.
    pub fn initialize(&self, caller: &str) -> Result<()> {
        self.store.initialize(caller, self.config.tracks_owners())
    }

    /// Create a club.
    ///
    /// Validates the club name and default channel name, checks the exact
    /// creation fee in the fee variant, assigns the next dense sequence
    /// number, stores the club with an empty admin set and one live default
    /// channel, and emits the creation event.
    pub fn create_club(
        &self,
        params: CreateClubParams,
        creator: &str,
        fee: Option<u64>,
    ) -> Result<ClubCreateResult> {
        if params.name.is_empty() {
            return Err(Error::InvalidName("club name cannot be empty".into()));
        }
        if params.default_channel_name.is_empty() {
            return Err(Error::InvalidName(
                "default channel name cannot be empty".into(),
            ));
        }

        // Fee variant: the supplied payment must exactly equal the configured
        // amount. No partial payments, no change returned.
        let fee_forward = match &self.config.fee {
            Some(fee_config) => {
                let supplied = fee.unwrap_or(0);
                if supplied != fee_config.amount {
                    return Err(Error::InvalidFee {
                        expected: fee_config.amount,
                        supplied,
                    });
                }
                Some(FeeForward {
                    amount: fee_config.amount,
                    receiver: fee_config.receiver.clone(),
                })
            }
            None => None,
        };

        let id = self.ids.allocate();
        let index = self
            .store
            .create_club_entry(&params.type_tag, &id, creator, |index| {
                Club::new(
                    index,
                    id.clone(),
                    creator,
                    &params.type_tag,
                    &params.name,
                    &params.logo,
                    &params.description,
                    &params.announcement,
                    params.threshold,
                    &params.default_channel_name,
                )
            })?;

        let event = ClubCreatedEvent {
            index,
            id: id.clone(),
            creator: creator.to_string(),
            admins: Vec::new(),
            name: params.name,
            logo: params.logo,
            description: params.description,
            announcement: params.announcement,
            type_tag: params.type_tag,
            threshold: params.threshold,
            channels: vec![params.default_channel_name],
        };
        self.events.club_created(&event);

        Ok(ClubCreateResult {
            id,
            index,
            event,
            fee_forward,
        })
    }

    // ── Lookups ─────────────────────────────────────────────────────────

    /// A point-in-time snapshot of a club.
    pub fn club(&self, id: &str) -> Result<Club> {
        self.store.with_club(id, |club| club.clone())
    }

    /// The club identifier at sequence number `index`.
    pub fn lookup_by_index(&self, index: u64) -> Result<ClubId> {
        self.store.with_registry(|r| r.lookup_by_index(index))?
    }

    /// All club identifiers created under `tag`, in creation order.
    pub fn lookup_by_type(&self, tag: &str) -> Result<Vec<ClubId>> {
        self.store.with_registry(|r| r.lookup_by_type(tag))
    }

    /// All club identifiers created by `owner`, in creation order.
    /// Always empty outside the fee variant.
    pub fn lookup_by_owner(&self, owner: &str) -> Result<Vec<ClubId>> {
        self.store.with_registry(|r| r.lookup_by_owner(owner))
    }

    /// Number of clubs ever created.
    pub fn club_count(&self) -> Result<u64> {
        self.store.with_registry(|r| r.club_count())
    }

    // ── Registry administrators ─────────────────────────────────────────

    /// The registry administrator set.
    pub fn registry_administrators(&self) -> Result<Vec<String>> {
        self.store.with_registry(|r| r.administrators())
    }

    /// Add a registry administrator (existing administrators only).
    pub fn add_registry_administrator(&self, caller: &str, addr: &str) -> Result<()> {
        self.store
            .with_registry_mut(|r| r.add_administrator(caller, addr))
    }

    /// Remove a registry administrator (existing administrators only; the
    /// set stays non-empty).
    pub fn remove_registry_administrator(&self, caller: &str, addr: &str) -> Result<()> {
        self.store
            .with_registry_mut(|r| r.remove_administrator(caller, addr))
    }
}

// ============================================================================
// TESTS
// ============================================================================
