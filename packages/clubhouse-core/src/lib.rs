//! # Clubhouse Core
//!
//! A club ("community") platform core: a process-wide registry of clubs,
//! each club owning an admin set, metadata, and an ordered list of channels
//! with append-only, soft-deletable message logs.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CLUBHOUSE CORE MODULES                            │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
//! │  │  Registry   │  │    Club     │  │   Channel   │  │   Message    │   │
//! │  │             │  │             │  │             │  │              │   │
//! │  │ - Admins    │  │ - Creator   │  │ - Name      │  │ - Sender     │   │
//! │  │ - Dense idx │  │ - Admin set │  │ - Soft del  │  │ - Timestamp  │   │
//! │  │ - By type   │  │ - Metadata  │  │ - Msg log   │  │ - Soft del   │   │
//! │  │ - By owner  │  │ - Channels  │  │             │  │              │   │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬───────┘   │
//! │         │                │                │                │           │
//! │         └────────────────┴────────────────┴────────────────┘           │
//! │                                   │                                     │
//! │  ┌─────────────┐  ┌─────────────┐ │ ┌─────────────────────────────────┐│
//! │  │   Policy    │  │    Store    │ │ │      External Collaborators     ││
//! │  │             │  │             │ │ │                                 ││
//! │  │ - canManage │  │ - Per-club  │◄┘ │ - IdAllocator (identity)        ││
//! │  │ - Creator-  │  │   locks     │   │ - Clock (timestamps)            ││
//! │  │   only ops  │  │ - Registry  │   │ - EventSink (creation events)   ││
//! │  └─────────────┘  └─────────────┘   └─────────────────────────────────┘│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`config`] - Service configuration (fee variant vs non-fee variant)
//! - [`time`] - Clock seam and timestamp helpers
//! - [`ident`] - Club identifier allocation
//! - [`event`] - Club creation event payload and sink
//! - [`registry`] - Process-wide club registry and its indexes
//! - [`store`] - In-memory store with per-club serialization
//! - [`club`] - Club operations (lifecycle, admins, channels, messages)
//!
//! ## Execution Model
//!
//! Every operation is synchronous and atomic: preconditions are checked and
//! writes applied under the owning entity's lock, so a failed precondition
//! leaves zero partial state. Operations on distinct clubs run in parallel;
//! operations on the same club (or the registry) serialize. There is no
//! retry, timeout, or cancellation inside the core — resubmission is the
//! caller's responsibility.
//!
//! ## Quick Start
//!
//! ```
//! use clubhouse_core::{ClubService, ClubStore, CreateClubParams, ServiceConfig};
//! use std::sync::Arc;
//!
//! let store = Arc::new(ClubStore::new());
//! let service = ClubService::new(store, ServiceConfig::default());
//! service.initialize("did:alice").unwrap();
//!
//! let created = service
//!     .create_club(
//!         CreateClubParams {
//!             type_tag: "gaming".into(),
//!             name: "Rustaceans".into(),
//!             logo: String::new(),
//!             description: "A club for crab enthusiasts".into(),
//!             announcement: String::new(),
//!             threshold: 1,
//!             default_channel_name: "general".into(),
//!         },
//!         "did:alice",
//!         None,
//!     )
//!     .unwrap();
//!
//! service.post_message(&created.id, 0, b"hello", "did:bob").unwrap();
//! ```

pub mod club;
pub mod config;
pub mod error;
pub mod event;
pub mod ident;
pub mod registry;
pub mod store;
pub mod time;

pub use club::{Channel, Club, ClubCreateResult, ClubService, CreateClubParams, FeeForward, Message};
pub use config::{FeeConfig, ServiceConfig, DEFAULT_CREATION_FEE};
pub use error::{Error, Result};
pub use event::{ClubCreatedEvent, EventSink, MemorySink, TracingSink};
pub use ident::{ClubId, IdAllocator, SequentialAllocator, UuidAllocator};
pub use registry::Registry;
pub use store::ClubStore;
pub use time::{Clock, FixedClock, SystemClock};
