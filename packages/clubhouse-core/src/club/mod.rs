//! # Club Module
//!
//! Club operations: lifecycle, admin management, metadata, channels, and
//! the message log.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          CLUB MODULE                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
//! │  │  Service    │  │   Admins    │  │  Channels   │  │   Messages   │   │
//! │  │             │  │             │  │             │  │              │   │
//! │  │ - Create    │  │ - Add       │  │ - Add       │  │ - Post       │   │
//! │  │ - Lookups   │  │ - Remove    │  │ - Rename    │  │ - Delete     │   │
//! │  │ - Events    │  │ (creator-   │  │ - Soft del  │  │ (sender-     │   │
//! │  │ - Fee check │  │  only)      │  │             │  │  only del)   │   │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬───────┘   │
//! │         │                │                │                │           │
//! │  ┌──────┴──────┐  ┌──────┴──────┐                                      │
//! │  │  Metadata   │  │   Policy    │                                      │
//! │  │             │  │             │                                      │
//! │  │ - Name/Logo │  │ - canManage │                                      │
//! │  │ - Threshold │  │ - Creator   │                                      │
//! │  └─────────────┘  └─────────────┘                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admins;
mod channels;
mod messages;
mod metadata;
mod policy;
mod service;
mod types;

pub use policy::can_manage;
pub use service::{ClubCreateResult, ClubService, CreateClubParams, FeeForward};
pub use types::{Channel, Club, Message};
