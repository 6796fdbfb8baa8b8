//! # Error Handling
//!
//! Error types for Clubhouse Core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                      │
//! │  │                                                                      │
//! │  ├── Lifecycle Errors                                                   │
//! │  │   ├── NotInitialized        - Registry not initialized               │
//! │  │   └── AlreadyInitialized    - Registry initialized twice             │
//! │  │                                                                      │
//! │  ├── Validation Errors                                                  │
//! │  │   ├── InvalidName           - Empty name at creation                 │
//! │  │   └── InvalidFee            - Creation fee is not the exact amount   │
//! │  │                                                                      │
//! │  ├── Authorization Errors                                               │
//! │  │   └── NotAuthorized         - Caller fails the required predicate    │
//! │  │                                                                      │
//! │  ├── Not-Found Errors                                                   │
//! │  │   ├── ClubNotFound          - No club at index / id                  │
//! │  │   ├── ChannelNotFound       - Channel index out of bounds            │
//! │  │   ├── MessageNotFound       - Message index out of bounds            │
//! │  │   └── AdminNotFound         - Admin absent from the set              │
//! │  │                                                                      │
//! │  └── State-Conflict Errors                                              │
//! │      ├── AlreadyAdmin          - Admin already in the set               │
//! │      ├── AlreadyDeleted        - Message deleted twice                  │
//! │      └── LastAdministrator     - Registry admin set must stay non-empty │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error aborts the whole operation with zero partial state change.
//! Conflict errors exist because duplicate attempts must fail loudly rather
//! than succeed silently, so callers can detect stale assumptions.

use thiserror::Error;

/// Result type alias for Clubhouse Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Clubhouse Core
///
/// All errors are categorized by taxonomy to make error handling clearer and
/// to provide meaningful error messages to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Lifecycle Errors (100-199)
    // ========================================================================

    /// The registry has not been initialized
    #[error("Registry has not been initialized. Call initialize() first.")]
    NotInitialized,

    /// The registry has already been initialized
    #[error("Registry has already been initialized.")]
    AlreadyInitialized,

    // ========================================================================
    // Validation Errors (200-299)
    // ========================================================================

    /// A required name was empty at creation time
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// The supplied creation fee does not exactly match the required amount
    #[error("Invalid fee: expected exactly {expected}, got {supplied}")]
    InvalidFee {
        /// The exact amount the fee configuration requires
        expected: u64,
        /// What the caller supplied (0 when no fee was supplied at all)
        supplied: u64,
    },

    // ========================================================================
    // Authorization Errors (300-399)
    // ========================================================================

    /// Caller identity does not satisfy the required predicate.
    ///
    /// Deliberately carries no detail beyond the denial.
    #[error("Not authorized.")]
    NotAuthorized,

    // ========================================================================
    // Not-Found Errors (400-499)
    // ========================================================================

    /// No club exists at the given index or identifier
    #[error("Club not found.")]
    ClubNotFound,

    /// Channel index is out of bounds for the club
    #[error("Channel not found.")]
    ChannelNotFound,

    /// Message index is out of bounds for the channel
    #[error("Message not found.")]
    MessageNotFound,

    /// The address is not in the admin set
    #[error("Admin not found.")]
    AdminNotFound,

    // ========================================================================
    // State-Conflict Errors (500-599)
    // ========================================================================

    /// The address is already in the admin set
    #[error("Address is already an admin.")]
    AlreadyAdmin,

    /// The message has already been deleted
    #[error("Message has already been deleted.")]
    AlreadyDeleted,

    /// Removing this administrator would empty the registry admin set
    #[error("Cannot remove the last registry administrator.")]
    LastAdministrator,
}

impl Error {
    /// Get the numeric error code
    ///
    /// Error codes are organized by category:
    /// - 100-199: Lifecycle
    /// - 200-299: Validation
    /// - 300-399: Authorization
    /// - 400-499: Not found
    /// - 500-599: State conflict
    pub fn code(&self) -> i32 {
        match self {
            // Lifecycle (100-199)
            Error::NotInitialized => 100,
            Error::AlreadyInitialized => 101,

            // Validation (200-299)
            Error::InvalidName(_) => 200,
            Error::InvalidFee { .. } => 201,

            // Authorization (300-399)
            Error::NotAuthorized => 300,

            // Not found (400-499)
            Error::ClubNotFound => 400,
            Error::ChannelNotFound => 401,
            Error::MessageNotFound => 402,
            Error::AdminNotFound => 403,

            // Conflict (500-599)
            Error::AlreadyAdmin => 500,
            Error::AlreadyDeleted => 501,
            Error::LastAdministrator => 502,
        }
    }

    /// Check if this is a not-found error
    ///
    /// Callers may re-query fresh state and retry with corrected input.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ClubNotFound
                | Error::ChannelNotFound
                | Error::MessageNotFound
                | Error::AdminNotFound
        )
    }

    /// Check if this is a state-conflict error
    ///
    /// A conflict means the caller acted on a stale view of the state.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Error::AlreadyAdmin | Error::AlreadyDeleted | Error::LastAdministrator
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
