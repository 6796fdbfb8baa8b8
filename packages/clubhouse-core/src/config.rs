//! # Service Configuration
//!
//! The two observed deployment variants differ only in whether club creation
//! requires an exact fixed payment forwarded to a fee receiver, and whether
//! an owner-based secondary index exists. Both are expressed as
//! configuration: a [`ServiceConfig`] with an optional [`FeeConfig`].
//! Owner indexing is enabled exactly when the fee configuration is present.

use serde::{Deserialize, Serialize};

/// The fixed club creation fee, in minor units.
pub const DEFAULT_CREATION_FEE: u64 = 1_000_000_000;

/// Fee settings for the fee variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Exact amount required to create a club. No partial payments,
    /// no change returned.
    pub amount: u64,
    /// Address credited with creation fees.
    pub receiver: String,
}

impl FeeConfig {
    /// Fee config with the standard creation fee.
    pub fn new(receiver: impl Into<String>) -> Self {
        Self {
            amount: DEFAULT_CREATION_FEE,
            receiver: receiver.into(),
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// `Some` enables the fee variant (exact fee + owner indexing),
    /// `None` the plain variant.
    pub fee: Option<FeeConfig>,
}

impl ServiceConfig {
    /// Configuration for the fee variant with the standard creation fee.
    pub fn with_fee(receiver: impl Into<String>) -> Self {
        Self {
            fee: Some(FeeConfig::new(receiver)),
        }
    }

    /// Whether clubs are also indexed by their creator.
    pub fn tracks_owners(&self) -> bool {
        self.fee.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_fee_variant() {
        let config = ServiceConfig::default();
        assert!(config.fee.is_none());
        assert!(!config.tracks_owners());
    }

    #[test]
    fn test_with_fee_uses_standard_amount() {
        let config = ServiceConfig::with_fee("did:treasury");
        let fee = config.fee.unwrap();
        assert_eq!(fee.amount, 1_000_000_000);
        assert_eq!(fee.receiver, "did:treasury");
    }
}
