//! # Authorization Policy
//!
//! Pure predicates consulted by every mutating club operation.
//!
//! Two tiers:
//! - **Manage**: the creator or any admin. Gates metadata and channel
//!   mutations.
//! - **Creator-only**: gates admin-set mutation — admins cannot promote or
//!   demote other admins.
//!
//! Posting a message has no authorization gate at all; deleting one is
//! gated on the original sender (checked in `messages.rs`, not here).

use crate::club::Club;
use crate::error::{Error, Result};

/// Whether `caller` may manage the club: the creator, or a member of the
/// admin set. The creator's authority does not depend on admin membership.
pub fn can_manage(club: &Club, caller: &str) -> bool {
    club.creator == caller || club.admins.contains(caller)
}

/// Fail `NotAuthorized` unless `caller` may manage the club.
pub(crate) fn ensure_manage(club: &Club, caller: &str) -> Result<()> {
    if can_manage(club, caller) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

/// Fail `NotAuthorized` unless `caller` is the club's creator.
pub(crate) fn ensure_creator(club: &Club, caller: &str) -> Result<()> {
    if club.creator == caller {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club() -> Club {
        let mut club = Club::new(
            0,
            "club-0".into(),
            "did:alice",
            "gaming",
            "Rustaceans",
            "",
            "",
            "",
            1,
            "general",
        );
        club.admins.insert("did:bob".into());
        club
    }

    #[test]
    fn test_creator_and_admins_can_manage() {
        let club = club();
        assert!(can_manage(&club, "did:alice"));
        assert!(can_manage(&club, "did:bob"));
        assert!(!can_manage(&club, "did:carol"));
    }

    #[test]
    fn test_creator_only_tier_excludes_admins() {
        let club = club();
        assert!(ensure_creator(&club, "did:alice").is_ok());
        assert_eq!(ensure_creator(&club, "did:bob"), Err(Error::NotAuthorized));
        assert_eq!(ensure_creator(&club, "did:carol"), Err(Error::NotAuthorized));
    }
}
