//! # Admin Management
//!
//! Admin-set mutation uses the stricter creator-only predicate: admins
//! cannot promote or demote other admins, and the creator's own authority
//! never depends on membership in the set.

use crate::error::{Error, Result};

use super::policy::ensure_creator;

impl super::ClubService {
    /// Add an admin to a club (creator only).
    pub fn add_admin(&self, club_id: &str, admin: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_creator(club, caller)?;
            if club.admins.contains(admin) {
                return Err(Error::AlreadyAdmin);
            }
            club.admins.insert(admin.to_string());
            tracing::debug!(club = %club.id, admin = %admin, "admin added");
            Ok(())
        })
    }

    /// Remove an admin from a club (creator only).
    pub fn remove_admin(&self, club_id: &str, admin: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_creator(club, caller)?;
            if !club.admins.remove(admin) {
                return Err(Error::AdminNotFound);
            }
            tracing::debug!(club = %club.id, admin = %admin, "admin removed");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::service::tests::{params, service};
    use crate::error::Error;

    #[test]
    fn test_creator_manages_admin_set() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();

        service.add_admin(&club.id, "did:bob", "did:alice").unwrap();
        assert!(service.club(&club.id).unwrap().admins.contains("did:bob"));

        assert_eq!(
            service.add_admin(&club.id, "did:bob", "did:alice"),
            Err(Error::AlreadyAdmin)
        );

        service.remove_admin(&club.id, "did:bob", "did:alice").unwrap();
        assert!(service.club(&club.id).unwrap().admins.is_empty());

        assert_eq!(
            service.remove_admin(&club.id, "did:bob", "did:alice"),
            Err(Error::AdminNotFound)
        );
    }

    #[test]
    fn test_admins_cannot_mutate_the_admin_set() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        service.add_admin(&club.id, "did:bob", "did:alice").unwrap();

        // did:bob can update metadata but not promote or demote
        service.update_name(&club.id, "renamed", "did:bob").unwrap();
        assert_eq!(
            service.add_admin(&club.id, "did:carol", "did:bob"),
            Err(Error::NotAuthorized)
        );
        assert_eq!(
            service.remove_admin(&club.id, "did:bob", "did:bob"),
            Err(Error::NotAuthorized)
        );
        assert!(service.club(&club.id).unwrap().admins.contains("did:bob"));
    }

    #[test]
    fn test_unknown_club() {
        let (service, _) = service();
        assert_eq!(
            service.add_admin("missing", "did:bob", "did:alice"),
            Err(Error::ClubNotFound)
        );
    }
}
