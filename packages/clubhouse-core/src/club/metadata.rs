//! # Club Metadata
//!
//! Field updates gated on the manage predicate. Updates replace the field
//! unconditionally: only creation validates non-empty names, so an update
//! may set any field to the empty string.

use crate::error::Result;

use super::policy::ensure_manage;

impl super::ClubService {
    /// Update the club name.
    pub fn update_name(&self, club_id: &str, name: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            club.name = name.to_string();
            Ok(())
        })
    }

    /// Update the club logo.
    pub fn update_logo(&self, club_id: &str, logo: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            club.logo = logo.to_string();
            Ok(())
        })
    }

    /// Update the club description.
    pub fn update_description(&self, club_id: &str, description: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            club.description = description.to_string();
            Ok(())
        })
    }

    /// Update the club announcement.
    pub fn update_announcement(&self, club_id: &str, announcement: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            club.announcement = announcement.to_string();
            Ok(())
        })
    }

    /// Update the membership threshold.
    pub fn update_threshold(&self, club_id: &str, threshold: u64, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            club.threshold = threshold;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::service::tests::{params, service};
    use crate::error::Error;

    #[test]
    fn test_creator_and_admin_update_fields() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        service.add_admin(&club.id, "did:bob", "did:alice").unwrap();

        service.update_name(&club.id, "new name", "did:alice").unwrap();
        service.update_logo(&club.id, "logo.png", "did:bob").unwrap();
        service.update_description(&club.id, "about", "did:bob").unwrap();
        service.update_announcement(&club.id, "news", "did:alice").unwrap();
        service.update_threshold(&club.id, 42, "did:bob").unwrap();

        let snapshot = service.club(&club.id).unwrap();
        assert_eq!(snapshot.name, "new name");
        assert_eq!(snapshot.logo, "logo.png");
        assert_eq!(snapshot.description, "about");
        assert_eq!(snapshot.announcement, "news");
        assert_eq!(snapshot.threshold, 42);
    }

    #[test]
    fn test_updates_may_clear_fields() {
        // Asymmetric with creation on purpose: only creation validates names.
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        service.update_name(&club.id, "", "did:alice").unwrap();
        assert_eq!(service.club(&club.id).unwrap().name, "");
    }

    #[test]
    fn test_strangers_are_denied() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();

        assert_eq!(
            service.update_name(&club.id, "x", "did:mallory"),
            Err(Error::NotAuthorized)
        );
        assert_eq!(
            service.update_threshold(&club.id, 7, "did:mallory"),
            Err(Error::NotAuthorized)
        );
        let snapshot = service.club(&club.id).unwrap();
        assert_eq!(snapshot.name, "club");
        assert_eq!(snapshot.threshold, 1);
    }
}
