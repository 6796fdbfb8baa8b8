//! # Message Log
//!
//! Append-only, position-addressed message logs. Posting has no
//! authorization gate beyond identifying the sender — anyone may post to
//! any in-bounds channel, soft-deleted or not. Deletion is sender-only and
//! one-way: it clears the content and sets the flag, and a second attempt
//! fails rather than silently succeeding.

use crate::error::{Error, Result};

use super::types::Message;

impl super::ClubService {
    /// Append a message to the channel at `channel_index`, stamping it with
    /// the trusted clock. Returns the message's position in the log.
    pub fn post_message(
        &self,
        club_id: &str,
        channel_index: u64,
        content: &[u8],
        sender: &str,
    ) -> Result<u64> {
        let timestamp_ms = self.clock().now_millis();
        self.store().with_club_mut(club_id, |club| {
            let channel = club
                .channel_mut(channel_index)
                .ok_or(Error::ChannelNotFound)?;
            channel
                .messages
                .push(Message::new(sender, timestamp_ms, content));
            Ok(channel.messages.len() as u64 - 1)
        })
    }

    /// Soft-delete a message: clear its content and set the flag.
    ///
    /// Only the original sender may delete — club admins have no override.
    /// Deleting twice fails `AlreadyDeleted`.
    pub fn delete_message(
        &self,
        club_id: &str,
        channel_index: u64,
        message_index: u64,
        caller: &str,
    ) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            let channel = club
                .channel_mut(channel_index)
                .ok_or(Error::ChannelNotFound)?;
            let message = channel
                .messages
                .get_mut(message_index as usize)
                .ok_or(Error::MessageNotFound)?;
            if message.sender != caller {
                return Err(Error::NotAuthorized);
            }
            if message.deleted {
                return Err(Error::AlreadyDeleted);
            }
            message.content.clear();
            message.deleted = true;
            Ok(())
        })
    }

    /// Snapshot of a channel's messages, in posting order.
    pub fn messages(&self, club_id: &str, channel_index: u64) -> Result<Vec<Message>> {
        self.store()
            .with_club(club_id, |club| {
                club.channel(channel_index).map(|c| c.messages.clone())
            })?
            .ok_or(Error::ChannelNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::super::service::tests::{params, service, T0};
    use crate::error::Error;

    #[test]
    fn test_messages_read_back_in_posting_order() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();

        for n in 0..5u64 {
            let position = service
                .post_message(&club.id, 0, format!("msg {}", n).as_bytes(), "did:bob")
                .unwrap();
            assert_eq!(position, n);
        }

        let messages = service.messages(&club.id, 0).unwrap();
        assert_eq!(messages.len(), 5);
        for (n, message) in messages.iter().enumerate() {
            assert_eq!(message.sender, "did:bob");
            assert_eq!(message.timestamp_ms, T0);
            assert_eq!(message.content, format!("msg {}", n).into_bytes());
            assert!(!message.deleted);
        }
    }

    #[test]
    fn test_anyone_may_post() {
        // Posting has no authorization gate; strangers fail manage ops but
        // may still post.
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();

        assert_eq!(
            service.update_name(&club.id, "x", "did:mallory"),
            Err(Error::NotAuthorized)
        );
        service
            .post_message(&club.id, 0, b"hello", "did:mallory")
            .unwrap();
        assert_eq!(service.messages(&club.id, 0).unwrap().len(), 1);
    }

    #[test]
    fn test_post_to_deleted_channel_allowed() {
        // Soft-deleted channels stay postable under the current rules.
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        service.delete_channel(&club.id, 0, "did:alice").unwrap();

        service.post_message(&club.id, 0, b"ghost", "did:bob").unwrap();
        let messages = service.messages(&club.id, 0).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, b"ghost");
    }

    #[test]
    fn test_post_bounds_checked() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        assert_eq!(
            service.post_message(&club.id, 1, b"x", "did:bob"),
            Err(Error::ChannelNotFound)
        );
        assert_eq!(service.messages(&club.id, 1), Err(Error::ChannelNotFound));
    }

    #[test]
    fn test_sender_only_deletion() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        service.add_admin(&club.id, "did:admin", "did:alice").unwrap();
        service.post_message(&club.id, 0, b"mine", "did:bob").unwrap();

        // Neither the creator nor an admin may delete someone else's message
        assert_eq!(
            service.delete_message(&club.id, 0, 0, "did:alice"),
            Err(Error::NotAuthorized)
        );
        assert_eq!(
            service.delete_message(&club.id, 0, 0, "did:admin"),
            Err(Error::NotAuthorized)
        );

        service.delete_message(&club.id, 0, 0, "did:bob").unwrap();
        let message = &service.messages(&club.id, 0).unwrap()[0];
        assert!(message.deleted);
        assert!(message.content.is_empty());
        assert_eq!(message.sender, "did:bob");
        assert_eq!(message.timestamp_ms, T0);
    }

    #[test]
    fn test_double_delete_fails_and_changes_nothing() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        service.post_message(&club.id, 0, b"once", "did:bob").unwrap();

        service.delete_message(&club.id, 0, 0, "did:bob").unwrap();
        assert_eq!(
            service.delete_message(&club.id, 0, 0, "did:bob"),
            Err(Error::AlreadyDeleted)
        );

        let message = &service.messages(&club.id, 0).unwrap()[0];
        assert!(message.deleted);
        assert!(message.content.is_empty());
    }

    #[test]
    fn test_delete_bounds_checked() {
        let (service, _) = service();
        let club = service.create_club(params("t", "club"), "did:alice", None).unwrap();
        assert_eq!(
            service.delete_message(&club.id, 1, 0, "did:bob"),
            Err(Error::ChannelNotFound)
        );
        assert_eq!(
            service.delete_message(&club.id, 0, 0, "did:bob"),
            Err(Error::MessageNotFound)
        );
    }
}
