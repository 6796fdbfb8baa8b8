//! # Club Model
//!
//! The entity structs: [`Club`], [`Channel`], and [`Message`]. Positions
//! within the channel and message sequences are stable: once assigned, an
//! entity's position never changes — deletion is a soft flag, never a
//! compaction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ident::ClubId;

/// A single posted item in a channel's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Address of the caller that posted it. Immutable.
    pub sender: String,
    /// Milliseconds since epoch, captured from the clock at posting. Immutable.
    pub timestamp_ms: i64,
    /// Message body. Cleared to empty by deletion, otherwise immutable.
    pub content: Vec<u8>,
    /// Soft-delete flag. One-way: there is no undelete.
    pub deleted: bool,
}

impl Message {
    pub(crate) fn new(sender: &str, timestamp_ms: i64, content: &[u8]) -> Self {
        Self {
            sender: sender.to_string(),
            timestamp_ms,
            content: content.to_vec(),
            deleted: false,
        }
    }
}

/// A named sub-container of a club holding an ordered message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name. Mutable via rename.
    pub name: String,
    /// Soft-delete flag. The slot and message log remain addressable.
    pub deleted: bool,
    /// Append-only message log, addressed by position.
    pub messages: Vec<Message>,
}

impl Channel {
    /// A live channel with an empty message log.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            deleted: false,
            messages: Vec::new(),
        }
    }
}

/// A community entity with metadata, an admin set, and channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Sequence number assigned at creation. Immutable copy of the
    /// registry key.
    pub index: u64,
    /// Globally unique identifier assigned at creation. Immutable.
    pub id: ClubId,
    /// Address of the creating caller. Immutable; always authorized to
    /// manage, independent of the admin set.
    pub creator: String,
    /// Addresses granted elevated rights. Creator-only mutation.
    pub admins: HashSet<String>,
    /// Club name.
    pub name: String,
    /// Club logo.
    pub logo: String,
    /// Club description.
    pub description: String,
    /// Club announcement.
    pub announcement: String,
    /// Type tag captured at creation. Immutable; used only for indexing.
    pub type_tag: String,
    /// Membership threshold. No semantic meaning at this layer.
    pub threshold: u64,
    /// Append-only channel sequence, addressed by position.
    pub channels: Vec<Channel>,
}

impl Club {
    /// A fresh club with an empty admin set and one live default channel.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: u64,
        id: ClubId,
        creator: &str,
        type_tag: &str,
        name: &str,
        logo: &str,
        description: &str,
        announcement: &str,
        threshold: u64,
        default_channel_name: &str,
    ) -> Self {
        Self {
            index,
            id,
            creator: creator.to_string(),
            admins: HashSet::new(),
            name: name.to_string(),
            logo: logo.to_string(),
            description: description.to_string(),
            announcement: announcement.to_string(),
            type_tag: type_tag.to_string(),
            threshold,
            channels: vec![Channel::new(default_channel_name)],
        }
    }

    /// Borrow the channel at `index`, ignoring its soft-delete flag.
    pub fn channel(&self, index: u64) -> Option<&Channel> {
        self.channels.get(index as usize)
    }

    pub(crate) fn channel_mut(&mut self, index: u64) -> Option<&mut Channel> {
        self.channels.get_mut(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_club_has_one_live_default_channel() {
        let club = Club::new(
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
        assert!(club.admins.is_empty());
        assert_eq!(club.channels.len(), 1);
        let channel = club.channel(0).unwrap();
        assert_eq!(channel.name, "general");
        assert!(!channel.deleted);
        assert!(channel.messages.is_empty());
        assert!(club.channel(1).is_none());
    }
}
