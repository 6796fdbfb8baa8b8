//! # Channel Management
//!
//! Channels are append-only: a new channel takes the next position and
//! keeps it forever. Deletion is a soft flag — the slot and its message log
//! remain addressable by index, and the current rules do not re-check the
//! flag before further mutation, so a deleted channel can still be renamed
//! and posted to. Tests pin that behavior explicitly.

use crate::error::{Error, Result};

use super::policy::ensure_manage;
use super::types::Channel;

impl super::ClubService {
    /// Append a new live channel with an empty message log.
    ///
    /// No emptiness check on the name; only creation's default channel
    /// validates that.
    pub fn add_channel(&self, club_id: &str, name: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            club.channels.push(Channel::new(name));
            tracing::debug!(club = %club.id, channel = %name, "channel added");
            Ok(())
        })
    }

    /// Soft-delete the channel at `index`. Keeps the name and messages.
    pub fn delete_channel(&self, club_id: &str, index: u64, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            let channel = club.channel_mut(index).ok_or(Error::ChannelNotFound)?;
            channel.deleted = true;
            Ok(())
        })
    }

    /// Rename the channel at `index`. Does not check the soft-delete flag.
    pub fn rename_channel(&self, club_id: &str, index: u64, name: &str, caller: &str) -> Result<()> {
        self.store().with_club_mut(club_id, |club| {
            ensure_manage(club, caller)?;
            let channel = club.channel_mut(index).ok_or(Error::ChannelNotFound)?;
            channel.name = name.to_string();
            Ok(())
        })
    }

    /// Snapshot of all channels, in position order.
    pub fn channels(&self, club_id: &str) -> Result<Vec<Channel>> {
        self.store().with_club(club_id, |club| club.channels.clone())
    }

    /// Snapshot of the channel at `index`, ignoring its soft-delete flag.
    pub fn channel(&self, club_id: &str, index: u64) -> Result<Channel> {
        self.store()
            .with_club(club_id, |club| club.channel(index).cloned())?
            .ok_or(Error::ChannelNotFound)
    }
}
