//! # Creation Events
//!
//! A structured notification is emitted exactly once per club creation. The
//! core constructs the payload — a read-only snapshot of the club at birth —
//! and hands it to an [`EventSink`] owned by the embedding environment.
//! Delivery, fan-out, and persistence are collaborator concerns.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::ident::ClubId;

/// Snapshot payload emitted when a club is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubCreatedEvent {
    /// Dense sequence number assigned by the registry
    pub index: u64,
    /// The new club's identifier
    pub id: ClubId,
    /// Address of the creating caller
    pub creator: String,
    /// Admin set at creation (always empty)
    pub admins: Vec<String>,
    /// Club name
    pub name: String,
    /// Club logo
    pub logo: String,
    /// Club description
    pub description: String,
    /// Club announcement
    pub announcement: String,
    /// Type tag the club was created under
    pub type_tag: String,
    /// Membership threshold
    pub threshold: u64,
    /// Channel names at creation (the default channel only)
    pub channels: Vec<String>,
}

/// Receives club creation events.
pub trait EventSink: Send + Sync {
    /// Called once per successful club creation, after the registry and
    /// store have been updated.
    fn club_created(&self, event: &ClubCreatedEvent);
}

/// Default sink: logs the event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn club_created(&self, event: &ClubCreatedEvent) {
        tracing::info!(
            index = event.index,
            id = %event.id,
            creator = %event.creator,
            type_tag = %event.type_tag,
            name = %event.name,
            "club created"
        );
    }
}

/// Collecting sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ClubCreatedEvent>>,
}

impl MemorySink {
    /// All events received so far, in emission order.
    pub fn events(&self) -> Vec<ClubCreatedEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for MemorySink {
    fn club_created(&self, event: &ClubCreatedEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> ClubCreatedEvent {
        ClubCreatedEvent {
            index: 0,
            id: "club-0".into(),
            creator: "did:alice".into(),
            admins: vec![],
            name: "Rustaceans".into(),
            logo: String::new(),
            description: "crabs".into(),
            announcement: String::new(),
            type_tag: "gaming".into(),
            threshold: 1,
            channels: vec!["general".into()],
        }
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::default();
        let mut event = sample_event();
        sink.club_created(&event);
        event.index = 1;
        sink.club_created(&event);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].index, 0);
        assert_eq!(events[1].index, 1);
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(sample_event()).unwrap();
        for field in [
            "index",
            "id",
            "creator",
            "admins",
            "name",
            "logo",
            "description",
            "announcement",
            "type_tag",
            "threshold",
            "channels",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["channels"][0], "general");
        assert!(json["admins"].as_array().unwrap().is_empty());
    }
}
