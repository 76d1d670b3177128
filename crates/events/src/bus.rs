//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`RoomEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application.
//! Subscribers that only care which room changed can ignore the payload
//! entirely: every event is a cue to re-read the room's thread list and
//! recompute derived views from the fresh snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use framenote_core::types::DbId;

// ---------------------------------------------------------------------------
// RoomEvent
// ---------------------------------------------------------------------------

/// What changed in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomEventKind {
    ThreadCreated,
    ThreadDeleted,
    CommentAdded,
}

/// A mutation that occurred in one collaboration room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEvent {
    pub room_id: String,
    pub kind: RoomEventKind,
    pub thread_id: DbId,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl RoomEvent {
    pub fn new(room_id: impl Into<String>, kind: RoomEventKind, thread_id: DbId) -> Self {
        Self {
            room_id: room_id.into(),
            kind,
            thread_id,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`RoomEvent`]. Slow receivers
/// observe `RecvError::Lagged` when the buffer wraps; since every push
/// triggers a full snapshot re-read, a lagged receiver loses nothing it
/// cannot recover on the next event.
pub struct EventBus {
    sender: broadcast::Sender<RoomEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the database remains the source of truth either way.
    pub fn publish(&self, event: RoomEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<RoomEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
