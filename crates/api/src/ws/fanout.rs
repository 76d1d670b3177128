//! Event-to-snapshot fan-out.
//!
//! [`SnapshotFanout`] subscribes to the room event bus and, for each
//! mutation, re-reads the room's thread list and pushes the full
//! snapshot to every socket joined to that room. Consumers never see a
//! diff: each push carries the complete state, so out-of-order or
//! dropped events cost nothing beyond one extra recomputation.

use std::sync::Arc;

use axum::extract::ws::Message;
use serde::Serialize;
use tokio::sync::broadcast;

use framenote_db::models::thread::ThreadWithComments;
use framenote_db::repositories::ThreadRepo;
use framenote_db::DbPool;
use framenote_events::RoomEvent;

use crate::ws::RoomRegistry;

/// Wire envelope for a room snapshot push.
#[derive(Debug, Serialize)]
struct SnapshotPayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    room_id: &'a str,
    threads: &'a [ThreadWithComments],
}

/// Build the snapshot message for a room from the current database state.
pub(crate) async fn snapshot_message(
    pool: &DbPool,
    room_id: &str,
) -> Result<Message, Box<dyn std::error::Error + Send + Sync>> {
    let threads = ThreadRepo::list_for_room(pool, room_id).await?;
    let payload = SnapshotPayload {
        kind: "snapshot",
        room_id,
        threads: &threads,
    };
    Ok(Message::Text(serde_json::to_string(&payload)?.into()))
}

/// Pushes fresh room snapshots in response to room events.
pub struct SnapshotFanout {
    pool: DbPool,
    rooms: Arc<RoomRegistry>,
}

impl SnapshotFanout {
    pub fn new(pool: DbPool, rooms: Arc<RoomRegistry>) -> Self {
        Self { pool, rooms }
    }

    /// Run the fan-out loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each
    /// event. The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](framenote_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<RoomEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.push_snapshot(&event.room_id).await {
                        tracing::error!(
                            error = %e,
                            room_id = %event.room_id,
                            "Failed to push room snapshot"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Safe to skip: the next event triggers a full re-read.
                    tracing::warn!(skipped = n, "Snapshot fan-out lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, snapshot fan-out shutting down");
                    break;
                }
            }
        }
    }

    async fn push_snapshot(
        &self,
        room_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.rooms.room_member_count(room_id).await == 0 {
            return Ok(());
        }

        let message = snapshot_message(&self.pool, room_id).await?;
        let sent = self.rooms.send_to_room(room_id, message).await;
        tracing::debug!(room_id = %room_id, sent, "Room snapshot pushed");
        Ok(())
    }
}
