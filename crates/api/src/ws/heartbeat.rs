use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::RoomRegistry;

/// Spawn a background task that sends periodic Ping frames to every socket
/// joined to a review room.
///
/// The interval comes from `ServerConfig::ws_heartbeat_secs` so deployments
/// can tune it alongside the other timeouts. Idle ticks (no rooms occupied)
/// skip the registry walk entirely. The task runs until aborted via the
/// returned `JoinHandle` during shutdown.
pub fn start_heartbeat(rooms: Arc<RoomRegistry>, interval_secs: u64) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

        loop {
            interval.tick().await;
            let count = rooms.connection_count().await;
            if count == 0 {
                continue;
            }
            tracing::debug!(count, "Pinging review room connections");
            rooms.ping_all().await;
        }
    })
}
