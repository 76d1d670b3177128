use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::FileStore;
use crate::ws::RoomRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: framenote_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploaded-file storage.
    pub file_store: Arc<FileStore>,
    /// Per-room WebSocket connection registry.
    pub rooms: Arc<RoomRegistry>,
    /// Event bus carrying room mutations to the snapshot fan-out task.
    pub event_bus: Arc<framenote_events::EventBus>,
}
