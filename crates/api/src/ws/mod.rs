//! WebSocket infrastructure for real-time room sync.
//!
//! Provides per-room connection management, heartbeat monitoring, the
//! snapshot fan-out task, and the HTTP upgrade handler used by Axum
//! routes.

mod fanout;
mod handler;
mod heartbeat;
pub mod manager;

pub use fanout::SnapshotFanout;
pub use handler::room_ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::RoomRegistry;
