//! Framenote room event infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`RoomEvent`] — the canonical room mutation envelope; every thread
//!   or comment change in a room publishes one, and the WebSocket layer
//!   reacts by pushing a fresh snapshot to the room's members.

pub mod bus;

pub use bus::{EventBus, RoomEvent, RoomEventKind};
