//! Framenote domain logic.
//!
//! This crate has zero internal dependencies so the API layer, WebSocket
//! handlers, and tests can all reference the same playback semantics,
//! timeline projection, and validation rules:
//!
//! - [`playback`] — the playback-surface state machine (play/pause, seek,
//!   skip, volume/mute, fullscreen).
//! - [`timeline`] — the canonical projection of a thread snapshot into
//!   progress-bar bubbles and a sorted timeline view.
//! - [`session`] — the review-session composition that owns the shared
//!   `current_time`/`duration` pair and funnels all seeks through one path.
//! - [`timecode`] — `M:SS` timecode formatting.
//! - [`room`] — room-id derivation and parsing.
//! - [`mentions`] — mention-suggestion matching.

pub mod error;
pub mod mentions;
pub mod playback;
pub mod room;
pub mod session;
pub mod timecode;
pub mod timeline;
pub mod types;

pub use error::CoreError;
pub use playback::{PlaybackState, Seek};
pub use session::ReviewSession;
pub use timeline::{CommentBubble, ThreadView, TimelineProjection};
