//! Route definitions for video streaming.
//!
//! Mounted at `/videos`.

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{video_id}/stream", get(video::stream_video))
}
