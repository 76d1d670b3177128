//! Route definitions for collaboration rooms.
//!
//! Mounted at `/rooms`. Rooms are addressed by the `"{brand_id}-{uuid}"`
//! key derived at upload time.
//!
//! ```text
//! GET    /{room_id}/video                          video lookup
//! GET    /{room_id}/threads                        room snapshot
//! POST   /{room_id}/threads                        create thread
//! DELETE /{room_id}/threads/{thread_id}            delete thread
//! POST   /{room_id}/threads/{thread_id}/comments   append comment
//! GET    /{room_id}/mentions                       mention suggestions
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{mention, thread, video};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{room_id}/video", get(video::get_video_by_room))
        .route(
            "/{room_id}/threads",
            get(thread::list_threads).post(thread::create_thread),
        )
        .route(
            "/{room_id}/threads/{thread_id}",
            delete(thread::delete_thread),
        )
        .route(
            "/{room_id}/threads/{thread_id}/comments",
            post(thread::add_comment),
        )
        .route("/{room_id}/mentions", get(mention::suggest_mentions))
}
