pub mod brand;
pub mod health;
pub mod room;
pub mod video;

use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /brands                                          list, create
/// /brands/{brand_id}                               get
/// /brands/{brand_id}/videos                        list, upload (multipart)
///
/// /videos/{video_id}/stream                        range-request streaming
///
/// /rooms/{room_id}/video                           video lookup by room key
/// /rooms/{room_id}/threads                         list, create
/// /rooms/{room_id}/threads/{thread_id}             delete
/// /rooms/{room_id}/threads/{thread_id}/comments    create
/// /rooms/{room_id}/mentions                        mention suggestions
///
/// /ws/rooms/{room_id}                              room WebSocket
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(brand::router(config))
        .nest("/videos", video::router())
        .nest("/rooms", room::router())
        .route("/ws/rooms/{room_id}", get(ws::room_ws_handler))
}
