//! Handlers for review threads and comments within a room.
//!
//! Every mutation publishes a [`RoomEvent`] so the WebSocket layer can
//! push a fresh thread snapshot to the room's members. Deletion requires
//! no server-side confirmation; the interactive confirm dialog is a
//! client concern and a declined confirm simply never reaches us.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use framenote_core::error::CoreError;
use framenote_core::room::validate_room_id;
use framenote_core::types::DbId;
use framenote_db::models::thread::{CreateComment, CreateThread};
use framenote_db::repositories::{ThreadRepo, VideoRepo};
use framenote_events::{RoomEvent, RoomEventKind};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a room id is well-formed and backed by a video.
pub async fn ensure_room_exists(pool: &sqlx::PgPool, room_id: &str) -> AppResult<()> {
    validate_room_id(room_id).map_err(AppError::Core)?;
    VideoRepo::find_by_room_id(pool, room_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Room",
                key: room_id.to_string(),
            })
        })?;
    Ok(())
}

/// Reject anchors the timeline could never place.
fn validate_anchor(timestamp_secs: Option<f64>) -> AppResult<()> {
    if let Some(t) = timestamp_secs {
        if !t.is_finite() || t < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "timestamp_secs must be a non-negative finite number".into(),
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /rooms/{room_id}/threads
///
/// The full room snapshot: every thread with its ordered comments, in
/// insertion order. Clients derive the sorted timeline and bubble
/// projection from this.
pub async fn list_threads(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_room_exists(&state.pool, &room_id).await?;
    let threads = ThreadRepo::list_for_room(&state.pool, &room_id).await?;
    Ok(Json(DataResponse { data: threads }))
}

/// POST /rooms/{room_id}/threads
///
/// Create a thread anchored at the composer's playback time, with its
/// first comment.
pub async fn create_thread(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(input): Json<CreateThread>,
) -> AppResult<impl IntoResponse> {
    ensure_room_exists(&state.pool, &room_id).await?;
    input.validate()?;
    validate_anchor(input.timestamp_secs)?;

    let thread = ThreadRepo::create(&state.pool, &room_id, &input).await?;

    state.event_bus.publish(RoomEvent::new(
        &room_id,
        RoomEventKind::ThreadCreated,
        thread.thread.id,
    ));

    tracing::info!(
        room_id = %room_id,
        thread_id = thread.thread.id,
        timestamp_secs = ?thread.thread.timestamp_secs,
        "Thread created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: thread })))
}

/// DELETE /rooms/{room_id}/threads/{thread_id}
///
/// Delete a thread and, via cascade, its comments.
pub async fn delete_thread(
    State(state): State<AppState>,
    Path((room_id, thread_id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    ensure_room_exists(&state.pool, &room_id).await?;

    let removed = ThreadRepo::delete_in_room(&state.pool, &room_id, thread_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Thread",
            id: thread_id,
        }));
    }

    state.event_bus.publish(RoomEvent::new(
        &room_id,
        RoomEventKind::ThreadDeleted,
        thread_id,
    ));

    tracing::info!(room_id = %room_id, thread_id, "Thread deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /rooms/{room_id}/threads/{thread_id}/comments
///
/// Append a comment to an existing thread.
pub async fn add_comment(
    State(state): State<AppState>,
    Path((room_id, thread_id)): Path<(String, DbId)>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    ensure_room_exists(&state.pool, &room_id).await?;
    input.validate()?;

    ThreadRepo::find_in_room(&state.pool, &room_id, thread_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Thread",
            id: thread_id,
        }))?;

    let comment = ThreadRepo::add_comment(&state.pool, thread_id, &input).await?;

    state.event_bus.publish(RoomEvent::new(
        &room_id,
        RoomEventKind::CommentAdded,
        thread_id,
    ));

    tracing::info!(room_id = %room_id, thread_id, comment_id = comment.id, "Comment added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
