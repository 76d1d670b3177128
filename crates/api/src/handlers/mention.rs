//! Mention-suggestion handler.
//!
//! The reviewer list comes from configuration (`MENTION_USERS`) and is
//! filtered by the partial query, unlike the original deployment's stub
//! that returned a fixed list regardless of input.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use framenote_core::mentions;

use crate::error::AppResult;
use crate::handlers::thread::ensure_room_exists;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MentionParams {
    /// The text the user has typed after `@`, e.g. "mar".
    #[serde(default)]
    pub q: String,
}

/// GET /rooms/{room_id}/mentions?q=
///
/// Candidate reviewer identities matching the partial query.
pub async fn suggest_mentions(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Query(params): Query<MentionParams>,
) -> AppResult<impl IntoResponse> {
    ensure_room_exists(&state.pool, &room_id).await?;

    let suggestions: Vec<String> = mentions::suggest(&state.config.mention_users, &params.q)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(DataResponse { data: suggestions }))
}
