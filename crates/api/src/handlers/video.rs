//! Handlers for videos: multipart upload under a brand, listing, lookup
//! by room key, and range-request streaming of the stored file.
//!
//! Upload is a two-step logical transaction: the file write must succeed
//! and yield a durable path before the video row is inserted. If the
//! insert fails, the stored file is removed again so no orphaned object
//! is left behind.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::header::{self, HeaderMap};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;
use uuid::Uuid;
use validator::Validate;

use framenote_core::error::CoreError;
use framenote_core::room::derive_room_id;
use framenote_core::types::DbId;
use framenote_db::models::video::CreateVideo;
use framenote_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::brand::ensure_brand_exists;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::content_type_for_extension;

/// Maximum read chunk size for streaming (1 MiB).
const MAX_CHUNK_SIZE: u64 = 1024 * 1024;

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

/// The two multipart fields the upload form sends.
struct UploadForm {
    name: String,
    filename: Option<String>,
    bytes: Vec<u8>,
}

async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut name: Option<String> = None;
    let mut filename: Option<String> = None;
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("name") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid 'name' field: {e}")))?;
                name = Some(value);
            }
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid 'file' field: {e}")))?;
                bytes = Some(data.to_vec());
            }
            _ => {
                // Unknown fields are ignored rather than rejected.
            }
        }
    }

    let name = name.ok_or_else(|| AppError::BadRequest("Missing 'name' field".into()))?;
    let bytes = bytes.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    Ok(UploadForm {
        name,
        filename,
        bytes,
    })
}

/// POST /brands/{brand_id}/videos
///
/// Multipart upload (`name` + `file`). Stores the file, derives the room
/// key `"{brand_id}-{file_uuid}"`, and registers the video row.
pub async fn upload_video(
    State(state): State<AppState>,
    Path(brand_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    ensure_brand_exists(&state.pool, brand_id).await?;

    let form = read_upload_form(multipart).await?;

    let file_id = Uuid::new_v4();
    let file_path = state
        .file_store
        .store(brand_id, file_id, form.filename.as_deref(), &form.bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("File write failed: {e}")))?;

    let input = CreateVideo {
        name: form.name,
        file_path: file_path.clone(),
        room_id: derive_room_id(brand_id, file_id),
    };
    if let Err(e) = input.validate() {
        // The file is already durable; clean it up before rejecting.
        discard_stored_file(&state, &file_path).await;
        return Err(e.into());
    }

    let video = match VideoRepo::create(&state.pool, brand_id, &input).await {
        Ok(video) => video,
        Err(e) => {
            discard_stored_file(&state, &file_path).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        brand_id,
        video_id = video.id,
        room_id = %video.room_id,
        "Video uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// Compensating cleanup for the upload transaction.
async fn discard_stored_file(state: &AppState, file_path: &str) {
    if let Err(e) = state.file_store.remove(file_path).await {
        tracing::warn!(file_path, error = %e, "Failed to remove orphaned upload");
    }
}

// ---------------------------------------------------------------------------
// Listing / lookup
// ---------------------------------------------------------------------------

/// GET /brands/{brand_id}/videos
///
/// List a brand's videos, most recent first.
pub async fn list_videos(
    State(state): State<AppState>,
    Path(brand_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_brand_exists(&state.pool, brand_id).await?;
    let videos = VideoRepo::list_for_brand(&state.pool, brand_id).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// GET /rooms/{room_id}/video
///
/// Look up the video a review room belongs to.
pub async fn get_video_by_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    framenote_core::room::validate_room_id(&room_id).map_err(AppError::Core)?;

    let video = VideoRepo::find_by_room_id(&state.pool, &room_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Room",
                key: room_id.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: video }))
}

// ---------------------------------------------------------------------------
// Streaming
// ---------------------------------------------------------------------------

/// Parse a `Range: bytes=START-END` header value.
/// Returns `(start, optional_end)`.
fn parse_range_header(range: &str) -> Option<(u64, Option<u64>)> {
    let range = range.strip_prefix("bytes=")?;
    let parts: Vec<&str> = range.splitn(2, '-').collect();
    if parts.len() != 2 {
        return None;
    }
    let start = parts[0].parse::<u64>().ok()?;
    let end = if parts[1].is_empty() {
        None
    } else {
        Some(parts[1].parse::<u64>().ok()?)
    };
    Some((start, end))
}

/// GET /videos/{video_id}/stream
///
/// Streams the stored video file with HTTP range request support.
pub async fn stream_video(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let video = VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    let path = state.file_store.absolute(&video.file_path);
    if !path.exists() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "VideoFile",
            id: video_id,
        }));
    }

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let file_size = metadata.len();
    let content_type = content_type_for_extension(&video.file_path);

    // Check for Range header.
    if let Some(range_value) = headers.get(header::RANGE) {
        let range_str = range_value
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Range header".into()))?;

        if let Some((start, end)) = parse_range_header(range_str) {
            // Bounds-check before any arithmetic: `start` is
            // client-controlled and may be up to u64::MAX.
            if file_size == 0 || start >= file_size {
                return Ok(Response::builder()
                    .status(StatusCode::RANGE_NOT_SATISFIABLE)
                    .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
                    .body(Body::empty())
                    .unwrap());
            }

            let end = end
                .map(|e| e.min(file_size - 1))
                .unwrap_or_else(|| start.saturating_add(MAX_CHUNK_SIZE - 1).min(file_size - 1));

            if start > end {
                return Ok(Response::builder()
                    .status(StatusCode::RANGE_NOT_SATISFIABLE)
                    .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
                    .body(Body::empty())
                    .unwrap());
            }

            let length = end - start + 1;

            let mut file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
            file.seek(std::io::SeekFrom::Start(start))
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            let limited = file.take(length);
            let stream = ReaderStream::new(limited);

            return Ok(Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CONTENT_LENGTH, length.to_string())
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {start}-{end}/{file_size}"),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .body(Body::from_stream(stream))
                .unwrap());
        }
    }

    // No Range header -- serve the full file.
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let stream = ReaderStream::new(file);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .body(Body::from_stream(stream))
        .unwrap())
}
