//! Video entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use framenote_core::types::{DbId, Timestamp};

/// A video row from the `videos` table, nested under a brand.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub brand_id: DbId,
    pub name: String,
    /// Storage-relative path of the uploaded file.
    pub file_path: String,
    /// Collaboration room key, `"{brand_id}-{file_uuid}"`. Unique and
    /// stable for the video's lifetime.
    pub room_id: String,
    pub created_at: Timestamp,
}

/// DTO for registering an uploaded video. Assembled server-side after the
/// file write succeeds; never accepted directly from clients.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideo {
    #[validate(length(min = 1, max = 200, message = "name must be 1..=200 characters"))]
    pub name: String,
    pub file_path: String,
    pub room_id: String,
}
