//! Repository for the `videos` table.

use sqlx::PgPool;

use framenote_core::types::DbId;

use crate::models::video::{CreateVideo, Video};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, brand_id, name, file_path, room_id, created_at";

/// Provides operations for videos nested under a brand.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video under a brand, returning the created row.
    ///
    /// The unique constraint on `room_id` surfaces as a 23505 database
    /// error if a duplicate room key is ever derived.
    pub async fn create(
        pool: &PgPool,
        brand_id: DbId,
        input: &CreateVideo,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (brand_id, name, file_path, room_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(brand_id)
            .bind(input.name.trim())
            .bind(&input.file_path)
            .bind(&input.room_id)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a video by its room key. Indexed by the unique constraint
    /// on `room_id`, so this stays O(log n) as the catalog grows.
    pub async fn find_by_room_id(
        pool: &PgPool,
        room_id: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE room_id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(room_id)
            .fetch_optional(pool)
            .await
    }

    /// List a brand's videos ordered by most recently created first.
    pub async fn list_for_brand(pool: &PgPool, brand_id: DbId) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos WHERE brand_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(brand_id)
            .fetch_all(pool)
            .await
    }
}
