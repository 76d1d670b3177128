//! Repository for review threads and their comments.

use std::collections::HashMap;

use sqlx::PgPool;

use framenote_core::types::DbId;

use crate::models::thread::{
    Comment, CreateComment, CreateThread, ReviewThread, ThreadWithComments,
};

const THREAD_COLUMNS: &str = "id, room_id, timestamp_secs, created_at";
const COMMENT_COLUMNS: &str = "id, thread_id, author, body, created_at";

/// Provides operations for threads and comments within a room.
pub struct ThreadRepo;

impl ThreadRepo {
    /// Create a thread with its first comment in one transaction.
    pub async fn create(
        pool: &PgPool,
        room_id: &str,
        input: &CreateThread,
    ) -> Result<ThreadWithComments, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO threads (room_id, timestamp_secs)
             VALUES ($1, $2)
             RETURNING {THREAD_COLUMNS}"
        );
        let thread = sqlx::query_as::<_, ReviewThread>(&query)
            .bind(room_id)
            .bind(input.timestamp_secs)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO comments (thread_id, author, body)
             VALUES ($1, $2, $3)
             RETURNING {COMMENT_COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(thread.id)
            .bind(input.author.trim())
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ThreadWithComments {
            thread,
            comments: vec![comment],
        })
    }

    /// Find a thread by ID, scoped to a room.
    pub async fn find_in_room(
        pool: &PgPool,
        room_id: &str,
        thread_id: DbId,
    ) -> Result<Option<ReviewThread>, sqlx::Error> {
        let query =
            format!("SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1 AND room_id = $2");
        sqlx::query_as::<_, ReviewThread>(&query)
            .bind(thread_id)
            .bind(room_id)
            .fetch_optional(pool)
            .await
    }

    /// The full room snapshot: every thread with its ordered comments,
    /// in insertion order. Consumers derive the sorted view and bubble
    /// projection from this; no ordering is promised beyond insertion.
    pub async fn list_for_room(
        pool: &PgPool,
        room_id: &str,
    ) -> Result<Vec<ThreadWithComments>, sqlx::Error> {
        let query = format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE room_id = $1 ORDER BY id ASC"
        );
        let threads = sqlx::query_as::<_, ReviewThread>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await?;

        if threads.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = threads.iter().map(|t| t.id).collect();
        let query = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE thread_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        );
        let comments = sqlx::query_as::<_, Comment>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_thread: HashMap<DbId, Vec<Comment>> = HashMap::new();
        for comment in comments {
            by_thread.entry(comment.thread_id).or_default().push(comment);
        }

        Ok(threads
            .into_iter()
            .map(|thread| {
                let comments = by_thread.remove(&thread.id).unwrap_or_default();
                ThreadWithComments { thread, comments }
            })
            .collect())
    }

    /// Append a comment to a thread.
    pub async fn add_comment(
        pool: &PgPool,
        thread_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (thread_id, author, body)
             VALUES ($1, $2, $3)
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(thread_id)
            .bind(input.author.trim())
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Delete a thread and (via cascade) its comments, scoped to a room.
    /// Returns `true` if a row was removed.
    pub async fn delete_in_room(
        pool: &PgPool,
        room_id: &str,
        thread_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM threads WHERE id = $1 AND room_id = $2")
            .bind(thread_id)
            .bind(room_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
