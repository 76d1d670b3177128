//! Review thread and comment models.
//!
//! A thread anchors a comment conversation to a playback timestamp via
//! `timestamp_secs`; a `NULL` anchor keeps the thread in the timeline but
//! out of the bubble projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use framenote_core::timeline::ThreadView;
use framenote_core::types::{DbId, Timestamp};

/// A thread row from the `threads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewThread {
    pub id: DbId,
    pub room_id: String,
    pub timestamp_secs: Option<f64>,
    pub created_at: Timestamp,
}

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub thread_id: DbId,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// A thread together with its ordered comment list; the unit the room
/// snapshot is made of.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadWithComments {
    #[serde(flatten)]
    pub thread: ReviewThread,
    pub comments: Vec<Comment>,
}

impl ThreadWithComments {
    /// Project into the timeline's view of a thread.
    pub fn to_view(&self) -> ThreadView {
        ThreadView {
            id: self.thread.id,
            timestamp_secs: self.thread.timestamp_secs,
            comment_count: self.comments.len(),
            created_at: self.thread.created_at,
        }
    }
}

/// DTO for creating a thread with its first comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThread {
    /// Playback anchor in seconds; omitted for unanchored threads.
    pub timestamp_secs: Option<f64>,
    #[validate(length(min = 1, max = 120))]
    pub author: String,
    #[validate(length(min = 1, max = 4000))]
    pub body: String,
}

/// DTO for appending a comment to an existing thread.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, max = 120))]
    pub author: String,
    #[validate(length(min = 1, max = 4000))]
    pub body: String,
}
