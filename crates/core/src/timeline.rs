//! Canonical timeline projection.
//!
//! A thread snapshot arrives from the room as an ordered list; this module
//! derives the two read views from it in one place so the bubble overlay
//! and the timeline panel can never disagree:
//!
//! - [`TimelineProjection::bubbles`] — progress-bar markers for threads
//!   with a numeric timestamp, in snapshot order.
//! - [`TimelineProjection::sorted`] — all threads, stable-sorted ascending
//!   by timestamp (missing timestamps sort as 0, so they render first).
//!
//! Projections are pure and recomputed in full from each snapshot, so
//! reordered or repeated pushes from the room are idempotent.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// One thread as seen by the timeline: identity, anchor, comment count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadView {
    pub id: DbId,
    /// Playback anchor in seconds. `None` (or a non-finite value) means
    /// the thread has no usable anchor and is excluded from bubbles.
    pub timestamp_secs: Option<f64>,
    pub comment_count: usize,
    pub created_at: Timestamp,
}

impl ThreadView {
    /// The anchor if it is a finite number, else `None`.
    fn anchor(&self) -> Option<f64> {
        self.timestamp_secs.filter(|t| t.is_finite())
    }
}

/// A derived marker on the progress bar: one per anchored thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentBubble {
    pub id: DbId,
    pub timestamp: f64,
    /// Horizontal offset as a percentage of the bar width.
    pub position: f64,
    pub comment_count: usize,
}

/// Map a timestamp to a progress-bar percentage.
///
/// Defined as 0 while the duration is unknown so the overlay never
/// divides by zero.
pub fn bubble_position(timestamp: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        timestamp / duration * 100.0
    } else {
        0.0
    }
}

/// Both read views derived from one snapshot.
#[derive(Debug, Clone, Default)]
pub struct TimelineProjection {
    pub bubbles: Vec<CommentBubble>,
    pub sorted: Vec<ThreadView>,
}

impl TimelineProjection {
    /// Project a thread snapshot against the current media duration.
    pub fn compute(threads: &[ThreadView], duration: f64) -> Self {
        let bubbles = threads
            .iter()
            .filter_map(|thread| {
                let timestamp = thread.anchor()?;
                Some(CommentBubble {
                    id: thread.id,
                    timestamp,
                    position: bubble_position(timestamp, duration),
                    comment_count: thread.comment_count,
                })
            })
            .collect();

        let mut sorted = threads.to_vec();
        // Stable sort: ties keep snapshot order. Missing anchors sort as 0.
        sorted.sort_by(|a, b| {
            let ta = a.anchor().unwrap_or(0.0);
            let tb = b.anchor().unwrap_or(0.0);
            ta.total_cmp(&tb)
        });

        Self { bubbles, sorted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn thread(id: DbId, timestamp_secs: Option<f64>, comment_count: usize) -> ThreadView {
        ThreadView {
            id,
            timestamp_secs,
            comment_count,
            created_at: Utc::now(),
        }
    }

    // -- position formula --

    #[test]
    fn position_is_linear_in_timestamp() {
        assert_eq!(bubble_position(30.0, 120.0), 25.0);
        assert_eq!(bubble_position(0.0, 120.0), 0.0);
        assert_eq!(bubble_position(120.0, 120.0), 100.0);
    }

    #[test]
    fn position_is_zero_while_duration_unknown() {
        assert_eq!(bubble_position(42.3, 0.0), 0.0);
        assert_eq!(bubble_position(0.0, 0.0), 0.0);
    }

    // -- bubble filtering --

    #[test]
    fn bubbles_exclude_exactly_the_unanchored_threads() {
        let threads = vec![
            thread(1, Some(12.5), 2),
            thread(2, None, 1),
            thread(3, Some(5.0), 4),
            thread(4, Some(f64::NAN), 1),
        ];
        let projection = TimelineProjection::compute(&threads, 100.0);

        let anchored = threads.iter().filter(|t| {
            t.timestamp_secs.map(f64::is_finite).unwrap_or(false)
        });
        assert_eq!(projection.bubbles.len(), anchored.count());
        assert_eq!(projection.bubbles[0].id, 1);
        assert_eq!(projection.bubbles[1].id, 3);
    }

    #[test]
    fn bubbles_keep_snapshot_order() {
        let threads = vec![
            thread(1, Some(50.0), 1),
            thread(2, Some(10.0), 1),
            thread(3, Some(30.0), 1),
        ];
        let projection = TimelineProjection::compute(&threads, 100.0);
        let ids: Vec<DbId> = projection.bubbles.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn bubble_carries_exact_timestamp_and_count() {
        let threads = vec![thread(7, Some(42.3), 3)];
        let projection = TimelineProjection::compute(&threads, 60.0);
        let bubble = &projection.bubbles[0];
        assert_eq!(bubble.timestamp, 42.3);
        assert_eq!(bubble.comment_count, 3);
        assert!((bubble.position - 70.5).abs() < 1e-9);
    }

    // -- sorted view --

    #[test]
    fn sorted_ascending_with_missing_anchors_first() {
        let threads = vec![
            thread(1, Some(12.5), 1),
            thread(2, None, 1),
            thread(3, Some(5.0), 1),
        ];
        let projection = TimelineProjection::compute(&threads, 100.0);
        let ids: Vec<DbId> = projection.sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_timestamps_preserve_snapshot_order() {
        let threads = vec![
            thread(1, Some(10.0), 1),
            thread(2, Some(10.0), 1),
            thread(3, Some(10.0), 1),
        ];
        let projection = TimelineProjection::compute(&threads, 100.0);
        let ids: Vec<DbId> = projection.sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let threads = vec![
            thread(1, Some(50.0), 1),
            thread(2, Some(5.0), 1),
            thread(3, None, 1),
            thread(4, Some(5.0), 1),
        ];
        let once = TimelineProjection::compute(&threads, 100.0);
        let twice = TimelineProjection::compute(&once.sorted, 100.0);
        let first: Vec<DbId> = once.sorted.iter().map(|t| t.id).collect();
        let second: Vec<DbId> = twice.sorted.iter().map(|t| t.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_snapshot_projects_to_empty_views() {
        let projection = TimelineProjection::compute(&[], 100.0);
        assert!(projection.bubbles.is_empty());
        assert!(projection.sorted.is_empty());
    }
}
