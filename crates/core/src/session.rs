//! Review-session composition.
//!
//! [`ReviewSession`] wires the playback surface and the timeline together.
//! It owns the shared `current_time`/`duration` pair, holds the latest
//! thread snapshot, and is the sole writer of playback position: bubble
//! clicks and panel jump-to-timestamp clicks both funnel through the one
//! [`Seek`] implementation.

use serde::Serialize;

use crate::playback::{PlaybackState, Seek};
use crate::timeline::{CommentBubble, ThreadView, TimelineProjection};
use crate::types::Timestamp;

/// Metadata attached to a thread created from the composer: the playback
/// time the comment anchors to, plus the wall-clock creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposerMetadata {
    pub timestamp_secs: f64,
    pub created_at: Timestamp,
}

/// One review session: a playback surface plus the comment timeline for
/// the room it is viewing.
#[derive(Debug, Default)]
pub struct ReviewSession {
    playback: PlaybackState,
    threads: Vec<ThreadView>,
    projection: TimelineProjection,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- playback inputs ---------------------------------------------------

    /// Native playback tick. Duration discovery piggybacks here: if the
    /// surface reports a duration alongside the tick and none is known
    /// yet, it is learned and the projection recomputed against it.
    pub fn on_time_update(&mut self, time: f64, reported_duration: Option<f64>) {
        self.playback.on_time_update(time);
        if let Some(duration) = reported_duration {
            self.learn_duration(duration);
        }
    }

    /// Dedicated metadata-loaded signal.
    pub fn learn_duration(&mut self, duration: f64) {
        let before = self.playback.duration;
        self.playback.learn_duration(duration);
        if self.playback.duration != before {
            self.reproject();
        }
    }

    /// A click on a bubble seeks to the bubble's exact stored timestamp,
    /// never a position-derived value.
    pub fn on_bubble_click(&mut self, bubble: &CommentBubble) {
        self.seek_to(bubble.timestamp);
    }

    // -- timeline inputs ---------------------------------------------------

    /// Replace the thread snapshot and recompute both read views.
    ///
    /// Full recomputation per push; repeated or reordered snapshots are
    /// handled idempotently.
    pub fn apply_snapshot(&mut self, threads: Vec<ThreadView>) {
        self.threads = threads;
        self.reproject();
    }

    /// Metadata for a thread composed at the current playback position.
    pub fn composer_metadata(&self, now: Timestamp) -> ComposerMetadata {
        ComposerMetadata {
            timestamp_secs: self.playback.current_time,
            created_at: now,
        }
    }

    // -- reads -------------------------------------------------------------

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackState {
        &mut self.playback
    }

    pub fn projection(&self) -> &TimelineProjection {
        &self.projection
    }

    fn reproject(&mut self) {
        self.projection = TimelineProjection::compute(&self.threads, self.playback.duration);
    }
}

impl Seek for ReviewSession {
    fn seek_to(&mut self, time: f64) {
        self.playback.seek_to(time);
    }
}
