//! Playback-surface state machine.
//!
//! Models the state a video surface owns: position, duration, volume,
//! mute, fullscreen, and the paused/playing transition pair. The native
//! media element is driven elsewhere; this type is the single source of
//! truth the rest of the review session reads.

/// Default skip-control step in seconds.
pub const SKIP_STEP_SECS: f64 = 10.0;

/// Narrow seek capability.
///
/// Components that only need to request a playback seek (timeline panel,
/// bubble overlay) hold this instead of the full surface, so they cannot
/// reach any other playback state.
pub trait Seek {
    fn seek_to(&mut self, time: f64);
}

/// Playback state for one video surface.
///
/// `duration` starts at 0 (unknown) and becomes a fixed positive value
/// once media metadata is learned. All position writes clamp to
/// `[0, duration]`; the lower bound applies even before the duration is
/// known.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub is_muted: bool,
    pub is_playing: bool,
    pub is_fullscreen: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            is_muted: false,
            is_playing: false,
            is_fullscreen: false,
        }
    }
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- transport ---------------------------------------------------------

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Native "ended" signal: transition to paused, retain position.
    pub fn ended(&mut self) {
        self.is_playing = false;
    }

    // -- position ----------------------------------------------------------

    /// Record a native playback tick.
    pub fn on_time_update(&mut self, time: f64) {
        self.current_time = self.clamp_position(time);
    }

    /// Learn the media duration once metadata loads. The first positive
    /// value wins; later reports are ignored so the value stays fixed for
    /// the life of the surface.
    pub fn learn_duration(&mut self, duration: f64) {
        if self.duration == 0.0 && duration.is_finite() && duration > 0.0 {
            self.duration = duration;
        }
    }

    /// Skip forward or backward by `delta` seconds, clamped to
    /// `[0, duration]`.
    pub fn skip(&mut self, delta: f64) {
        self.current_time = self.clamp_position(self.current_time + delta);
    }

    /// Map a click on the progress bar to a playback position.
    ///
    /// Returns `None` until the duration is known or if the bar has no
    /// width; callers treat that as a no-op. The click offset clamps to
    /// `[0, bar_width]`, so the left edge yields 0 and the right edge
    /// yields the duration.
    pub fn seek_from_click(&self, click_x: f64, bar_width: f64) -> Option<f64> {
        if self.duration <= 0.0 || bar_width <= 0.0 {
            return None;
        }
        let x = click_x.clamp(0.0, bar_width);
        Some((x / bar_width) * self.duration)
    }

    fn clamp_position(&self, time: f64) -> f64 {
        let t = if time.is_finite() { time.max(0.0) } else { 0.0 };
        if self.duration > 0.0 {
            t.min(self.duration)
        } else {
            t
        }
    }

    // -- volume ------------------------------------------------------------

    /// Set the volume slider, clamped to `[0, 1]`.
    ///
    /// A zero value mutes without overwriting the stored level, so a
    /// later unmute restores the previous volume. Any positive value
    /// stores the level and unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        let v = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if v == 0.0 {
            self.is_muted = true;
        } else {
            self.volume = v;
            self.is_muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    /// Volume the surface should apply to the media element.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    // -- fullscreen --------------------------------------------------------

    /// Record the platform's fullscreen state. Driven by the platform
    /// callback; if the enter/exit call fails the callback never fires
    /// and the state is simply unchanged.
    pub fn set_fullscreen(&mut self, active: bool) {
        self.is_fullscreen = active;
    }
}

impl Seek for PlaybackState {
    /// Clamp-and-set the playback position.
    fn seek_to(&mut self, time: f64) {
        self.current_time = self.clamp_position(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_duration(duration: f64) -> PlaybackState {
        let mut state = PlaybackState::new();
        state.learn_duration(duration);
        state
    }

    // -- transport --

    #[test]
    fn play_pause_transitions() {
        let mut state = PlaybackState::new();
        assert!(!state.is_playing);
        state.play();
        assert!(state.is_playing);
        state.pause();
        assert!(!state.is_playing);
        state.toggle_play();
        assert!(state.is_playing);
    }

    #[test]
    fn ended_pauses_and_retains_position() {
        let mut state = with_duration(100.0);
        state.play();
        state.on_time_update(100.0);
        state.ended();
        assert!(!state.is_playing);
        assert_eq!(state.current_time, 100.0);
    }

    // -- duration discovery --

    #[test]
    fn first_positive_duration_wins() {
        let mut state = PlaybackState::new();
        state.learn_duration(0.0);
        assert_eq!(state.duration, 0.0);
        state.learn_duration(90.0);
        assert_eq!(state.duration, 90.0);
        state.learn_duration(45.0);
        assert_eq!(state.duration, 90.0);
    }

    #[test]
    fn non_finite_duration_ignored() {
        let mut state = PlaybackState::new();
        state.learn_duration(f64::NAN);
        state.learn_duration(f64::INFINITY);
        assert_eq!(state.duration, 0.0);
    }

    // -- seek / skip clamping --

    #[test]
    fn seek_clamps_to_media_bounds() {
        let mut state = with_duration(60.0);
        state.seek_to(-5.0);
        assert_eq!(state.current_time, 0.0);
        state.seek_to(120.0);
        assert_eq!(state.current_time, 60.0);
        state.seek_to(42.3);
        assert_eq!(state.current_time, 42.3);
    }

    #[test]
    fn seek_before_metadata_clamps_lower_bound_only() {
        let mut state = PlaybackState::new();
        state.seek_to(-1.0);
        assert_eq!(state.current_time, 0.0);
        state.seek_to(30.0);
        assert_eq!(state.current_time, 30.0);
    }

    #[test]
    fn skip_clamps_at_both_ends() {
        let mut state = with_duration(60.0);
        state.skip(-SKIP_STEP_SECS);
        assert_eq!(state.current_time, 0.0);
        state.seek_to(55.0);
        state.skip(SKIP_STEP_SECS);
        assert_eq!(state.current_time, 60.0);
        state.skip(-SKIP_STEP_SECS);
        assert_eq!(state.current_time, 50.0);
    }

    // -- seek-by-click --

    #[test]
    fn click_at_edges_maps_to_media_bounds() {
        let state = with_duration(120.0);
        assert_eq!(state.seek_from_click(0.0, 640.0), Some(0.0));
        assert_eq!(state.seek_from_click(640.0, 640.0), Some(120.0));
        assert_eq!(state.seek_from_click(320.0, 640.0), Some(60.0));
    }

    #[test]
    fn click_outside_bar_clamps() {
        let state = with_duration(120.0);
        assert_eq!(state.seek_from_click(-10.0, 640.0), Some(0.0));
        assert_eq!(state.seek_from_click(700.0, 640.0), Some(120.0));
    }

    #[test]
    fn click_is_noop_without_duration_or_width() {
        let state = PlaybackState::new();
        assert_eq!(state.seek_from_click(100.0, 640.0), None);
        let state = with_duration(120.0);
        assert_eq!(state.seek_from_click(100.0, 0.0), None);
    }

    // -- volume / mute --

    #[test]
    fn zero_volume_mutes_without_losing_level() {
        let mut state = PlaybackState::new();
        state.set_volume(0.7);
        state.set_volume(0.0);
        assert!(state.is_muted);
        assert_eq!(state.volume, 0.7);
        assert_eq!(state.effective_volume(), 0.0);

        state.toggle_mute();
        assert!(!state.is_muted);
        assert_eq!(state.effective_volume(), 0.7);
    }

    #[test]
    fn positive_volume_unmutes() {
        let mut state = PlaybackState::new();
        state.toggle_mute();
        state.set_volume(0.4);
        assert!(!state.is_muted);
        assert_eq!(state.volume, 0.4);
    }

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut state = PlaybackState::new();
        state.set_volume(1.5);
        assert_eq!(state.volume, 1.0);
        state.set_volume(-0.2);
        // Negative clamps to zero, which mutes rather than storing.
        assert!(state.is_muted);
        assert_eq!(state.volume, 1.0);
    }

    // -- fullscreen --

    #[test]
    fn fullscreen_follows_platform_callback() {
        let mut state = PlaybackState::new();
        state.set_fullscreen(true);
        assert!(state.is_fullscreen);
        state.set_fullscreen(false);
        assert!(!state.is_fullscreen);
    }
}
