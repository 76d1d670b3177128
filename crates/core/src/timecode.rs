//! `M:SS` timecode formatting for playback positions and thread anchors.

/// Format a position in seconds as `M:SS`.
///
/// Minutes are unbounded (`600.0` formats as `"10:00"`); seconds are
/// zero-padded to two digits. Negative and non-finite inputs clamp to 0.
pub fn format_timecode(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
