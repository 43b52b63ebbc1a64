//! core/time.rs
//! Millisecond -> "MM:SS" display formatting.

/// Format a millisecond count as zero-padded `MM:SS`.
///
/// Minutes never roll over into hours, so an hour-long track reads `60:00`
/// and the minute field simply grows past two digits when needed.
pub fn format_time(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
