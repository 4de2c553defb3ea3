//! Clock-face rendering of elapsed time.

/// Formats seconds as zero-padded `HH:MM:SS`; hours are not capped.
///
/// # Examples
///
/// ```
/// use practice_tracker::domain::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(3_725), "01:02:05");
/// assert_eq!(format_hms(360_000), "100:00:00");
/// ```
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
