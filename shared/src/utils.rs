//! # Shared Utility Functions
//!
//! Display helpers for session schedules.
//!
//! ```rust
//! use shared::utils::format_session_date;
//!
//! assert_eq!(format_session_date("Monday", "08:00", "10:00"), "Monday, 08:00 - 10:00");
//! ```

/// Format a weekday and time range as `"<day>, <start> - <end>"`.
///
/// Times are shown exactly as the API sent them.
pub fn format_session_date(week_day: &str, starting_time: &str, ending_time: &str) -> String {
    format!("{}, {} - {}", week_day, starting_time, ending_time)
}
