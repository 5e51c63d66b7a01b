//! Error types for the demeter-calendar crate.

/// Error type for all fallible operations in the demeter-calendar crate.
///
/// Covers construction of calendar dates that do not exist in the
/// Gregorian calendar, years outside the supported 4-digit range, and
/// text that cannot be parsed as an ISO date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when (year, month, day) does not name a real calendar date.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
    },

    /// Returned when a year falls outside the supported range 1..=9999.
    #[error("year out of range: {year} (must be 1..=9999)")]
    YearOutOfRange {
        /// The out-of-range year that was provided.
        year: i32,
    },

    /// Returned when a string is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The input that failed to parse.
        input: String,
    },
}
