//! Error types for the koyomi-civil crate.

/// Error type for all fallible operations in the koyomi-civil crate.
///
/// Covers validation failures for month numbers and day-within-month
/// values, and malformed `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CivilError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year (February's maximum depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date string is not of the form `YYYY-MM-DD`.
    #[error("invalid date string: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The string that failed to parse.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CivilError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CivilError::InvalidDay {
            day: 29,
            month: 2,
            year: 2023,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 2023-02 (max 28)");
    }

    #[test]
    fn error_invalid_format() {
        let err = CivilError::InvalidFormat {
            input: "2024/01/01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date string: \"2024/01/01\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CivilError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CivilError>();
    }
}
