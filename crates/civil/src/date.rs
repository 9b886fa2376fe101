//! Civil date with day-number conversions.

use std::fmt;
use std::str::FromStr;

use crate::error::CivilError;
use crate::weekday::Weekday;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December). February reads 28 here;
/// [`days_in_month`] adds the leap day.
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CivilError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CivilError> {
    if !(1..=12).contains(&month) {
        return Err(CivilError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// A calendar day in the proleptic Gregorian calendar.
///
/// Compared and ordered by its (year, month, day) triple. Conversion to a
/// continuous day number (days since 1970-01-01) backs all arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError`] if the month is not in 1..=12 or the day is
    /// invalid for the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CivilError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CivilError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `CivilDate` from a day number (days since 1970-01-01).
    ///
    /// Inverse of [`CivilDate::to_days`]. Defined for any day number whose
    /// year fits in `i32`.
    pub fn from_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (y + i64::from(month <= 2)) as i32;
        Self { year, month, day }
    }

    /// Returns the day number of this date (days since 1970-01-01).
    pub fn to_days(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = (i64::from(self.month) + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday (index 4 with Sunday = 0).
        Weekday::from_index((self.to_days() + 4).rem_euclid(7) as u8)
    }

    /// Returns the date shifted by `days` (negative shifts go backwards).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_days(self.to_days() + days)
    }

    /// Returns the next calendar day.
    pub fn next(self) -> Self {
        self.add_days(1)
    }
}

impl fmt::Display for CivilDate {
    /// Formats as zero-padded `YYYY-MM-DD`, the canonical string form
    /// events are keyed and matched by.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = CivilError;

    /// Parses a zero-padded `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CivilError::InvalidFormat {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(invalid)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        Self::new(year, month, day)
    }
}
