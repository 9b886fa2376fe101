//! Per-date point queries.
//!
//! Each query recomputes the holiday set for the date's year; the
//! computation is cheap and pure, so nothing is cached.

use koyomi_civil::CivilDate;

use crate::year::holidays_for_year;

/// Returns `true` if the date is a national holiday (substitutes included).
pub fn is_holiday(date: CivilDate) -> bool {
    holidays_for_year(date.year()).iter().any(|h| h.date == date)
}

/// Returns the holiday name for the date, or `None` on a non-holiday.
///
/// First match in chronological order wins if a date ever carried more
/// than one entry.
pub fn holiday_name(date: CivilDate) -> Option<&'static str> {
    holidays_for_year(date.year())
        .iter()
        .find(|h| h.date == date)
        .map(|h| h.name)
}

/// Returns `true` on Sundays.
pub fn is_sunday(date: CivilDate) -> bool {
    date.weekday().is_sunday()
}

/// Returns `true` on Saturdays.
pub fn is_saturday(date: CivilDate) -> bool {
    date.weekday().is_saturday()
}

/// Returns `true` for days rendered in red: Sundays and holidays.
pub fn is_red_date(date: CivilDate) -> bool {
    is_sunday(date) || is_holiday(date)
}

/// Returns `true` for days rendered in blue: Saturdays.
pub fn is_blue_date(date: CivilDate) -> bool {
    is_saturday(date)
}
