//! Era lookup and the rolling validity floor.

use koyomi_civil::CivilDate;

use crate::table::ERA_TABLE;

/// How far back era display reaches, in years, measured from `now`.
const VALIDITY_WINDOW_YEARS: i32 = 100;

/// A date expressed in era form: era name plus era-relative year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraDate {
    /// The era's Japanese name (明治, ..., 令和).
    pub name: &'static str,
    /// Year within the era; the era's first calendar year is year 1.
    pub year: i32,
}

impl EraDate {
    /// Returns the Japanese label, e.g. `令和2年`.
    pub fn label(&self) -> String {
        format!("{}{}年", self.name, self.year)
    }
}

/// Converts a civil date to era form.
///
/// Returns `None` when the date's year precedes `now.year() - 100` (the
/// rolling validity floor) or when no era interval contains the date
/// (anything before Meiji). Callers treat `None` as "display Gregorian",
/// not as a failure.
///
/// The era year is `date.year - era.start.year + 1` by plain calendar-year
/// subtraction: within an era's first calendar year the value is 1 even
/// for days before the era's exact start day.
pub fn to_era(date: CivilDate, now: CivilDate) -> Option<EraDate> {
    if date.year() < now.year() - VALIDITY_WINDOW_YEARS {
        return None;
    }
    let key = (date.year(), date.month(), date.day());
    let era = ERA_TABLE
        .iter()
        .find(|e| key >= e.start && e.end.is_none_or(|end| key <= end))?;
    Some(EraDate {
        name: era.name,
        year: date.year() - era.start.0 + 1,
    })
}

/// Returns `true` if the month containing `date` is reachable by backward
/// navigation: not before January of `now.year() - 100`.
pub fn can_navigate_back_to(date: CivilDate, now: CivilDate) -> bool {
    let min_year = now.year() - VALIDITY_WINDOW_YEARS;
    (date.year(), date.month()) >= (min_year, 1)
}
