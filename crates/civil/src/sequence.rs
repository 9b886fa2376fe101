//! Consecutive date sequence generation.

use crate::date::CivilDate;

/// Generates a contiguous sequence of civil dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries are
/// handled automatically (Dec 31 wraps to Jan 1 of the following year).
///
/// # Example
///
/// ```ignore
/// let start = CivilDate::new(2024, 1, 28)?;
/// let dates = civil_sequence(start, 42);
/// assert_eq!(dates.len(), 42);
/// // Jan 28 ..= Mar 9, six full weeks
/// ```
pub fn civil_sequence(start: CivilDate, n_days: usize) -> Vec<CivilDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next();
        dates.push(current);
    }
    dates
}
