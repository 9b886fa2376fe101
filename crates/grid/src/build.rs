//! Grid construction.

use koyomi_civil::{CivilDate, CivilError, civil_sequence};
use koyomi_holidays::{holiday_name, is_saturday, is_sunday};

use crate::cell::DayCell;
use crate::event::Event;

/// A month grid is always six full weeks.
pub const CELLS_PER_GRID: usize = 42;

/// Builds the 42-cell grid for one month.
///
/// `month0` is the 0-based month index (0 = January), matching the
/// convention event dates were produced under. The grid starts on the
/// Sunday on or before the 1st of the month and runs six weeks, so
/// leading and trailing cells belong to the adjacent months.
///
/// `today` and `selected` are injected by the caller; the builder never
/// reads the clock. Events are matched to cells by exact `YYYY-MM-DD`
/// string equality with each cell's date, keeping the caller's order.
///
/// # Errors
///
/// Returns [`CivilError::InvalidMonth`] if `month0` is not in 0..=11.
/// Callers are expected to normalize the month before invocation.
pub fn build_month_grid(
    year: i32,
    month0: u8,
    events: &[Event],
    selected: Option<CivilDate>,
    today: CivilDate,
) -> Result<Vec<DayCell>, CivilError> {
    let month = month0.checked_add(1).unwrap_or(u8::MAX);
    let first = CivilDate::new(year, month, 1)?;
    let start = first.add_days(-i64::from(first.weekday().index()));

    let cells = civil_sequence(start, CELLS_PER_GRID)
        .into_iter()
        .map(|date| {
            let date_str = date.to_string();
            let day_events: Vec<Event> = events
                .iter()
                .filter(|e| e.date == date_str)
                .cloned()
                .collect();
            let name = holiday_name(date);
            DayCell {
                date,
                is_current_month: date.month() == month,
                is_today: date == today,
                is_selected: selected.is_some_and(|s| s == date),
                events: day_events,
                is_holiday: name.is_some(),
                holiday_name: name,
                is_sunday: is_sunday(date),
                is_saturday: is_saturday(date),
            }
        })
        .collect();
    Ok(cells)
}
