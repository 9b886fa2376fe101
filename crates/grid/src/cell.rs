//! Day-cell output record.

use koyomi_civil::CivilDate;

use crate::event::Event;

/// One cell of the rendered month grid.
///
/// Built fresh on every grid build and never mutated afterwards. The
/// annotation flags are redundant with what `koyomi-holidays` would answer
/// for `date`; they are precomputed here so a rendering layer does one
/// pass with no further lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    /// The cell's civil date.
    pub date: CivilDate,
    /// `true` when the cell belongs to the grid's target month rather
    /// than a leading or trailing day of an adjacent month.
    pub is_current_month: bool,
    /// Exact-date match against the caller-supplied "today".
    pub is_today: bool,
    /// Exact-date match against the caller's selected date, if any.
    pub is_selected: bool,
    /// Events keyed to this date, in the caller's original order.
    pub events: Vec<Event>,
    /// National holiday flag (substitutes included).
    pub is_holiday: bool,
    /// Holiday name; always present when `is_holiday` is set.
    pub holiday_name: Option<&'static str>,
    /// Weekday flags; at most one of the two is set.
    pub is_sunday: bool,
    pub is_saturday: bool,
}
