//! JST wall-clock read for the boundary layer.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::date::CivilDate;

/// Fixed UTC+9 offset. Japan has no daylight saving time, so a constant
/// offset stands in for a timezone database.
const JST_OFFSET_SECS: i64 = 9 * 3600;

/// Returns today's civil date in Japan Standard Time.
///
/// This is the only clock read in the workspace. Engine functions take the
/// resulting date as a parameter instead of reading the clock themselves,
/// so tests inject fixed reference dates.
pub fn today_jst() -> CivilDate {
    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    CivilDate::from_days((unix_secs + JST_OFFSET_SECS).div_euclid(86_400))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_plausible() {
        let today = today_jst();
        assert!(today.year() >= 2024);
        assert!((1..=12).contains(&today.month()));
        assert!((1..=31).contains(&today.day()));
    }

    #[test]
    fn offset_is_nine_hours() {
        assert_eq!(JST_OFFSET_SECS, 32_400);
    }
}
