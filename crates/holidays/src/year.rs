//! Full-year holiday assembly and the substitute rule.

use koyomi_civil::CivilDate;

use crate::fixed::FIXED_HOLIDAYS;
use crate::moving::{autumnal_equinox, nth_monday, vernal_equinox};

/// Name given to every substitute holiday (振替休日).
pub const SUBSTITUTE_NAME: &str = "振替休日";

/// A national holiday: a name attached to a single civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// The day the holiday is observed.
    pub date: CivilDate,
    /// The holiday's Japanese name.
    pub name: &'static str,
}

/// Computes every national holiday of the given year, sorted by date.
///
/// Pure function of `year`: same input, same output, no hidden state.
/// Defined for any year; outside 2000..=2099 the equinox holidays degrade
/// to fixed default days (see `moving`), so the result is approximate
/// there rather than absent.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = Vec::with_capacity(24);

    for &(month, day, name) in &FIXED_HOLIDAYS {
        let date = CivilDate::new(year, month, day)
            .expect("fixed holiday table holds valid month/day pairs");
        holidays.push(Holiday { date, name });
    }

    holidays.push(Holiday {
        date: nth_monday(year, 1, 2),
        name: "成人の日", // Coming of Age Day
    });
    holidays.push(Holiday {
        date: vernal_equinox(year),
        name: "春分の日", // Vernal Equinox Day
    });
    holidays.push(Holiday {
        date: nth_monday(year, 7, 3),
        name: "海の日", // Marine Day
    });
    holidays.push(Holiday {
        date: nth_monday(year, 9, 3),
        name: "敬老の日", // Respect for the Aged Day
    });
    holidays.push(Holiday {
        date: autumnal_equinox(year),
        name: "秋分の日", // Autumnal Equinox Day
    });
    holidays.push(Holiday {
        date: nth_monday(year, 10, 2),
        name: "スポーツの日", // Sports Day
    });

    let substitutes = substitute_holidays(&holidays);
    holidays.extend(substitutes);
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Derives substitute holidays: each base holiday falling on a Sunday
/// yields a 振替休日 on the following day.
///
/// Single pass over the base set only. A substitute day is never itself
/// re-examined, so substitutes do not chain.
fn substitute_holidays(base: &[Holiday]) -> Vec<Holiday> {
    base.iter()
        .filter(|h| h.date.weekday().is_sunday())
        .map(|h| Holiday {
            date: h.date.next(),
            name: SUBSTITUTE_NAME,
        })
        .collect()
}
