//! Nth-Monday and equinox date rules.

use koyomi_civil::CivilDate;

/// Returns the date of the nth Monday of the given month.
///
/// The first Monday falls `(8 - w) mod 7` days after the 1st, where `w` is
/// the weekday of the 1st with Sunday = 0; the nth adds whole weeks.
pub(crate) fn nth_monday(year: i32, month: u8, n: u8) -> CivilDate {
    let first = CivilDate::new(year, month, 1)
        .expect("nth-Monday rules use months from the holiday tables");
    let days_until_monday = i64::from((8 - first.weekday().index()) % 7);
    first.add_days(days_until_monday + i64::from(n - 1) * 7)
}

/// Returns Vernal Equinox Day (March) for the given year.
pub(crate) fn vernal_equinox(year: i32) -> CivilDate {
    let day = equinox_day(year, 20.8431, 20);
    CivilDate::new(year, 3, day).expect("approximated equinox day is a valid March date")
}

/// Returns Autumnal Equinox Day (September) for the given year.
pub(crate) fn autumnal_equinox(year: i32) -> CivilDate {
    let day = equinox_day(year, 23.2488, 23);
    CivilDate::new(year, 9, day).expect("approximated equinox day is a valid September date")
}

/// Linear astronomical approximation of the equinox day-of-month, valid
/// for 2000..=2099. Outside that window the result degrades to the fixed
/// `fallback` day, so callers must not assume precision there.
fn equinox_day(year: i32, c: f64, fallback: u8) -> u8 {
    if (2000..=2099).contains(&year) {
        let n = year - 1851;
        (c + 0.242194 * f64::from(n) - f64::from(n / 4)).floor() as u8
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_monday_first_is_monday_itself() {
        // 2024-01-01 is a Monday, so the 1st Monday is the 1st.
        assert_eq!(
            nth_monday(2024, 1, 1),
            CivilDate::new(2024, 1, 1).unwrap()
        );
        assert_eq!(
            nth_monday(2024, 1, 2),
            CivilDate::new(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn nth_monday_after_sunday_first() {
        // 2024-09-01 is a Sunday: Mondays fall on 2, 9, 16.
        assert_eq!(
            nth_monday(2024, 9, 3),
            CivilDate::new(2024, 9, 16).unwrap()
        );
    }

    #[test]
    fn nth_monday_mid_week_first() {
        // 2024-10-01 is a Tuesday: Mondays fall on 7, 14.
        assert_eq!(
            nth_monday(2024, 10, 2),
            CivilDate::new(2024, 10, 14).unwrap()
        );
    }

    #[test]
    fn nth_monday_always_a_monday() {
        for year in 2000..2030 {
            for (month, n) in [(1u8, 2u8), (7, 3), (9, 3), (10, 2)] {
                let date = nth_monday(year, month, n);
                assert_eq!(
                    date.weekday().index(),
                    1,
                    "{date} is not a Monday (year {year}, month {month}, n {n})"
                );
                assert_eq!(date.month(), month);
            }
        }
    }

    #[test]
    fn equinox_in_window() {
        // 2024: n = 173, floor(173/4) = 43.
        // vernal: floor(20.8431 + 41.8996 - 43) = 19
        // autumnal: floor(23.2488 + 41.8996 - 43) = 22
        assert_eq!(vernal_equinox(2024), CivilDate::new(2024, 3, 19).unwrap());
        assert_eq!(
            autumnal_equinox(2024),
            CivilDate::new(2024, 9, 22).unwrap()
        );
    }

    #[test]
    fn equinox_window_edges() {
        // 2000: n = 149, floor(149/4) = 37, 0.242194 * 149 = 36.086906.
        assert_eq!(vernal_equinox(2000).day(), 19);
        assert_eq!(autumnal_equinox(2000).day(), 22);
        // 2099: n = 248, floor(248/4) = 62, 0.242194 * 248 = 60.064112.
        assert_eq!(vernal_equinox(2099).day(), 18);
        assert_eq!(autumnal_equinox(2099).day(), 21);
    }

    #[test]
    fn equinox_fallback_outside_window() {
        for year in [1999, 2100, 1850] {
            assert_eq!(vernal_equinox(year).day(), 20, "vernal {year}");
            assert_eq!(autumnal_equinox(year).day(), 23, "autumnal {year}");
        }
    }

    #[test]
    fn equinox_day_stays_in_month() {
        for year in 2000..=2099 {
            let v = vernal_equinox(year);
            assert!((18..=20).contains(&v.day()), "vernal {year}: {v}");
            let a = autumnal_equinox(year);
            assert!((21..=22).contains(&a.day()), "autumnal {year}: {a}");
        }
    }
}
