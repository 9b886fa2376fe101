use koyomi_civil::CivilDate;
use koyomi_holidays::{SUBSTITUTE_NAME, holiday_name, holidays_for_year, is_holiday};

fn date(year: i32, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day).unwrap()
}

#[test]
fn sunday_holiday_shifts_to_monday() {
    // 2024-02-11 National Foundation Day falls on a Sunday.
    assert!(is_holiday(date(2024, 2, 11)));
    assert_eq!(holiday_name(date(2024, 2, 12)), Some(SUBSTITUTE_NAME));
}

#[test]
fn every_sunday_base_holiday_has_a_substitute() {
    for year in 2000..2040 {
        let holidays = holidays_for_year(year);
        for h in &holidays {
            if h.name != SUBSTITUTE_NAME && h.date.weekday().is_sunday() {
                let next = h.date.next();
                assert!(
                    holidays
                        .iter()
                        .any(|s| s.name == SUBSTITUTE_NAME && s.date == next),
                    "{year}: {} ({}) on Sunday, no substitute on {next}",
                    h.name,
                    h.date
                );
            }
        }
    }
}

#[test]
fn substitute_rule_is_single_pass() {
    // Substitutes never spawn further substitutes; every substitute sits
    // exactly one day after a base holiday.
    for year in 2000..2040 {
        let holidays = holidays_for_year(year);
        let n_sunday_base = holidays
            .iter()
            .filter(|h| h.name != SUBSTITUTE_NAME && h.date.weekday().is_sunday())
            .count();
        let n_subs = holidays
            .iter()
            .filter(|h| h.name == SUBSTITUTE_NAME)
            .count();
        assert_eq!(n_subs, n_sunday_base, "year {year}");
    }
}

#[test]
fn golden_week_clustering() {
    // 2025: May 4 (みどりの日) is a Sunday inside Golden Week. The
    // single-pass rule puts its substitute on May 5, a date that already
    // carries こどもの日, so both entries coexist on that date. Name
    // lookup prefers the first (chronologically sorted, insertion-stable)
    // entry, こどもの日.
    let holidays = holidays_for_year(2025);
    let may5: Vec<&str> = holidays
        .iter()
        .filter(|h| h.date == date(2025, 5, 5))
        .map(|h| h.name)
        .collect();
    assert!(may5.contains(&"こどもの日"));
    assert!(may5.contains(&SUBSTITUTE_NAME));
    assert_eq!(holiday_name(date(2025, 5, 5)), Some("こどもの日"));
}
