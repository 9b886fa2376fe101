use koyomi_civil::CivilDate;
use koyomi_era::{can_navigate_back_to, to_era};

fn date(year: i32, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day).unwrap()
}

#[test]
fn one_era_per_date_across_modern_range() {
    // Scan ~160 years of January firsts: every date at or after the Meiji
    // start and above the floor maps to exactly one era, monotonically
    // non-decreasing through the table order.
    let now = date(2025, 8, 1);
    let order = ["明治", "大正", "昭和", "平成", "令和"];
    let mut last_idx = 0usize;
    for year in 1925..=2085 {
        let d = date(year, 1, 1);
        let era = to_era(d, now).unwrap_or_else(|| panic!("no era for {d}"));
        let idx = order
            .iter()
            .position(|n| *n == era.name)
            .unwrap_or_else(|| panic!("unknown era {} for {d}", era.name));
        assert!(idx >= last_idx, "era order regressed at {d}");
        last_idx = idx;
        assert!(era.year >= 1, "non-positive era year at {d}");
    }
}

#[test]
fn known_conversions() {
    let now = date(2025, 8, 1);
    let cases = [
        ((1990, 1, 1), "平成", 2),
        ((2019, 4, 30), "平成", 31),
        ((2019, 5, 1), "令和", 1),
        ((2020, 1, 1), "令和", 2),
        ((1964, 10, 10), "昭和", 39),
    ];
    for ((y, m, d), name, era_year) in cases {
        let era = to_era(date(y, m, d), now).unwrap();
        assert_eq!(era.name, name, "{y}-{m:02}-{d:02}");
        assert_eq!(era.year, era_year, "{y}-{m:02}-{d:02}");
    }
}

#[test]
fn floor_and_navigation_agree_on_years() {
    // A date whose year sits below the floor is both unconvertible and
    // unreachable; the floor year itself is reachable from January on.
    let now = date(2026, 3, 1);
    let floor_year = 1926;
    assert!(to_era(date(floor_year, 1, 1), now).is_some());
    assert!(can_navigate_back_to(date(floor_year, 1, 1), now));
    assert!(to_era(date(floor_year - 1, 12, 31), now).is_none());
    assert!(!can_navigate_back_to(date(floor_year - 1, 12, 31), now));
}
