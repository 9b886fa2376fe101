use koyomi_civil::{CivilDate, CivilError, Weekday, civil_sequence};

#[test]
fn day_number_roundtrip_full_year() {
    // Every day of a leap year survives the day-number roundtrip.
    let start = CivilDate::new(2024, 1, 1).unwrap();
    for offset in 0..366 {
        let date = start.add_days(offset);
        assert_eq!(
            CivilDate::from_days(date.to_days()),
            date,
            "roundtrip failed at offset {offset}: {date}"
        );
    }
    assert_eq!(start.add_days(365), CivilDate::new(2024, 12, 31).unwrap());
    assert_eq!(start.add_days(366), CivilDate::new(2025, 1, 1).unwrap());
}

#[test]
fn weekday_cycle_is_seven_days() {
    let start = CivilDate::new(2024, 1, 7).unwrap(); // a Sunday
    assert_eq!(start.weekday(), Weekday::Sunday);
    for offset in 0..28i64 {
        let date = start.add_days(offset);
        assert_eq!(
            date.weekday().index(),
            (offset % 7) as u8,
            "weekday mismatch at {date}"
        );
    }
}

#[test]
fn sequence_spans_century_boundary() {
    // 1900 was not a leap year: Feb 28 goes straight to Mar 1.
    let dates = civil_sequence(CivilDate::new(1900, 2, 27).unwrap(), 3);
    assert_eq!(dates[1], CivilDate::new(1900, 2, 28).unwrap());
    assert_eq!(dates[2], CivilDate::new(1900, 3, 1).unwrap());
}

#[test]
fn string_form_matches_event_key_format() {
    // Single-digit months and days are zero-padded, matching the
    // YYYY-MM-DD keys events are stored under.
    let date = CivilDate::new(2025, 3, 5).unwrap();
    assert_eq!(date.to_string(), "2025-03-05");
    let parsed: CivilDate = "2025-03-05".parse().unwrap();
    assert_eq!(parsed, date);
}

#[test]
fn parse_error_carries_input() {
    let err = "first-of-may".parse::<CivilDate>().unwrap_err();
    assert_eq!(
        err,
        CivilError::InvalidFormat {
            input: "first-of-may".to_string(),
        }
    );
}
