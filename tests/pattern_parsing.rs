// Tests for meeting pattern line parsing.
use chrono::{NaiveDate, NaiveTime};
use coursecal::FormatError;
use coursecal::model::{MeetingDay, parse_meeting_pattern, parse_time_of_day};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_four_field_pattern() {
    let p = parse_meeting_pattern(
        "2024-01-08 - 2024-04-05 | Mon Wed | 9:00 a.m. - 10:20 a.m. | HENN - Room 200",
    )
    .unwrap();

    assert_eq!(p.start_date, date(2024, 1, 8));
    assert_eq!(p.end_date, date(2024, 4, 5));
    assert_eq!(p.weekdays, vec![MeetingDay::Mon, MeetingDay::Wed]);
    assert_eq!(p.start_time, time(9, 0));
    assert_eq!(p.end_time, time(10, 20));
    assert_eq!(p.location, "HENN - Room 200");
}

#[test]
fn test_three_field_pattern_defaults_to_online() {
    let p = parse_meeting_pattern("2024-09-03 - 2024-12-05 | Tue Thu | 2:00 p.m. - 3:30 p.m.")
        .unwrap();
    assert_eq!(p.location, "Online");
    assert_eq!(p.start_time, time(14, 0));
    assert_eq!(p.end_time, time(15, 30));
}

#[test]
fn test_blank_location_defaults_to_online() {
    let p = parse_meeting_pattern("2024-09-03 - 2024-12-05 | Fri | 2:00 p.m. - 3:00 p.m. |  ")
        .unwrap();
    assert_eq!(p.location, "Online");
}

#[test]
fn test_pipe_delimited_location_is_rejoined() {
    let p = parse_meeting_pattern(
        "2024-01-08 - 2024-04-05 | Mon Wed Fri | 11:00 a.m. - 11:50 a.m. | UBCV | Hennings Building (HENN) | Floor: 2 | Room: 200",
    )
    .unwrap();
    assert_eq!(
        p.location,
        "UBCV | Hennings Building (HENN) | Floor: 2 | Room: 200"
    );
    assert_eq!(p.weekdays.len(), 3);
}

#[test]
fn test_two_fields_is_format_error() {
    let err = parse_meeting_pattern("2024-01-08 - 2024-04-05 | Mon Wed").unwrap_err();
    assert_eq!(
        err,
        FormatError::FieldCount {
            found: 2,
            pattern: "2024-01-08 - 2024-04-05 | Mon Wed".to_string()
        }
    );
}

#[test]
fn test_bad_date_is_format_error() {
    let err =
        parse_meeting_pattern("2024-13-08 - 2024-04-05 | Mon | 9:00 a.m. - 10:00 a.m.").unwrap_err();
    assert!(matches!(err, FormatError::Date(ref d) if d == "2024-13-08"));
}

#[test]
fn test_bad_time_is_format_error() {
    let err = parse_meeting_pattern("2024-01-08 - 2024-04-05 | Mon | 9:00 - 10:00").unwrap_err();
    assert!(matches!(err, FormatError::Time(_)));
}

#[test]
fn test_unknown_weekdays_are_dropped() {
    let p = parse_meeting_pattern("2024-01-08 - 2024-04-05 | Mon Xyz Fri | 9:00 a.m. - 10:00 a.m.")
        .unwrap();
    assert_eq!(p.weekdays, vec![MeetingDay::Mon, MeetingDay::Fri]);

    let err = parse_meeting_pattern("2024-01-08 - 2024-04-05 | TBA | 9:00 a.m. - 10:00 a.m.")
        .unwrap_err();
    assert!(matches!(err, FormatError::Weekdays(_)));
}

#[test]
fn test_display_roundtrip_preserves_values() {
    let inputs = [
        "2024-01-08 - 2024-04-05 | Mon Wed | 9:00 a.m. - 10:20 a.m. | HENN - Room 200",
        "2024-09-03 - 2024-12-05 | Tue Thu | 12:30 p.m. - 1:50 p.m.",
        "2025-01-06 - 2025-01-06 | Sat Sun | 12:00 a.m. - 11:59 p.m. | UBCV | Orchard Commons (ORCH) | Room: 1001",
    ];
    for input in inputs {
        let parsed = parse_meeting_pattern(input).unwrap();
        let reparsed = parse_meeting_pattern(&parsed.to_string()).unwrap();
        assert_eq!(parsed, reparsed, "roundtrip failed for '{}'", input);
    }
}

#[test]
fn test_time_token_normalization() {
    assert_eq!(parse_time_of_day("9:00 a.m.").unwrap(), time(9, 0));
    assert_eq!(parse_time_of_day("2:30 PM |").unwrap(), time(14, 30));
    assert!(parse_time_of_day("half past nine").is_err());
}
