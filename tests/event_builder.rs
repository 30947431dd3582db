// Tests for turning parsed patterns into recurring event descriptors.
use chrono::{NaiveDate, NaiveDateTime, Weekday, Datelike};
use coursecal::model::{
    AddressTable, CourseMeta, EventBuilder, Frequency, LocationResolver, MeetingDay,
    parse_meeting_pattern,
};

const PATTERN: &str =
    "2024-01-08 - 2024-04-05 | Mon Wed | 9:00 a.m. - 10:20 a.m. | HENN - Room 200";

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn table() -> AddressTable {
    [("HENN", "Hennings", "6224 Agricultural Road")]
        .into_iter()
        .collect()
}

fn meta() -> CourseMeta {
    CourseMeta {
        title: "PHYS 117 - Lecture".to_string(),
        instructor: "Jane Doe".to_string(),
        section_details: "PHYS_V 117-101".to_string(),
    }
}

#[test]
fn test_reference_pattern_event() {
    let t = table();
    let builder = EventBuilder::new(LocationResolver::new(&t, "Vancouver, BC", "Canada", "🌐 Online"));
    let event = builder.build(&parse_meeting_pattern(PATTERN).unwrap(), &meta());

    assert_eq!(event.title, "PHYS 117 - Lecture");
    assert_eq!(event.start, dt(2024, 1, 8, 9, 0));
    assert_eq!(event.end, dt(2024, 1, 8, 10, 10));
    assert_eq!(event.recurrence.frequency, Frequency::Weekly);
    assert_eq!(
        event.recurrence.by_weekday,
        vec![MeetingDay::Mon, MeetingDay::Wed]
    );
    assert_eq!(event.recurrence.until, dt(2024, 4, 5, 10, 10));
    assert_eq!(event.rrule(), "FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20240405T101000");
    assert_eq!(
        event.address_text,
        "200-6224 Agricultural Road\nVancouver, BC\nCanada"
    );
    assert_eq!(event.location_display, "Hennings (HENN) - Room 200");
}

#[test]
fn test_description_layout() {
    let t = table();
    let builder = EventBuilder::new(LocationResolver::new(&t, "Vancouver, BC", "Canada", "🌐 Online"));
    let event = builder.build(&parse_meeting_pattern(PATTERN).unwrap(), &meta());
    assert_eq!(
        event.description,
        "Instructor: Jane Doe\n\nHennings (HENN) - Room 200\n\nPHYS_V 117-101"
    );
}

#[test]
fn test_series_spans_whole_term() {
    let t = table();
    let builder = EventBuilder::new(LocationResolver::new(&t, "Vancouver, BC", "Canada", "🌐 Online"));
    let event = builder.build(&parse_meeting_pattern(PATTERN).unwrap(), &meta());

    let dates = event.occurrences().unwrap();
    // 13 Mondays + 13 Wednesdays between Jan 8 and Apr 5
    assert_eq!(dates.len(), 26);
    assert_eq!(dates.first(), Some(&dt(2024, 1, 8, 9, 0)));
    assert_eq!(dates.last(), Some(&dt(2024, 4, 3, 9, 0)));
    assert!(
        dates
            .iter()
            .all(|d| matches!(d.weekday(), Weekday::Mon | Weekday::Wed))
    );
}

#[test]
fn test_single_day_range_yields_one_occurrence() {
    let empty = AddressTable::new();
    let builder = EventBuilder::new(LocationResolver::new(&empty, "X", "Y", "Online"));
    let p = parse_meeting_pattern("2024-03-06 - 2024-03-06 | Wed | 1:00 p.m. - 4:00 p.m.").unwrap();
    let event = builder.build(&p, &CourseMeta::default());
    assert_eq!(event.occurrences().unwrap(), vec![dt(2024, 3, 6, 13, 0)]);
    assert_eq!(event.end, dt(2024, 3, 6, 15, 50));
}

#[test]
fn test_custom_end_trim() {
    let empty = AddressTable::new();
    let builder =
        EventBuilder::new(LocationResolver::new(&empty, "X", "Y", "Online")).with_end_trim(0);
    let event = builder.build(&parse_meeting_pattern(PATTERN).unwrap(), &meta());
    assert_eq!(event.end, dt(2024, 1, 8, 10, 20));
    assert_eq!(event.recurrence.until, dt(2024, 4, 5, 10, 20));
}

#[test]
fn test_online_event_has_virtual_address() {
    let empty = AddressTable::new();
    let builder = EventBuilder::new(LocationResolver::new(&empty, "Vancouver, BC", "Canada", "🌐 Online"));
    let p = parse_meeting_pattern("2024-01-09 - 2024-04-04 | Tue Thu | 3:30 p.m. - 5:00 p.m.").unwrap();
    let event = builder.build(&p, &meta());
    assert_eq!(event.address_text, "Online - Virtual Class\nCanada");
    assert_eq!(event.location_display, "🌐 Online");
    assert_eq!(
        event.description,
        "Instructor: Jane Doe\n\n🌐 Online\n\nPHYS_V 117-101"
    );
    assert_eq!(event.rrule(), "FREQ=WEEKLY;BYDAY=TU,TH;UNTIL=20240404T165000");
}
