use coursecal_core::row::{END_DATE, MEETING_PATTERNS, SECTION, START_DATE};
use coursecal_core::{CalendarConfig, CourseRow, convert};
use pretty_assertions::assert_eq;

fn make_row(section: &str, start: &str, end: &str, patterns: &str) -> CourseRow {
    CourseRow::new()
        .with(SECTION, section)
        .with(START_DATE, start)
        .with(END_DATE, end)
        .with(MEETING_PATTERNS, patterns)
}

#[test]
fn single_course_document() {
    let rows = vec![make_row(
        "CS 101",
        "45672",
        "45820",
        "Monday/Wednesday/Friday | 9:00 AM - 9:50 AM | Hall 1",
    )];

    let conversion = convert(&rows, &CalendarConfig::default());

    assert!(conversion.is_clean(), "{:?}", conversion.diagnostics);
    assert_eq!(
        conversion.document,
        "\
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Rhodes College//Schedule Converter v1.0//EN

BEGIN:VEVENT
UID:cs101-20250115-0@rhodes.edu
SUMMARY:CS 101
LOCATION:Hall 1
DTSTART:20250115T090000
DTEND:20250115T095000
RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20250612T235959Z
END:VEVENT

END:VCALENDAR"
    );
}

#[test]
fn multi_row_document_keeps_row_then_pattern_order() {
    let rows = vec![
        make_row(
            "BIO 130-01 - Lab Biology",
            "45672",
            "45820",
            "Tuesday/Thursday | 11:00 AM - 12:15 PM | Frazier Jelke B\n\nWednesday | 1:00 PM - 3:50 PM",
        ),
        make_row("MUS 105", "2025-01-15", "5/2/2025", "Friday | 3:00 PM - 3:50 PM | Hardie"),
    ];

    let conversion = convert(&rows, &CalendarConfig::default());

    assert_eq!(
        conversion.document,
        "\
BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Rhodes College//Schedule Converter v1.0//EN

BEGIN:VEVENT
UID:bio130-01-labbiology-20250115-0@rhodes.edu
SUMMARY:BIO 130-01 - Lab Biology
LOCATION:Frazier Jelke B
DTSTART:20250115T110000
DTEND:20250115T121500
RRULE:FREQ=WEEKLY;BYDAY=TU,TH;UNTIL=20250612T235959Z
END:VEVENT

BEGIN:VEVENT
UID:bio130-01-labbiology-20250115-1@rhodes.edu
SUMMARY:BIO 130-01 - Lab Biology
DTSTART:20250115T130000
DTEND:20250115T155000
RRULE:FREQ=WEEKLY;BYDAY=WE;UNTIL=20250612T235959Z
END:VEVENT

BEGIN:VEVENT
UID:mus105-20250115-0@rhodes.edu
SUMMARY:MUS 105
LOCATION:Hardie
DTSTART:20250115T150000
DTEND:20250115T155000
RRULE:FREQ=WEEKLY;BYDAY=FR;UNTIL=20250502T235959Z
END:VEVENT

END:VCALENDAR"
    );
}

#[test]
fn vevent_count_matches_pattern_lines() {
    let rows = vec![
        make_row("A", "45672", "45820", "Monday | 9:00 AM - 9:50 AM"),
        make_row("B", "45672", "45820", ""),
        make_row(
            "C",
            "45672",
            "45820",
            "Monday | 9:00 AM - 9:50 AM\nTuesday | 9:00 AM - 9:50 AM\n\n\nFriday | 1:00 PM - 2:00 PM",
        ),
    ];

    let expected: usize = rows.iter().map(|r| r.meeting_pattern_lines().len()).sum();
    let conversion = convert(&rows, &CalendarConfig::default());

    let blocks = conversion
        .document
        .lines()
        .filter(|l| *l == "BEGIN:VEVENT")
        .count();
    assert_eq!(blocks, expected);
    assert_eq!(blocks, 4);
}

#[test]
fn conversion_is_deterministic() {
    let rows = vec![make_row(
        "CS 101",
        "45672",
        "45820",
        "Monday | 9:00 AM - 9:50 AM\nThursday | 2:00 PM - 2:50 PM | Online",
    )];

    let first = convert(&rows, &CalendarConfig::default());
    let second = convert(&rows, &CalendarConfig::default());

    assert_eq!(first.document, second.document);
}

#[test]
fn partial_failures_still_produce_document() {
    let rows = vec![
        make_row("CS 101", "", "45820", "Monday | 9:00 AM - 9:50 AM"),
        make_row("CS 102", "45672", "45820", "Monday | noon - 1:00 PM\nTuesday | 9:00 AM - 9:50 AM"),
        make_row("CS 103", "45672", "45820", "Wednesday | 9:00 AM - 9:50 AM"),
    ];

    let conversion = convert(&rows, &CalendarConfig::default());

    assert_eq!(conversion.events.len(), 2);
    assert_eq!(conversion.diagnostics.len(), 2);
    assert_eq!(conversion.summary(), "2 of 3 rows converted, 2 warnings");
    assert!(conversion.document.starts_with("BEGIN:VCALENDAR\n"));
    assert!(conversion.document.ends_with("\nEND:VCALENDAR"));
}
