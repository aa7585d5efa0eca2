//! Calendar events built from course rows.

use chrono::{NaiveDate, NaiveDateTime};

use crate::decode::format_date;
use crate::pattern::MeetingPattern;

/// UID prefix used when a row has no section identifier.
pub const UNKNOWN_SECTION: &str = "unknown";

/// Time suffix appended to the term end date in `UNTIL=`.
const UNTIL_TIME: &str = "T235959Z";

/// One weekly recurring meeting of a course section.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEvent {
    pub uid: String,
    pub summary: String,
    pub location: Option<String>,
    /// First occurrence start (term start date + pattern start time)
    pub start: NaiveDateTime,
    /// First occurrence end. The date part is the term *start* date as well;
    /// later weeks come from the recurrence rule.
    pub end: NaiveDateTime,
    /// `BYDAY` codes in listing order
    pub days: Vec<String>,
    /// Last day of the term (`UNTIL` date)
    pub until: NaiveDate,
}

impl CourseEvent {
    /// Build the event for meeting pattern `index` of a section.
    pub fn build(
        section: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        index: usize,
        pattern: &MeetingPattern,
        uid_domain: &str,
    ) -> Self {
        CourseEvent {
            uid: make_uid(section, start_date, index, uid_domain),
            summary: section.to_string(),
            location: pattern.location.clone(),
            start: start_date.and_time(pattern.start),
            end: start_date.and_time(pattern.end),
            days: pattern.days.clone(),
            until: end_date,
        }
    }

    /// The `RRULE` value (without the property name).
    pub fn rrule(&self) -> String {
        format!(
            "FREQ=WEEKLY;BYDAY={};UNTIL={}{}",
            self.days.join(","),
            format_date(self.until),
            UNTIL_TIME
        )
    }

    /// Content lines of the VEVENT, without the BEGIN/END markers.
    pub fn content_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(6);

        lines.push(format!("UID:{}", self.uid));
        lines.push(format!("SUMMARY:{}", self.summary));
        if let Some(ref location) = self.location {
            lines.push(format!("LOCATION:{location}"));
        }
        lines.push(format!("DTSTART:{}", format_floating(self.start)));
        lines.push(format!("DTEND:{}", format_floating(self.end)));
        lines.push(format!("RRULE:{}", self.rrule()));

        lines
    }
}

/// Floating DATE-TIME (no Z, no TZID).
pub fn format_floating(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// `<section>-<start date>-<index>@<domain>`, whitespace removed, lowercased.
///
/// Two sections with the same listing and start date collide; the rows are
/// assumed to be distinct.
pub fn make_uid(section: &str, start_date: NaiveDate, index: usize, domain: &str) -> String {
    let compact: String = section.chars().filter(|c| !c.is_whitespace()).collect();
    let prefix = if compact.is_empty() {
        UNKNOWN_SECTION
    } else {
        compact.as_str()
    };

    format!("{prefix}-{}-{index}@{domain}", format_date(start_date)).to_lowercase()
}
