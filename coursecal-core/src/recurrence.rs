//! RRULE expansion for course events.
//!
//! Turns a weekly course event into the concrete class meetings it stands
//! for, e.g. to preview a term before importing the calendar.

use chrono::{Duration, NaiveDateTime};
use rrule::RRuleSet;

use crate::error::{ConvertError, ConvertResult};
use crate::event::{CourseEvent, format_floating};

/// One concrete class meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Build an iCalendar-format rule set for the rrule crate parser.
///
/// The rrule crate needs zoned datetimes, and `UNTIL` is UTC, so the
/// floating start is read as UTC.
fn build_rrule_string(event: &CourseEvent) -> String {
    format!(
        "DTSTART:{}Z\nRRULE:{}",
        format_floating(event.start),
        event.rrule()
    )
}

/// Expand an event into at most `limit` sessions, in chronological order.
pub fn expand_sessions(event: &CourseEvent, limit: u16) -> ConvertResult<Vec<Session>> {
    let rrule_set: RRuleSet = build_rrule_string(event).parse().map_err(|e| {
        ConvertError::Recurrence(format!(
            "Failed to parse RRULE for event '{}': {}",
            event.uid, e
        ))
    })?;

    let duration = event.end - event.start;
    let duration = if duration < Duration::zero() {
        Duration::zero()
    } else {
        duration
    };

    let result = rrule_set.all(limit);

    Ok(result
        .dates
        .iter()
        .map(|dt| {
            let start = dt.naive_utc();
            Session {
                start,
                end: start + duration,
            }
        })
        .collect())
}
