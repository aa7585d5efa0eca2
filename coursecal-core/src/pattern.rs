//! Meeting pattern parsing.
//!
//! A meeting pattern line looks like
//! `Monday/Wednesday/Friday | 12:00 PM - 12:50 PM | Briggs 108 Classroom`.
//! The location segment is optional.

use chrono::NaiveTime;

use crate::decode::{format_time, parse_clock_time};
use crate::error::{ConvertError, ConvertResult};

/// Decoded form of one meeting pattern line.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingPattern {
    /// Two-letter iCalendar day codes (`MO`, `WE`, ...) in listing order
    pub days: Vec<String>,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: Option<String>,
}

impl MeetingPattern {
    /// Parse one line. Whitespace-only lines carry no meeting and yield `None`.
    pub fn parse(line: &str) -> ConvertResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let segments: Vec<&str> = line.split('|').map(str::trim).collect();
        if segments.len() < 2 {
            return Err(ConvertError::pattern(
                line,
                "expected 'Days | Start - End [| Location]'",
            ));
        }

        let days = parse_days(segments[0]);
        if days.is_empty() {
            return Err(ConvertError::pattern(line, "no meeting days"));
        }

        let (start, end) = parse_time_range(segments[1])?;

        let location = segments
            .get(2)
            .filter(|loc| !loc.is_empty())
            .map(|loc| loc.to_string());

        Ok(Some(MeetingPattern {
            days,
            start,
            end,
            location,
        }))
    }

    /// Comma-joined day codes, as used in `BYDAY=`.
    pub fn byday(&self) -> String {
        self.days.join(",")
    }

    pub fn start_token(&self) -> String {
        format_time(self.start)
    }

    pub fn end_token(&self) -> String {
        format_time(self.end)
    }
}

/// `monday/WEDNESDAY / Friday` -> `["MO", "WE", "FR"]`
fn parse_days(segment: &str) -> Vec<String> {
    segment
        .split('/')
        .map(str::trim)
        .filter(|day| !day.is_empty())
        .map(|day| day.chars().take(2).collect::<String>().to_uppercase())
        .collect()
}

/// `9:00 AM - 9:50 AM` -> (09:00, 09:50)
fn parse_time_range(segment: &str) -> ConvertResult<(NaiveTime, NaiveTime)> {
    let (start, end) = segment
        .split_once('-')
        .ok_or_else(|| ConvertError::MalformedTime(segment.to_string()))?;

    Ok((parse_clock_time(start)?, parse_clock_time(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_full_pattern() {
        let pattern =
            MeetingPattern::parse("Monday/Wednesday/Friday | 12:00 PM - 12:50 PM | Briggs 108 Classroom")
                .unwrap()
                .unwrap();

        assert_eq!(pattern.days, vec!["MO", "WE", "FR"]);
        assert_eq!(pattern.start, time(12, 0));
        assert_eq!(pattern.end, time(12, 50));
        assert_eq!(pattern.location.as_deref(), Some("Briggs 108 Classroom"));
        assert_eq!(pattern.byday(), "MO,WE,FR");
        assert_eq!(pattern.start_token(), "120000");
        assert_eq!(pattern.end_token(), "125000");
    }

    #[test]
    fn day_names_are_normalized_regardless_of_case_and_spacing() {
        let pattern = MeetingPattern::parse("monday/WEDNESDAY / Friday | 9:00 AM - 9:50 AM | Hall 1")
            .unwrap()
            .unwrap();

        assert_eq!(pattern.days, vec!["MO", "WE", "FR"]);
        assert_eq!(pattern.start_token(), "090000");
        assert_eq!(pattern.end_token(), "095000");
    }

    #[test]
    fn repeated_days_are_kept_in_order() {
        let pattern = MeetingPattern::parse("Thursday/Tuesday/Thursday | 2:00 PM - 3:15 PM")
            .unwrap()
            .unwrap();
        assert_eq!(pattern.days, vec!["TH", "TU", "TH"]);
    }

    #[test]
    fn location_is_optional() {
        let pattern = MeetingPattern::parse("Tuesday/Thursday | 2:00 PM - 3:15 PM")
            .unwrap()
            .unwrap();
        assert_eq!(pattern.location, None);

        let pattern = MeetingPattern::parse("Tuesday | 2:00 PM - 3:15 PM |   ")
            .unwrap()
            .unwrap();
        assert_eq!(pattern.location, None);
    }

    #[test]
    fn blank_line_is_no_pattern() {
        assert_eq!(MeetingPattern::parse("   ").unwrap(), None);
    }

    #[test]
    fn single_segment_is_malformed() {
        let err = MeetingPattern::parse("Monday 9:00 AM").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedPattern { .. }));
    }

    #[test]
    fn missing_days_is_malformed() {
        let err = MeetingPattern::parse(" | 9:00 AM - 9:50 AM").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedPattern { .. }));
    }

    #[test]
    fn bad_times_are_malformed_time() {
        let err = MeetingPattern::parse("Monday | TBA").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedTime(_)));

        let err = MeetingPattern::parse("Monday | 9:00 AM - later").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedTime(_)));
    }
}
