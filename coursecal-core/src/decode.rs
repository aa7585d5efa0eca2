//! Decoders for spreadsheet-native cell encodings.
//!
//! Spreadsheets store dates as serial day counts and course listings write
//! times as "H:MM AM/PM" text. These helpers turn both into the compact
//! `YYYYMMDD` / `HHMMSS` tokens used by iCalendar.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::error::{ConvertError, ConvertResult};

/// Format a date as an iCalendar DATE value (`YYYYMMDD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Format a time as the time part of an iCalendar DATE-TIME (`HHMMSS`).
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H%M%S").to_string()
}

/// Largest serial a spreadsheet can hold (9999-12-31).
pub const MAX_SERIAL_DATE: i64 = 2_958_465;

/// Convert a spreadsheet serial date to a calendar date.
///
/// The date is `serial - 1` days after 1899-12-31. For every serial past
/// the 1900 leap-day quirk (61 and up) this agrees with the dates
/// spreadsheets display. Serials outside `1..=MAX_SERIAL_DATE` are rejected.
pub fn serial_to_date(serial: i64) -> ConvertResult<NaiveDate> {
    let out_of_range = || ConvertError::MalformedDate(serial.to_string());

    if !(1..=MAX_SERIAL_DATE).contains(&serial) {
        return Err(out_of_range());
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 31).ok_or_else(out_of_range)?;
    let offset = serial
        .checked_sub(1)
        .and_then(Duration::try_days)
        .ok_or_else(out_of_range)?;

    epoch.checked_add_signed(offset).ok_or_else(out_of_range)
}

/// Convert a spreadsheet serial date to a `YYYYMMDD` token.
pub fn decode_serial_date(serial: i64) -> ConvertResult<String> {
    serial_to_date(serial).map(format_date)
}

/// Decode a date cell.
///
/// Date columns arrive either as serial numbers (`45672`, or `45672.0`
/// when the reader stringified a float) or as already formatted text
/// (`2025-01-15`, `1/15/2025`). Text dates need a four-digit year.
pub fn decode_date_field(text: &str) -> ConvertResult<NaiveDate> {
    let text = text.trim();

    if let Ok(serial) = text.parse::<i64>() {
        return serial_to_date(serial);
    }

    if let Ok(serial) = text.parse::<f64>() {
        if serial.is_finite() && serial.fract() == 0.0 {
            return serial_to_date(serial as i64);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
        .filter(|date| date.year() >= 1000)
        .ok_or_else(|| ConvertError::MalformedDate(text.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Meridiem {
    Am,
    Pm,
}

/// Split a trailing AM/PM marker off a clock string.
fn split_meridiem(text: &str) -> (&str, Option<Meridiem>) {
    let len = text.len();
    if len < 2 || !text.is_char_boundary(len - 2) {
        return (text, None);
    }

    let (clock, suffix) = text.split_at(len - 2);
    if suffix.eq_ignore_ascii_case("am") {
        (clock.trim_end(), Some(Meridiem::Am))
    } else if suffix.eq_ignore_ascii_case("pm") {
        (clock.trim_end(), Some(Meridiem::Pm))
    } else {
        (text, None)
    }
}

/// Parse a clock time such as `9:00 AM`, `12:50pm` or `14:30`.
///
/// Empty input is midnight. Without an AM/PM marker the hour is read as
/// 24-hour time.
pub fn parse_clock_time(text: &str) -> ConvertResult<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(NaiveTime::MIN);
    }

    let malformed = || ConvertError::MalformedTime(text.to_string());

    let (clock, meridiem) = split_meridiem(text);
    let (hour, minute) = clock.split_once(':').ok_or_else(malformed)?;
    let mut hour: u32 = hour.trim().parse().map_err(|_| malformed())?;
    let minute: u32 = minute.trim().parse().map_err(|_| malformed())?;

    if let Some(meridiem) = meridiem {
        if !(1..=12).contains(&hour) {
            return Err(malformed());
        }
        match meridiem {
            Meridiem::Am if hour == 12 => hour = 0,
            Meridiem::Pm if hour < 12 => hour += 12,
            _ => {}
        }
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Convert a clock time string to an `HHMMSS` token.
pub fn decode_clock_time(text: &str) -> ConvertResult<String> {
    parse_clock_time(text).map(format_time)
}
