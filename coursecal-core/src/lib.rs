//! Core types for coursecal.
//!
//! Converts course schedule rows (column name -> cell text) into an
//! iCalendar document of weekly recurring events:
//! - `decode` for spreadsheet serial dates and "H:MM AM/PM" times
//! - `pattern` for "Days | Start - End | Location" meeting patterns
//! - `event` for building one VEVENT per meeting pattern
//! - `calendar` for assembling the document and collecting diagnostics
//! - `recurrence` for expanding events into concrete class sessions

pub mod calendar;
pub mod config;
pub mod decode;
pub mod error;
pub mod event;
pub mod pattern;
pub mod recurrence;
pub mod row;

pub use calendar::{Conversion, Diagnostic, convert, render_document};
pub use config::{CalendarConfig, Config, InputConfig};
pub use error::{ConvertError, ConvertResult};
pub use event::CourseEvent;
pub use pattern::MeetingPattern;
pub use row::CourseRow;
