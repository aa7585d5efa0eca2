//! Calendar document assembly.
//!
//! [`convert`] is the whole pipeline: every row is decoded, each of its
//! meeting pattern lines becomes one VEVENT, and failures are collected as
//! [`Diagnostic`]s instead of aborting the run.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::decode::decode_date_field;
use crate::error::{ConvertError, ConvertResult};
use crate::event::CourseEvent;
use crate::pattern::MeetingPattern;
use crate::row::{CourseRow, END_DATE, SECTION, START_DATE};

/// A problem found while converting, located by row and pattern line.
///
/// Both indices are zero-based; `Display` shows them one-based.
#[derive(Debug)]
pub struct Diagnostic {
    pub row: Option<usize>,
    pub line: Option<usize>,
    pub error: ConvertError,
}

impl Diagnostic {
    fn document(error: ConvertError) -> Self {
        Diagnostic {
            row: None,
            line: None,
            error,
        }
    }

    fn row(row: usize, error: ConvertError) -> Self {
        Diagnostic {
            row: Some(row),
            line: None,
            error,
        }
    }

    fn pattern(row: usize, line: usize, error: ConvertError) -> Self {
        Diagnostic {
            row: Some(row),
            line: Some(line),
            error,
        }
    }

    /// Whether this diagnostic dropped the whole row (rather than one line).
    pub fn is_row_level(&self) -> bool {
        self.row.is_some() && self.line.is_none()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, self.line) {
            (Some(row), Some(line)) => {
                write!(f, "row {}, meeting pattern {}: {}", row + 1, line + 1, self.error)
            }
            (Some(row), None) => write!(f, "row {}: {}", row + 1, self.error),
            _ => write!(f, "{}", self.error),
        }
    }
}

/// Result of converting a batch of rows.
#[derive(Debug)]
pub struct Conversion {
    /// The rendered calendar (always a complete envelope)
    pub document: String,
    pub events: Vec<CourseEvent>,
    pub diagnostics: Vec<Diagnostic>,
    pub rows_total: usize,
    /// Rows that were not dropped by a row-level error
    pub rows_converted: usize,
}

impl Conversion {
    /// "N of M rows converted, K warnings"
    pub fn summary(&self) -> String {
        let warnings = self.diagnostics.len();
        format!(
            "{} of {} rows converted, {} warning{}",
            self.rows_converted,
            self.rows_total,
            warnings,
            if warnings == 1 { "" } else { "s" }
        )
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Convert course rows into a calendar document.
///
/// Events keep row order, then pattern-line order within a row. Nothing here
/// fails the whole conversion: bad rows and lines are skipped and reported.
pub fn convert(rows: &[CourseRow], config: &CalendarConfig) -> Conversion {
    let mut events = Vec::new();
    let mut diagnostics = Vec::new();
    let mut rows_converted = 0;

    if rows.is_empty() {
        warn!("no course rows to convert");
        diagnostics.push(Diagnostic::document(ConvertError::EmptyInput));
    }

    for (index, row) in rows.iter().enumerate() {
        match convert_row(index, row, config, &mut events, &mut diagnostics) {
            Ok(()) => rows_converted += 1,
            Err(error) => {
                let diagnostic = Diagnostic::row(index, error);
                warn!("skipping {diagnostic}");
                diagnostics.push(diagnostic);
            }
        }
    }

    let document = render_document(&events, config);

    Conversion {
        document,
        events,
        diagnostics,
        rows_total: rows.len(),
        rows_converted,
    }
}

/// Decode one row and push an event per meeting pattern line.
///
/// Returns `Err` only for row-level problems; bad pattern lines are recorded
/// in `diagnostics` and the rest of the row still converts.
fn convert_row(
    index: usize,
    row: &CourseRow,
    config: &CalendarConfig,
    events: &mut Vec<CourseEvent>,
    diagnostics: &mut Vec<Diagnostic>,
) -> ConvertResult<()> {
    if !row.has(SECTION) {
        return Err(ConvertError::MissingField(SECTION.to_string()));
    }
    let start_date = required_date(row, START_DATE)?;
    let end_date = required_date(row, END_DATE)?;

    let lines = row.meeting_pattern_lines();
    debug!(
        row = index + 1,
        section = row.section(),
        patterns = lines.len(),
        "converting row"
    );

    for (line_index, line) in lines.into_iter().enumerate() {
        match MeetingPattern::parse(line) {
            Ok(Some(pattern)) => {
                let event = CourseEvent::build(
                    row.section(),
                    start_date,
                    end_date,
                    line_index,
                    &pattern,
                    &config.uid_domain,
                );
                debug!(uid = %event.uid, "built event");
                events.push(event);
            }
            Ok(None) => {}
            Err(error) => {
                let diagnostic = Diagnostic::pattern(index, line_index, error);
                warn!("skipping {diagnostic}");
                diagnostics.push(diagnostic);
            }
        }
    }

    Ok(())
}

fn required_date(row: &CourseRow, column: &str) -> ConvertResult<NaiveDate> {
    let value = row.get(column);
    if value.is_empty() {
        return Err(ConvertError::MissingField(column.to_string()));
    }
    decode_date_field(value)
}

/// Render events inside the VCALENDAR envelope.
///
/// Lines are joined with `\n`; a blank line follows the header and every
/// VEVENT block.
pub fn render_document(events: &[CourseEvent], config: &CalendarConfig) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", config.prodid()),
        String::new(),
    ];

    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.extend(event.content_lines());
        lines.push("END:VEVENT".to_string());
        lines.push(String::new());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}
