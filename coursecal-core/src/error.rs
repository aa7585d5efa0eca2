//! Error types for course schedule conversion.

use thiserror::Error;

/// Errors that can occur while converting course rows to calendar events.
///
/// Pattern- and time-level errors only cost the offending meeting pattern
/// line; field and date errors cost the whole row. None of them abort a
/// conversion, see [`crate::calendar::convert`].
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Malformed meeting pattern '{line}': {reason}")]
    MalformedPattern { line: String, reason: String },

    #[error("Malformed time '{0}': expected H:MM with optional AM/PM")]
    MalformedTime(String),

    #[error("Malformed date '{0}': expected a serial number, YYYY-MM-DD or M/D/YYYY")]
    MalformedDate(String),

    #[error("Missing required field '{0}'")]
    MissingField(String),

    #[error("Recurrence error: {0}")]
    Recurrence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No course rows to convert")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub(crate) fn pattern(line: &str, reason: impl Into<String>) -> Self {
        ConvertError::MalformedPattern {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
