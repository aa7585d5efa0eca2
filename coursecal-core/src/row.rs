//! Course rows as handed over by tabular ingestion.

use std::collections::HashMap;

/// Column holding the course listing, e.g. "CS 101-01 - Intro to CS".
pub const SECTION: &str = "Section";
/// Column holding the first day of the term for this section.
pub const START_DATE: &str = "Start Date";
/// Column holding the last day of the term for this section.
pub const END_DATE: &str = "End Date";
/// Column holding newline-separated "Days | Time | Location" lines.
pub const MEETING_PATTERNS: &str = "Meeting Patterns";

/// One spreadsheet row, keyed by header name.
///
/// Values are trimmed on insertion. Reading a column that is not present
/// yields the empty string; [`CourseRow::has`] tells the two apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseRow {
    fields: HashMap<String, String>,
}

impl CourseRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value (trimmed).
    pub fn insert(&mut self, column: impl Into<String>, value: impl AsRef<str>) {
        self.fields
            .insert(column.into(), value.as_ref().trim().to_string());
    }

    /// Builder-style [`CourseRow::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.insert(column, value);
        self
    }

    /// Value of a column, or "" when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Whether the column exists at all (it may still be blank).
    pub fn has(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// True when every value in the row is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }

    pub fn section(&self) -> &str {
        self.get(SECTION)
    }

    /// The non-empty lines of the "Meeting Patterns" column, in order.
    ///
    /// A missing column is zero lines.
    pub fn meeting_pattern_lines(&self) -> Vec<&str> {
        self.get(MEETING_PATTERNS)
            .split(['\n', '\r'])
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for CourseRow
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = CourseRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_trimmed_and_missing_columns_are_blank() {
        let row = CourseRow::new().with(SECTION, "  CS 101 \t");

        assert_eq!(row.section(), "CS 101");
        assert_eq!(row.get(START_DATE), "");
        assert!(row.has(SECTION));
        assert!(!row.has(START_DATE));
    }

    #[test]
    fn pattern_lines_skip_blank_runs() {
        let row = CourseRow::new().with(
            MEETING_PATTERNS,
            "Monday | 9:00 AM - 9:50 AM\n\n\r\nWednesday | 1:00 PM - 2:15 PM | Lab\n  \n",
        );

        assert_eq!(
            row.meeting_pattern_lines(),
            vec![
                "Monday | 9:00 AM - 9:50 AM",
                "Wednesday | 1:00 PM - 2:15 PM | Lab"
            ]
        );
    }

    #[test]
    fn missing_pattern_column_has_no_lines() {
        let row = CourseRow::new().with(SECTION, "CS 101");
        assert!(row.meeting_pattern_lines().is_empty());
    }

    #[test]
    fn blank_row_detection() {
        let row: CourseRow = [(SECTION, " "), (START_DATE, "")].into_iter().collect();
        assert!(row.is_blank());
        assert!(!row.clone().with(END_DATE, "45820").is_blank());
    }
}
