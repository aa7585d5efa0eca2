//! Terminal rendering for conversion results.
//!
//! Extension traits that add colored output to coursecal-core types using
//! owo_colors.

use coursecal_core::recurrence::Session;
use coursecal_core::{Conversion, CourseEvent, Diagnostic};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Diagnostic {
    fn render(&self) -> String {
        if self.is_row_level() {
            format!("{} {}", "✗".red(), self.to_string().red())
        } else {
            format!("{} {}", "!".yellow(), self)
        }
    }
}

impl Render for Conversion {
    /// Summary line followed by one line per diagnostic.
    fn render(&self) -> String {
        let summary = self.summary();
        let mut lines = vec![if self.is_clean() {
            summary.green().to_string()
        } else {
            summary.yellow().to_string()
        }];

        for diagnostic in &self.diagnostics {
            lines.push(format!("   {}", diagnostic.render()));
        }

        lines.join("\n")
    }
}

impl Render for CourseEvent {
    fn render(&self) -> String {
        match self.location {
            Some(ref location) => format!("{} {}", self.summary.bold(), location.dimmed()),
            None => self.summary.bold().to_string(),
        }
    }
}

impl Render for Session {
    fn render(&self) -> String {
        format!(
            "{}  {}-{}",
            self.start.format("%a %Y-%m-%d"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
