//! Assessment reports
//!
//! - [`Report`] — the immutable result of scoring one answer set
//! - [`ReportExporter`] — renders a report as a downloadable text file and
//!   parses that text back into a [`ParsedReport`]
//!
//! # Text format
//!
//! ```text
//! --- Chatbot Interview Summary ---
//! Date: 2025-01-31 14:05:09
//!
//! <recommendation message, omitted when there is none>
//!
//! - <question text>: YES
//! - <question text>: N/A
//! ```

pub mod entities;
pub mod export;
pub mod parsing;

pub use entities::Report;
pub use export::{ExportedReport, ReportExporter};
pub use parsing::ParsedReport;

/// Timestamp format used in the `Date:` line
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used in export filenames
pub const FILENAME_DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format a single answer line
pub fn answer_line(question_text: &str, answer: crate::answer::Answer) -> String {
    format!("- {}: {}", question_text, answer)
}
