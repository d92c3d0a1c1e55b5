//! Text export of reports
//!
//! The exporter only produces bytes and a filename. Writing them somewhere
//! is the job of a report sink in an outer layer.

use super::entities::Report;
use super::parsing::ParsedReport;
use super::{DATE_FORMAT, FILENAME_DATE_FORMAT};
use crate::core::error::DomainError;

/// Default first line of an exported report
pub const DEFAULT_HEADER: &str = "--- Chatbot Interview Summary ---";

/// Default filename prefix, completed with `_<YYYYMMDD_HHMMSS>.txt`
pub const DEFAULT_FILE_PREFIX: &str = "bankruptcy_assessment_results";

/// MIME type of exported reports
pub const TEXT_PLAIN: &str = "text/plain";

/// An exported report ready to be handed to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: Vec<u8>,
}

impl ExportedReport {
    /// Content as text (always valid UTF-8 when produced by [`ReportExporter`])
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Renders reports to text and parses them back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExporter {
    header: String,
    file_prefix: String,
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl ReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different filename prefix; blank prefixes keep the default
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.trim().is_empty() {
            self.file_prefix = prefix;
        }
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// `<prefix>_<YYYYMMDD_HHMMSS>.txt`
    pub fn filename(&self, report: &Report) -> String {
        format!(
            "{}_{}.txt",
            self.file_prefix,
            report.timestamp.format(FILENAME_DATE_FORMAT)
        )
    }

    /// Render the report text
    pub fn render(&self, report: &Report) -> String {
        let date_line = format!("Date: {}", report.timestamp.format(DATE_FORMAT));
        let mut lines: Vec<&str> = Vec::with_capacity(report.answer_lines.len() + 5);

        lines.push(&self.header);
        lines.push(&date_line);
        lines.push("");

        if let Some(message) = &report.message {
            lines.push(message);
            lines.push("");
        }

        lines.extend(report.answer_lines.iter().map(String::as_str));
        lines.join("\n")
    }

    /// Render the report as a downloadable text file
    pub fn export(&self, report: &Report) -> ExportedReport {
        ExportedReport {
            filename: self.filename(report),
            mime_type: TEXT_PLAIN,
            content: self.render(report).into_bytes(),
        }
    }

    /// Parse text produced by [`render`](Self::render)
    pub fn parse(&self, text: &str) -> Result<ParsedReport, DomainError> {
        ParsedReport::parse(text, &self.header)
    }
}
