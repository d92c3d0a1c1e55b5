//! Report sink port: where exported report bytes end up.
//!
//! The domain only renders an in-memory [`ExportedReport`]. Writing it to
//! disk, stdout or a download response is an adapter concern.

use assessment_domain::ExportedReport;
use thiserror::Error;

/// Error returned when the sink cannot accept a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Report sink unavailable ({target}): {reason}")]
    Unavailable { target: String, reason: String },
}

impl SinkError {
    pub fn unavailable(target: impl Into<String>, reason: impl Into<String>) -> Self {
        SinkError::Unavailable {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Where and how much a sink wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Human-readable location (a path, `<stdout>`, ...)
    pub location: String,
    pub bytes: usize,
}

/// Port for delivering an exported report.
pub trait ReportSink: Send + Sync {
    fn deliver(&self, report: &ExportedReport) -> Result<Delivery, SinkError>;
}
