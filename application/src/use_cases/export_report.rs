//! Export Report use case.
//!
//! Renders a [`Report`] to its text file form and hands it to a
//! [`ReportSink`]. A sink failure is non-fatal: the report is untouched
//! and `execute` can simply be called again.

use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger};
use crate::ports::report_sink::{ReportSink, SinkError};
use assessment_domain::{ExportedReport, Report, ReportExporter};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportReportError {
    #[error("Could not export results: {0}")]
    SinkUnavailable(#[from] SinkError),
}

impl ExportReportError {
    /// Export errors never invalidate the report, so retrying is always allowed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExportReportError::SinkUnavailable(_))
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub filename: String,
    pub location: String,
    pub bytes: usize,
}

/// Use case for exporting a scored report.
#[derive(Clone)]
pub struct ExportReportUseCase {
    exporter: ReportExporter,
    sink: Arc<dyn ReportSink>,
    logger: Arc<dyn AssessmentLogger>,
}

impl ExportReportUseCase {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            exporter: ReportExporter::default(),
            sink,
            logger: Arc::new(NoAssessmentLogger),
        }
    }

    pub fn with_exporter(mut self, exporter: ReportExporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn AssessmentLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn exporter(&self) -> &ReportExporter {
        &self.exporter
    }

    /// Render without delivering.
    pub fn render(&self, report: &Report) -> ExportedReport {
        self.exporter.export(report)
    }

    /// Render the report and deliver it to the sink.
    pub fn execute(&self, report: &Report) -> Result<ExportOutcome, ExportReportError> {
        let exported = self.render(report);

        match self.sink.deliver(&exported) {
            Ok(delivery) => {
                info!(
                    "Exported {} ({} bytes) to {}",
                    exported.filename, delivery.bytes, delivery.location
                );
                self.logger.log(AssessmentEvent::new(
                    "report_exported",
                    serde_json::json!({
                        "filename": exported.filename,
                        "location": delivery.location,
                        "bytes": delivery.bytes,
                    }),
                ));
                Ok(ExportOutcome {
                    filename: exported.filename,
                    location: delivery.location,
                    bytes: delivery.bytes,
                })
            }
            Err(e) => {
                warn!("Export of {} failed: {}", exported.filename, e);
                self.logger.log(AssessmentEvent::new(
                    "report_export_failed",
                    serde_json::json!({
                        "filename": exported.filename,
                        "error": e.to_string(),
                    }),
                ));
                Err(e.into())
            }
        }
    }
}
