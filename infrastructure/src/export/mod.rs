//! Report sinks
//!
//! Adapters for the [`ReportSink`] port:
//! - [`DirectoryReportSink`] writes `<dir>/<filename>`
//! - [`StdoutReportSink`] prints the report text

use assessment_application::{Delivery, ReportSink, SinkError};
use assessment_domain::ExportedReport;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes exported reports into a directory, creating it if needed
#[derive(Debug, Clone)]
pub struct DirectoryReportSink {
    dir: PathBuf,
}

impl DirectoryReportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for DirectoryReportSink {
    fn deliver(&self, report: &ExportedReport) -> Result<Delivery, SinkError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| SinkError::unavailable(self.dir.display().to_string(), e.to_string()))?;

        let path = self.dir.join(&report.filename);
        std::fs::write(&path, &report.content)
            .map_err(|e| SinkError::unavailable(path.display().to_string(), e.to_string()))?;

        debug!("Wrote {} bytes to {}", report.content.len(), path.display());
        Ok(Delivery {
            location: path.display().to_string(),
            bytes: report.content.len(),
        })
    }
}

/// Prints exported reports on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReportSink;

impl ReportSink for StdoutReportSink {
    fn deliver(&self, report: &ExportedReport) -> Result<Delivery, SinkError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(&report.content)
            .and_then(|_| out.write_all(b"\n"))
            .and_then(|_| out.flush())
            .map_err(|e| SinkError::unavailable("<stdout>", e.to_string()))?;

        Ok(Delivery {
            location: "<stdout>".to_string(),
            bytes: report.content.len(),
        })
    }
}
