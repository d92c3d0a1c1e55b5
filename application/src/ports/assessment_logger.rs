//! Port for structured assessment logging.
//!
//! Defines the [`AssessmentLogger`] trait for recording assessment events
//! (submissions, rejected submissions, exports) to an audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! recorded result in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured assessment event for logging.
pub struct AssessmentEvent {
    /// Event type identifier (e.g., "assessment_submitted", "report_exported").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AssessmentEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging assessment events to a structured log.
///
/// The `log` method is synchronous and non-fallible; logging failures
/// never interrupt scoring or export.
pub trait AssessmentLogger: Send + Sync {
    fn log(&self, event: AssessmentEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAssessmentLogger;

impl AssessmentLogger for NoAssessmentLogger {
    fn log(&self, _event: AssessmentEvent) {}
}
