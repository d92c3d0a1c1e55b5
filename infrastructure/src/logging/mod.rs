//! Logging infrastructure — structured assessment audit logging.
//!
//! Provides [`JsonlAssessmentLogger`], a JSONL file writer that implements
//! the [`AssessmentLogger`](assessment_application::AssessmentLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAssessmentLogger;
