//! Application layer for yesno-assessment
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.
//!
//! # Flow
//!
//! ```text
//! AnswerSource ──▶ SubmitAssessmentUseCase ──▶ Report ──▶ ExportReportUseCase ──▶ ReportSink
//!                        │                                      │
//!                        └──────────── AssessmentLogger ◀───────┘
//! ```

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_source::{AnswerSource, AnswerSourceError, PresetAnswers},
    assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger},
    clock::{Clock, FixedClock, SystemClock},
    report_sink::{Delivery, ReportSink, SinkError},
};
pub use use_cases::export_report::{ExportOutcome, ExportReportError, ExportReportUseCase};
pub use use_cases::run_assessment::{AssessmentOutcome, RunAssessmentError, RunAssessmentUseCase};
pub use use_cases::submit_assessment::{
    SubmitAssessmentError, SubmitAssessmentInput, SubmitAssessmentUseCase,
};
