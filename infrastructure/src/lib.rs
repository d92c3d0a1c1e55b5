//! Infrastructure layer for yesno-assessment
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod answers;
pub mod config;
pub mod export;
pub mod logging;
pub mod questionnaire;

// Re-export commonly used types
pub use answers::FileAnswerSource;
pub use config::{
    ConfigLoader, FileConfig, FileExportConfig, FileLogConfig, FileOutputConfig,
    FileOutputFormat, FileQuestionnaireConfig, FileScoringConfig,
};
pub use export::{DirectoryReportSink, StdoutReportSink};
pub use logging::JsonlAssessmentLogger;
pub use questionnaire::{QuestionnaireFile, QuestionnaireFileError, QuestionnaireLoader};
