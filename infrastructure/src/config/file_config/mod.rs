//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod export;
mod log;
mod output;
mod questionnaire;
mod scoring;

pub use export::FileExportConfig;
pub use log::FileLogConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use questionnaire::FileQuestionnaireConfig;
pub use scoring::FileScoringConfig;

use assessment_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Which questions to ask
    pub questionnaire: FileQuestionnaireConfig,
    /// Threshold and completeness rules
    pub scoring: FileScoringConfig,
    /// Results file settings
    pub export: FileExportConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks that can only run once the questionnaire is known (such as
    /// threshold reachability) are left to the caller.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.questionnaire.parse_preset().1);
        issues.extend(self.questionnaire.check_shadowed_preset());
        issues.extend(self.scoring.parse_threshold().1);

        issues
    }
}
