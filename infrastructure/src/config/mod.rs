//! Configuration file loading for yesno-assessment
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASSESSMENT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./assessment.toml` or `./.assessment.toml`
//! 4. Global: `<config_dir>/yesno-assessment/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileExportConfig, FileLogConfig, FileOutputConfig, FileOutputFormat,
    FileQuestionnaireConfig, FileScoringConfig,
};
pub use loader::ConfigLoader;
