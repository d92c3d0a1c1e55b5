//! Audit log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw audit log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL audit file; `~/` is expanded to the home directory
    pub audit_file: Option<String>,
}

impl FileLogConfig {
    /// Resolved audit file path, if auditing is enabled
    pub fn audit_path(&self) -> Option<PathBuf> {
        let raw = self.audit_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}
