//! Export configuration from TOML (`[export]` section)

use assessment_domain::ReportExporter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw export configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Directory results files are written to (default: working directory)
    pub dir: Option<PathBuf>,
    /// Filename prefix (default: "bankruptcy_assessment_results")
    pub file_prefix: Option<String>,
}

impl FileExportConfig {
    pub fn to_exporter(&self) -> ReportExporter {
        match &self.file_prefix {
            Some(prefix) => ReportExporter::new().with_file_prefix(prefix.as_str()),
            None => ReportExporter::new(),
        }
    }

    pub fn dir_or_current(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export() {
        let config = FileExportConfig::default();
        assert_eq!(config.dir_or_current(), PathBuf::from("."));
        assert_eq!(
            config.to_exporter().file_prefix(),
            "bankruptcy_assessment_results"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let toml_str = r#"
[export]
dir = "results"
file_prefix = "intake"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.export.dir_or_current(), PathBuf::from("results"));
        assert_eq!(config.export.to_exporter().file_prefix(), "intake");
    }
}
