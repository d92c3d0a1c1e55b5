//! `[output]` section: how a scored assessment is shown on the console
//!
//! ```toml
//! [output]
//! format = "summary"   # full | summary | json; `--output` wins
//! color = false        # same effect as `--no-color`
//! ```
//!
//! The exported results file is plain text regardless of these settings.

use assessment_domain::OutputFormat;
use serde::{Deserialize, Serialize};

pub use assessment_domain::OutputFormat as FileOutputFormat;

/// Console presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Result view when `--output` is not given; `None` means full
    pub format: Option<OutputFormat>,
    /// Colored recommendation and prompts
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_missing_section_keeps_full_colored_output() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format.unwrap_or_default(), OutputFormat::Full);
        assert!(config.output.color);
    }

    #[test]
    fn test_json_results_without_color() {
        let toml_str = r#"
[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let toml_str = "[output]\nformat = \"synthesis\"\n";
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }
}
