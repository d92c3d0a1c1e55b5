//! Questionnaire selection from TOML (`[questionnaire]` section)
//!
//! ```toml
//! [questionnaire]
//! preset = "iowa"              # or "general"
//! file = "my_questions.toml"   # optional, takes priority over preset
//! ```

use assessment_domain::{ConfigIssue, ConfigIssueCode, Preset};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw questionnaire configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionnaireConfig {
    /// Built-in preset name
    pub preset: String,
    /// Path to a questionnaire TOML file
    pub file: Option<PathBuf>,
}

impl Default for FileQuestionnaireConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default().to_string(),
            file: None,
        }
    }
}

impl FileQuestionnaireConfig {
    /// Parse the preset name, falling back to the default preset
    pub fn parse_preset(&self) -> (Preset, Vec<ConfigIssue>) {
        match self.preset.parse::<Preset>() {
            Ok(preset) => (preset, vec![]),
            Err(_) => (
                Preset::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "questionnaire.preset".to_string(),
                        value: self.preset.clone(),
                        valid_values: Preset::ALL.iter().map(|p| p.to_string()).collect(),
                    },
                    format!(
                        "questionnaire.preset: unknown value '{}', falling back to '{}'",
                        self.preset,
                        Preset::default()
                    ),
                )],
            ),
        }
    }

    /// Warn when a non-default preset is set alongside a file
    pub fn check_shadowed_preset(&self) -> Option<ConfigIssue> {
        let default_preset = Preset::default().to_string();
        if self.file.is_some() && !self.preset.eq_ignore_ascii_case(&default_preset) {
            Some(ConfigIssue::warning(
                ConfigIssueCode::ShadowedPreset {
                    preset: self.preset.clone(),
                },
                format!(
                    "questionnaire.preset '{}' is ignored because questionnaire.file is set",
                    self.preset
                ),
            ))
        } else {
            None
        }
    }
}
