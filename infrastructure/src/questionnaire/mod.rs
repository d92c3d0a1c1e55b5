//! Questionnaire files
//!
//! Loads a [`Questionnaire`] from TOML so new question sets need no code:
//!
//! ```toml
//! title = "Debt Screening"
//! intro = "Answer each question with yes or no."
//! positive_message = "Please contact our office."
//! negative_message = "Your answers have been recorded."
//!
//! [[questions]]
//! id = "q1"
//! text = "Do you own a home?"
//! note = "Homestead exemptions may apply."
//! ```

use assessment_domain::{DomainError, Question, Questionnaire, RecommendationMessages};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a questionnaire file
#[derive(Error, Debug)]
pub enum QuestionnaireFileError {
    #[error("Could not read questionnaire file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse questionnaire file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid questionnaire: {0}")]
    Invalid(#[from] DomainError),
}

/// Raw questionnaire file structure
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireFile {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub positive_message: Option<String>,
    #[serde(default)]
    pub negative_message: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

fn default_title() -> String {
    "Assessment".to_string()
}

impl QuestionnaireFile {
    /// Parse questionnaire TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Validate and convert into a domain questionnaire
    pub fn into_questionnaire(self) -> Result<Questionnaire, DomainError> {
        let defaults = RecommendationMessages::default();
        let messages = RecommendationMessages::new(
            self.positive_message.unwrap_or(defaults.positive),
            self.negative_message.unwrap_or(defaults.negative),
        );

        let mut questionnaire =
            Questionnaire::new(self.title, self.questions)?.with_messages(messages)?;
        if let Some(intro) = self.intro {
            questionnaire = questionnaire.with_intro(intro);
        }
        Ok(questionnaire)
    }
}

/// Loads questionnaires from disk
pub struct QuestionnaireLoader;

impl QuestionnaireLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<Questionnaire, QuestionnaireFileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QuestionnaireFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file =
            QuestionnaireFile::from_toml_str(&text).map_err(|source| QuestionnaireFileError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let questionnaire = file.into_questionnaire()?;
        debug!(
            "Loaded questionnaire '{}' with {} questions from {}",
            questionnaire.title(),
            questionnaire.len(),
            path.display()
        );
        Ok(questionnaire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
title = "Debt Screening"
positive_message = "Please contact our office."

[[questions]]
id = "home"
text = "Do you own a home?"
note = "Homestead exemptions may apply."

[[questions]]
id = "car"
text = "Do you own a vehicle?"
"#;

    #[test]
    fn test_parse_questionnaire_file() {
        let questionnaire = QuestionnaireFile::from_toml_str(SAMPLE)
            .unwrap()
            .into_questionnaire()
            .unwrap();

        assert_eq!(questionnaire.title(), "Debt Screening");
        assert_eq!(questionnaire.len(), 2);
        assert_eq!(
            questionnaire.questions()[0].note(),
            Some("Homestead exemptions may apply.")
        );
        assert_eq!(
            questionnaire.messages().positive,
            "Please contact our office."
        );
        // Missing message falls back to the default text
        assert_eq!(
            questionnaire.messages().negative,
            RecommendationMessages::default().negative
        );
    }

    #[test]
    fn test_empty_questions_rejected() {
        let err = QuestionnaireFile::from_toml_str("title = \"Nothing\"")
            .unwrap()
            .into_questionnaire()
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyQuestionnaire);
    }

    #[test]
    fn test_blank_text_rejected() {
        let text = "[[questions]]\nid = \"a\"\ntext = \"  \"\n";
        let err = QuestionnaireFile::from_toml_str(text)
            .unwrap()
            .into_questionnaire()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_multiline_message_rejected() {
        let text = "positive_message = \"\"\"\nCall us.\nWe can help.\"\"\"\n\
                    [[questions]]\nid = \"a\"\ntext = \"Own a home?\"\n";
        let err = QuestionnaireFile::from_toml_str(text)
            .unwrap()
            .into_questionnaire()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidMessages(_)));
    }

    #[test]
    fn test_identical_messages_rejected() {
        let text = "positive_message = \"Recorded.\"\nnegative_message = \"Recorded.\"\n\
                    [[questions]]\nid = \"a\"\ntext = \"Own a home?\"\n";
        let err = QuestionnaireFile::from_toml_str(text)
            .unwrap()
            .into_questionnaire()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidMessages(_)));
    }

    #[test]
    fn test_multiline_question_rejected() {
        let text = "[[questions]]\nid = \"a\"\ntext = \"\"\"\nOwn a\nhome?\"\"\"\n";
        let err = QuestionnaireFile::from_toml_str(text)
            .unwrap()
            .into_questionnaire()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_loaded_questionnaire_report_round_trips() {
        use assessment_domain::{
            Answer, AnswerSet, Recommendation, Report, ReportExporter, ScoringPolicy,
            ThresholdRule,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let questionnaire = QuestionnaireLoader::load(&path).unwrap();

        let answers = AnswerSet::for_questionnaire(&questionnaire)
            .with("home", Answer::Yes)
            .unwrap()
            .with("car", Answer::No)
            .unwrap();
        let policy = ScoringPolicy::new(ThresholdRule::AtLeast(1));
        let timestamp = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let report = Report::compute(&questionnaire, &answers, &policy, timestamp).unwrap();

        let exporter = ReportExporter::new();
        let exported = exporter.export(&report);
        let parsed = exporter.parse(&exported.text()).unwrap();

        assert_eq!(parsed.timestamp, report.timestamp);
        assert_eq!(parsed.yes_count(), report.yes_count);
        assert_eq!(parsed.no_count(), report.no_count);
        assert_eq!(
            parsed.recommendation(questionnaire.messages()),
            Some(Recommendation::Positive)
        );
        assert_eq!(parsed.recommendation(questionnaire.messages()), report.recommendation);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let questionnaire = QuestionnaireLoader::load(&path).unwrap();
        assert_eq!(questionnaire.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = QuestionnaireLoader::load("/no/such/questions.toml").unwrap_err();
        assert!(matches!(err, QuestionnaireFileError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[questions]\nid = ").unwrap();

        let err = QuestionnaireLoader::load(&path).unwrap_err();
        assert!(matches!(err, QuestionnaireFileError::Parse { .. }));
    }
}
