//! Answers files
//!
//! [`FileAnswerSource`] implements the [`AnswerSource`] port for scripted,
//! non-interactive runs. The file is a flat map from question id to answer,
//! in TOML or JSON (chosen by extension):
//!
//! ```toml
//! q1 = "yes"
//! q2 = "no"
//! q3 = true      # booleans work too
//! q4 = "skip"    # explicitly unanswered
//! ```

use assessment_application::{AnswerSource, AnswerSourceError};
use assessment_domain::{Answer, AnswerSet, Questionnaire, ScoringPolicy};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A raw answer value as written in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Flag(bool),
    Text(String),
}

impl RawAnswer {
    fn to_answer(&self) -> Result<Answer, String> {
        match self {
            RawAnswer::Flag(value) => Ok(Answer::from(*value)),
            RawAnswer::Text(text) => text.parse::<Answer>().map_err(|e| e.to_string()),
        }
    }
}

/// Answer source that reads a TOML or JSON answers file
#[derive(Debug, Clone)]
pub struct FileAnswerSource {
    path: PathBuf,
}

impl FileAnswerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    fn read_raw(&self) -> Result<BTreeMap<String, RawAnswer>, AnswerSourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            AnswerSourceError::IoError(format!("{}: {}", self.path.display(), e))
        })?;
        parse_answers(&text, self.is_json())
    }
}

fn parse_answers(text: &str, json: bool) -> Result<BTreeMap<String, RawAnswer>, AnswerSourceError> {
    if json {
        serde_json::from_str(text).map_err(|e| AnswerSourceError::InvalidInput(e.to_string()))
    } else {
        toml::from_str(text).map_err(|e| AnswerSourceError::InvalidInput(e.to_string()))
    }
}

impl AnswerSource for FileAnswerSource {
    fn collect(
        &self,
        questionnaire: &Questionnaire,
        _policy: &ScoringPolicy,
    ) -> Result<AnswerSet, AnswerSourceError> {
        let raw = self.read_raw()?;
        let mut answers = AnswerSet::for_questionnaire(questionnaire);

        for (id, value) in &raw {
            let answer = value
                .to_answer()
                .map_err(|e| AnswerSourceError::InvalidInput(format!("{}: {}", id, e)))?;
            answers
                .set(id, answer)
                .map_err(|e| AnswerSourceError::InvalidInput(e.to_string()))?;
        }

        debug!(
            "Read {} answers from {} ({} unanswered)",
            raw.len(),
            self.path.display(),
            answers.unanswered_ids().len()
        );
        Ok(answers)
    }
}
