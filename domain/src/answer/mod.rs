//! Answers collected from the user
//!
//! - [`Answer`] — a single Yes / No / Unanswered selection
//! - [`AnswerSet`] — one answer slot per questionnaire question

pub mod answer_set;

pub use answer_set::AnswerSet;

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user's selection for one question (Value Object)
///
/// Renders as `YES`, `NO` or `N/A` in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl Answer {
    /// Report form of the answer
    pub fn as_report_str(&self) -> &'static str {
        match self {
            Answer::Yes => "YES",
            Answer::No => "NO",
            Answer::Unanswered => "N/A",
        }
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Answer::Unanswered)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value { Answer::Yes } else { Answer::No }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_report_str())
    }
}

impl std::str::FromStr for Answer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Answer::Yes),
            "no" | "n" | "false" => Ok(Answer::No),
            "" | "n/a" | "na" | "skip" | "-" | "unanswered" => Ok(Answer::Unanswered),
            other => Err(DomainError::InvalidAnswer(other.to_string())),
        }
    }
}
