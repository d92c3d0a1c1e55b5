//! Answer source port: the UI collaborator that collects selections.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerSource`] - defined here in application layer
//! - **Adapters**: `InteractiveAnswerSource` (presentation, terminal prompts)
//!   and `FileAnswerSource` (infrastructure, answers file)
//!
//! # Built-in Implementations
//!
//! - [`PresetAnswers`] - Returns a fixed answer map, for tests and scripting

use assessment_domain::{Answer, AnswerSet, Questionnaire, ScoringPolicy};
use thiserror::Error;

/// Error type for answer collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerSourceError {
    /// User cancelled the interview (e.g., end of input).
    #[error("Assessment cancelled")]
    Cancelled,

    /// Input/output error (e.g., terminal or file read failure).
    #[error("I/O error: {0}")]
    IoError(String),

    /// The supplied answers do not fit the questionnaire.
    #[error("Invalid answers: {0}")]
    InvalidInput(String),
}

/// Port for collecting one flat pass of answers for a questionnaire.
///
/// Implementations must return an [`AnswerSet`] built from the given
/// questionnaire, so every question has exactly one entry. The policy is
/// passed so interactive sources can insist on an answer when the
/// completeness policy is strict.
pub trait AnswerSource {
    fn collect(
        &self,
        questionnaire: &Questionnaire,
        policy: &ScoringPolicy,
    ) -> Result<AnswerSet, AnswerSourceError>;
}

/// Answer source backed by a fixed list of `(question id, answer)` pairs.
///
/// Ids not listed stay unanswered. Unknown ids are rejected.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    answers: Vec<(String, Answer)>,
}

impl PresetAnswers {
    pub fn new(answers: Vec<(String, Answer)>) -> Self {
        Self { answers }
    }
}

impl AnswerSource for PresetAnswers {
    fn collect(
        &self,
        questionnaire: &Questionnaire,
        _policy: &ScoringPolicy,
    ) -> Result<AnswerSet, AnswerSourceError> {
        let mut set = AnswerSet::for_questionnaire(questionnaire);
        for (id, answer) in &self.answers {
            set.set(id, *answer)
                .map_err(|e| AnswerSourceError::InvalidInput(e.to_string()))?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_domain::Question;

    fn questionnaire() -> Questionnaire {
        Questionnaire::new(
            "Test",
            vec![Question::new("a", "First?"), Question::new("b", "Second?")],
        )
        .unwrap()
    }

    #[test]
    fn test_preset_answers_fill_set() {
        let source = PresetAnswers::new(vec![("b".to_string(), Answer::Yes)]);
        let set = source
            .collect(&questionnaire(), &ScoringPolicy::default())
            .unwrap();
        assert_eq!(set.get("a"), Some(Answer::Unanswered));
        assert_eq!(set.get("b"), Some(Answer::Yes));
    }

    #[test]
    fn test_preset_answers_reject_unknown_id() {
        let source = PresetAnswers::new(vec![("zz".to_string(), Answer::No)]);
        let err = source
            .collect(&questionnaire(), &ScoringPolicy::default())
            .unwrap_err();
        assert_eq!(
            err,
            AnswerSourceError::InvalidInput("Unknown question id: zz".to_string())
        );
    }
}
