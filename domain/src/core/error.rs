//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Questionnaire has no questions")]
    EmptyQuestionnaire,

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid recommendation messages: {0}")]
    InvalidMessages(String),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Answer set does not match the questionnaire")]
    AnswerSetMismatch,

    #[error("Please answer all questions before submitting ({} unanswered)", missing.len())]
    Incomplete { missing: Vec<String> },

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Unknown questionnaire preset: {0}")]
    UnknownPreset(String),

    #[error("Malformed report: {0}")]
    MalformedReport(String),
}

impl DomainError {
    /// Check if this error is a missing-answers validation failure
    pub fn is_incomplete(&self) -> bool {
        matches!(self, DomainError::Incomplete { .. })
    }
}
