//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single yes/no question in a questionnaire (Value Object)
///
/// The `id` keys the user's answer, the `text` is what gets shown and
/// what appears in the exported report, and the optional `note` is extra
/// guidance displayed alongside the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the id or text is empty or only whitespace
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        let text = text.into();
        assert!(!id.trim().is_empty(), "Question id cannot be empty");
        assert!(!text.trim().is_empty(), "Question text cannot be empty");
        Self {
            id,
            text,
            note: None,
        }
    }

    /// Try to create a new question, rejecting blank ids and texts
    pub fn try_new(id: impl Into<String>, text: impl Into<String>) -> Result<Self, DomainError> {
        let question = Self {
            id: id.into(),
            text: text.into(),
            note: None,
        };
        question.validate()?;
        Ok(question)
    }

    /// Attach a note shown alongside the question
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }

    /// Check the invariants that deserialization cannot enforce
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question id cannot be empty".to_string(),
            ));
        }
        if self.text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "question '{}' has empty text",
                self.id
            )));
        }
        if self.id.contains(['\n', '\r']) || self.text.contains(['\n', '\r']) {
            return Err(DomainError::InvalidQuestion(format!(
                "question '{}' must fit on a single line",
                self.id.trim()
            )));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("q1", "Do you own a home?");
        assert_eq!(q.id(), "q1");
        assert_eq!(q.text(), "Do you own a home?");
        assert!(q.note().is_none());
    }

    #[test]
    fn test_with_note() {
        let q = Question::new("q1", "Do you own a vehicle?").with_note("Equity limits apply.");
        assert_eq!(q.note(), Some("Equity limits apply."));

        let blank = Question::new("q2", "Any tax debt?").with_note("  ");
        assert!(blank.note().is_none());
    }

    #[test]
    #[should_panic]
    fn test_empty_text_panics() {
        Question::new("q1", "");
    }

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(Question::try_new("", "Text").is_err());
        assert!(Question::try_new("q1", "   ").is_err());
        assert!(Question::try_new("q1", "Text").is_ok());
    }

    #[test]
    fn test_multiline_text_rejected() {
        assert!(matches!(
            Question::try_new("q1", "Own a\nhome?"),
            Err(DomainError::InvalidQuestion(_))
        ));
        assert!(Question::try_new("q1", "Own a\r\nhome?").is_err());
        assert!(Question::try_new("q\n1", "Own a home?").is_err());
    }

    #[test]
    fn test_deserialize_without_note() {
        let q: Question =
            serde_json::from_str(r#"{"id": "q3", "text": "Has a creditor sued you?"}"#).unwrap();
        assert_eq!(q.id(), "q3");
        assert!(q.note().is_none());
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_display_is_text() {
        let q = Question::new("q1", "Do you own a home?");
        assert_eq!(q.to_string(), "Do you own a home?");
    }
}
