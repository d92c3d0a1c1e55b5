//! Questionnaire definition
//!
//! A [`Questionnaire`] is the ordered, validated list of questions plus the
//! recommendation messages that go with it. It is plain configuration data:
//! the same scoring core runs against any questionnaire, whether it comes
//! from a built-in [`presets::Preset`] or from a file.

pub mod presets;

use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::scoring::recommendation::RecommendationMessages;
use serde::Serialize;
use std::collections::HashSet;

pub use presets::Preset;

/// An ordered set of yes/no questions (Entity)
///
/// Invariants enforced at construction:
/// - at least one question
/// - every question has a non-blank id and text
/// - question ids are unique
/// - recommendation messages are distinct single lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    title: String,
    intro: Option<String>,
    questions: Vec<Question>,
    messages: RecommendationMessages,
}

impl Questionnaire {
    /// Create a questionnaire with the default recommendation messages
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionnaire);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.id()) {
                return Err(DomainError::DuplicateQuestionId(question.id().to_string()));
            }
        }

        Ok(Self {
            title: title.into(),
            intro: None,
            questions,
            messages: RecommendationMessages::default(),
        })
    }

    /// Set the introduction shown before the first question
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Replace the recommendation messages
    pub fn with_messages(mut self, messages: RecommendationMessages) -> Result<Self, DomainError> {
        messages.validate()?;
        self.messages = messages;
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn intro(&self) -> Option<&str> {
        self.intro.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn messages(&self) -> &RecommendationMessages {
        &self.messages
    }

    /// Look up a question by id
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Iterate over question ids in definition order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed questionnaire; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
