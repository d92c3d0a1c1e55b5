//! Answer set entity

use super::Answer;
use crate::core::error::DomainError;
use crate::questionnaire::Questionnaire;

/// One session's answers, one slot per question in definition order
///
/// An `AnswerSet` can only be created from a [`Questionnaire`], which
/// guarantees every question id has exactly one entry before scoring.
/// Entries start out [`Answer::Unanswered`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, Answer)>,
}

impl AnswerSet {
    /// Create an answer set with every question unanswered
    pub fn for_questionnaire(questionnaire: &Questionnaire) -> Self {
        Self {
            entries: questionnaire
                .ids()
                .map(|id| (id.to_string(), Answer::Unanswered))
                .collect(),
        }
    }

    /// Record an answer for a question
    pub fn set(&mut self, id: &str, answer: Answer) -> Result<(), DomainError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(entry_id, _)| entry_id == id)
            .ok_or_else(|| DomainError::UnknownQuestion(id.to_string()))?;
        slot.1 = answer;
        Ok(())
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, id: &str, answer: Answer) -> Result<Self, DomainError> {
        self.set(id, answer)?;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Option<Answer> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, answer)| *answer)
    }

    /// Iterate over `(question id, answer)` in definition order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.entries.iter().map(|(id, answer)| (id.as_str(), *answer))
    }

    pub fn yes_count(&self) -> usize {
        self.count(Answer::Yes)
    }

    pub fn no_count(&self) -> usize {
        self.count(Answer::No)
    }

    fn count(&self, wanted: Answer) -> usize {
        self.entries.iter().filter(|(_, a)| *a == wanted).count()
    }

    /// Ids of questions still unanswered, in definition order
    pub fn unanswered_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, a)| !a.is_answered())
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, a)| a.is_answered())
    }

    /// Check that this set has exactly the questionnaire's ids, in order
    pub fn covers(&self, questionnaire: &Questionnaire) -> bool {
        self.entries.len() == questionnaire.len()
            && self
                .entries
                .iter()
                .zip(questionnaire.ids())
                .all(|((id, _), expected)| id == expected)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::Question;

    fn questionnaire() -> Questionnaire {
        Questionnaire::new(
            "Test",
            vec![
                Question::new("a", "First?"),
                Question::new("b", "Second?"),
                Question::new("c", "Third?"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_starts_unanswered() {
        let answers = AnswerSet::for_questionnaire(&questionnaire());
        assert_eq!(answers.len(), 3);
        assert!(answers.iter().all(|(_, a)| a == Answer::Unanswered));
        assert!(!answers.is_complete());
        assert_eq!(answers.unanswered_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_and_count() {
        let answers = AnswerSet::for_questionnaire(&questionnaire())
            .with("a", Answer::Yes)
            .unwrap()
            .with("c", Answer::No)
            .unwrap();
        assert_eq!(answers.yes_count(), 1);
        assert_eq!(answers.no_count(), 1);
        assert_eq!(answers.get("b"), Some(Answer::Unanswered));
        assert_eq!(answers.unanswered_ids(), vec!["b"]);
    }

    #[test]
    fn test_set_overwrites() {
        let mut answers = AnswerSet::for_questionnaire(&questionnaire());
        answers.set("a", Answer::Yes).unwrap();
        answers.set("a", Answer::No).unwrap();
        assert_eq!(answers.get("a"), Some(Answer::No));
        assert_eq!(answers.yes_count(), 0);
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut answers = AnswerSet::for_questionnaire(&questionnaire());
        assert_eq!(
            answers.set("z", Answer::Yes),
            Err(DomainError::UnknownQuestion("z".to_string()))
        );
        assert!(answers.get("z").is_none());
    }

    #[test]
    fn test_covers() {
        let q = questionnaire();
        let answers = AnswerSet::for_questionnaire(&q);
        assert!(answers.covers(&q));

        let other = Questionnaire::new("Other", vec![Question::new("a", "First?")]).unwrap();
        assert!(!answers.covers(&other));
    }

    #[test]
    fn test_complete() {
        let mut answers = AnswerSet::for_questionnaire(&questionnaire());
        for id in ["a", "b", "c"] {
            answers.set(id, Answer::No).unwrap();
        }
        assert!(answers.is_complete());
        assert!(answers.unanswered_ids().is_empty());
    }
}
