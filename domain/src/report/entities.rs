//! Report entity

use crate::answer::AnswerSet;
use crate::core::error::DomainError;
use crate::questionnaire::Questionnaire;
use crate::scoring::{Recommendation, ScoringPolicy};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::answer_line;

/// The computed, read-only summary of one submitted assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// When the assessment was submitted (local time)
    pub timestamp: NaiveDateTime,
    pub yes_count: usize,
    pub no_count: usize,
    /// Which recommendation fired, if any
    pub recommendation: Option<Recommendation>,
    /// The recommendation text taken from the questionnaire
    pub message: Option<String>,
    /// One `- <question>: <ANSWER>` line per question, in definition order
    pub answer_lines: Vec<String>,
}

impl Report {
    /// Score an answer set against its questionnaire
    ///
    /// Fails if the answer set was built for a different questionnaire, or
    /// if the policy is strict and some questions are unanswered.
    pub fn compute(
        questionnaire: &Questionnaire,
        answers: &AnswerSet,
        policy: &ScoringPolicy,
        timestamp: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        if !answers.covers(questionnaire) {
            return Err(DomainError::AnswerSetMismatch);
        }

        if policy.requires_all_answers() && !answers.is_complete() {
            return Err(DomainError::Incomplete {
                missing: answers.unanswered_ids(),
            });
        }

        let yes_count = answers.yes_count();
        let no_count = answers.no_count();
        let recommendation = policy.select(yes_count, no_count);
        let message = recommendation.map(|r| r.message(questionnaire.messages()).to_string());

        let answer_lines = questionnaire
            .questions()
            .iter()
            .zip(answers.iter())
            .map(|(question, (_, answer))| answer_line(question.text(), answer))
            .collect();

        Ok(Self {
            timestamp,
            yes_count,
            no_count,
            recommendation,
            message,
            answer_lines,
        })
    }

    /// Number of questions the report covers
    pub fn question_count(&self) -> usize {
        self.answer_lines.len()
    }

    pub fn has_recommendation(&self) -> bool {
        self.recommendation.is_some()
    }
}
