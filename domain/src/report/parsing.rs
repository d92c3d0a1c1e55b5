//! Parsing exported report text

use super::DATE_FORMAT;
use crate::answer::Answer;
use crate::core::error::DomainError;
use crate::scoring::{Recommendation, RecommendationMessages};
use chrono::NaiveDateTime;

/// A report recovered from its exported text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub timestamp: NaiveDateTime,
    pub message: Option<String>,
    /// `(question text, answer)` in the order they appear
    pub answers: Vec<(String, Answer)>,
}

impl ParsedReport {
    /// Parse report text whose first line is `header`
    ///
    /// Any non-blank line between the date line and the first answer line
    /// is taken as the recommendation message.
    pub fn parse(text: &str, header: &str) -> Result<Self, DomainError> {
        let mut lines = text.lines();

        match lines.next() {
            Some(line) if line.trim() == header.trim() => {}
            Some(line) => {
                return Err(DomainError::MalformedReport(format!(
                    "unexpected header: {}",
                    line
                )));
            }
            None => return Err(DomainError::MalformedReport("empty report".to_string())),
        }

        let date = lines
            .next()
            .and_then(|line| line.strip_prefix("Date:"))
            .ok_or_else(|| DomainError::MalformedReport("missing date line".to_string()))?;
        let timestamp = NaiveDateTime::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|e| DomainError::MalformedReport(format!("invalid date '{}': {}", date, e)))?;

        let mut message: Option<String> = None;
        let mut answers = Vec::new();

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(entry) = line.strip_prefix("- ") {
                answers.push(parse_answer_line(entry)?);
                continue;
            }

            if answers.is_empty() && message.is_none() {
                message = Some(line.to_string());
            } else {
                return Err(DomainError::MalformedReport(format!(
                    "unexpected line: {}",
                    line
                )));
            }
        }

        Ok(Self {
            timestamp,
            message,
            answers,
        })
    }

    pub fn yes_count(&self) -> usize {
        self.answers.iter().filter(|(_, a)| *a == Answer::Yes).count()
    }

    pub fn no_count(&self) -> usize {
        self.answers.iter().filter(|(_, a)| *a == Answer::No).count()
    }

    pub fn unanswered_count(&self) -> usize {
        self.answers.iter().filter(|(_, a)| !a.is_answered()).count()
    }

    /// Recover which recommendation the message corresponds to
    pub fn recommendation(&self, messages: &RecommendationMessages) -> Option<Recommendation> {
        self.message.as_deref().and_then(|m| messages.classify(m))
    }
}

/// Split `<question text>: <ANSWER>` on the last `": "`
fn parse_answer_line(entry: &str) -> Result<(String, Answer), DomainError> {
    let (text, answer) = entry
        .rsplit_once(": ")
        .ok_or_else(|| DomainError::MalformedReport(format!("invalid answer line: {}", entry)))?;
    let answer = answer
        .parse::<Answer>()
        .map_err(|_| DomainError::MalformedReport(format!("invalid answer: {}", answer)))?;
    Ok((text.to_string(), answer))
}
