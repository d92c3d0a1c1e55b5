//! Recommendation outcomes and their messages

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

const POSITIVE_MESSAGE: &str = "Based on the interview questions, it is recommended to file for \
bankruptcy, and an ILA legal attorney will reach out to you soon.";

const NEGATIVE_MESSAGE: &str = "Your situation does not seem the best suited for bankruptcy, but \
your results have been recorded and will be passed along to an attorney.";

/// Which recommendation a scored answer set produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Yes count reached the threshold
    Positive,
    /// No count reached the threshold (or fallback applied)
    Negative,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Positive => "positive",
            Recommendation::Negative => "negative",
        }
    }

    /// Pick this recommendation's text out of a message set
    pub fn message<'a>(&self, messages: &'a RecommendationMessages) -> &'a str {
        match self {
            Recommendation::Positive => &messages.positive,
            Recommendation::Negative => &messages.negative,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user-facing text for each recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMessages {
    pub positive: String,
    pub negative: String,
}

impl RecommendationMessages {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    /// Check that both messages survive an export and can be told apart
    ///
    /// Each message sits on its own line of the report, so it must be
    /// non-blank, single-line and must not look like an answer line.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, message) in [("positive", &self.positive), ("negative", &self.negative)] {
            if message.trim().is_empty() {
                return Err(DomainError::InvalidMessages(format!(
                    "{} message cannot be empty",
                    name
                )));
            }
            if message.contains(['\n', '\r']) {
                return Err(DomainError::InvalidMessages(format!(
                    "{} message must fit on a single line",
                    name
                )));
            }
            if message.starts_with("- ") {
                return Err(DomainError::InvalidMessages(format!(
                    "{} message cannot start with \"- \"",
                    name
                )));
            }
        }

        if self.positive.trim() == self.negative.trim() {
            return Err(DomainError::InvalidMessages(
                "positive and negative messages must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Map a rendered message back to its recommendation
    pub fn classify(&self, message: &str) -> Option<Recommendation> {
        let message = message.trim();
        if message == self.positive.trim() {
            Some(Recommendation::Positive)
        } else if message == self.negative.trim() {
            Some(Recommendation::Negative)
        } else {
            None
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self::new(POSITIVE_MESSAGE, NEGATIVE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_selection() {
        let messages = RecommendationMessages::new("file", "wait");
        assert_eq!(Recommendation::Positive.message(&messages), "file");
        assert_eq!(Recommendation::Negative.message(&messages), "wait");
    }

    #[test]
    fn test_classify() {
        let messages = RecommendationMessages::default();
        assert_eq!(
            messages.classify(POSITIVE_MESSAGE),
            Some(Recommendation::Positive)
        );
        assert_eq!(
            messages.classify(NEGATIVE_MESSAGE),
            Some(Recommendation::Negative)
        );
        assert_eq!(messages.classify("something else"), None);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RecommendationMessages::default().validate().is_ok());
        assert!(RecommendationMessages::new("file", "wait").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_multiline() {
        let messages = RecommendationMessages::new("Call us.\nWe can help.", "wait");
        assert!(matches!(
            messages.validate(),
            Err(DomainError::InvalidMessages(_))
        ));
    }

    #[test]
    fn test_validate_rejects_answer_like_message() {
        let messages = RecommendationMessages::new("file", "- Call an attorney: YES");
        assert!(matches!(
            messages.validate(),
            Err(DomainError::InvalidMessages(_))
        ));
    }

    #[test]
    fn test_validate_rejects_identical_messages() {
        let messages = RecommendationMessages::new("Recorded.", " Recorded. ");
        assert!(matches!(
            messages.validate(),
            Err(DomainError::InvalidMessages(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert!(RecommendationMessages::new("  ", "wait").validate().is_err());
    }

    #[test]
    fn test_default_messages() {
        let messages = RecommendationMessages::default();
        assert!(messages.positive.contains("recommended to file for bankruptcy"));
        assert!(messages.negative.contains("passed along to an attorney"));
    }
}
