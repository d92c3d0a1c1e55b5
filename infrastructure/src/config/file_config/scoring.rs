//! Scoring configuration from TOML (`[scoring]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [scoring]
//! threshold = "atleast:7"       # or "morethan:7", ">=7", ">7"
//! require_all_answers = false   # true blocks submission until every question is answered
//! fallback_to_negative = false  # true shows the negative message whenever yes misses
//! ```

use assessment_domain::{
    CompletenessPolicy, ConfigIssue, ConfigIssueCode, ScoringPolicy, ThresholdRule,
};
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    /// Threshold rule: "atleast:N", "morethan:N", ">=N", ">N"
    pub threshold: String,
    /// Block submission while any question is unanswered
    pub require_all_answers: bool,
    /// Produce the negative message whenever the positive rule misses
    pub fallback_to_negative: bool,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdRule::default().to_config_string(),
            require_all_answers: false,
            fallback_to_negative: false,
        }
    }
}

impl FileScoringConfig {
    /// Parse the threshold rule, falling back to the default on error
    pub fn parse_threshold(&self) -> (ThresholdRule, Vec<ConfigIssue>) {
        match self.threshold.parse::<ThresholdRule>() {
            Ok(rule) => (rule, vec![]),
            Err(reason) => (
                ThresholdRule::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidThreshold {
                        value: self.threshold.clone(),
                    },
                    format!("scoring.threshold: {}", reason),
                )],
            ),
        }
    }

    /// Build the scoring policy
    pub fn to_policy(&self) -> (ScoringPolicy, Vec<ConfigIssue>) {
        let (threshold, issues) = self.parse_threshold();
        let policy = ScoringPolicy {
            threshold,
            completeness: if self.require_all_answers {
                CompletenessPolicy::Strict
            } else {
                CompletenessPolicy::Permissive
            },
            fallback_to_negative: self.fallback_to_negative,
        };
        (policy, issues)
    }
}
