//! Scoring policy: threshold, completeness and fallback behavior

use super::recommendation::Recommendation;
use super::rule::ThresholdRule;
use serde::{Deserialize, Serialize};

/// How unanswered questions are treated on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletenessPolicy {
    /// Unanswered questions are reported as `N/A` (default)
    #[default]
    Permissive,
    /// Submission fails while any question is unanswered
    Strict,
}

/// Everything that decides how an answer set is scored
///
/// Selection order: the yes branch is checked first, then the no branch,
/// then the optional fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub threshold: ThresholdRule,
    pub completeness: CompletenessPolicy,
    /// Produce the negative recommendation whenever the yes branch misses
    pub fallback_to_negative: bool,
}

impl ScoringPolicy {
    pub fn new(threshold: ThresholdRule) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.completeness = CompletenessPolicy::Strict;
        self
    }

    pub fn with_fallback_to_negative(mut self, enabled: bool) -> Self {
        self.fallback_to_negative = enabled;
        self
    }

    pub fn requires_all_answers(&self) -> bool {
        self.completeness == CompletenessPolicy::Strict
    }

    /// Select a recommendation from yes/no counts
    pub fn select(&self, yes_count: usize, no_count: usize) -> Option<Recommendation> {
        if self.threshold.is_satisfied(yes_count) {
            Some(Recommendation::Positive)
        } else if self.threshold.is_satisfied(no_count) || self.fallback_to_negative {
            Some(Recommendation::Negative)
        } else {
            None
        }
    }
}
