//! Threshold rules for recommendation selection
//!
//! A threshold rule decides whether a yes (or no) count is high enough to
//! trigger the corresponding recommendation.

use serde::{Deserialize, Serialize};

/// Rule for deciding whether a count reaches the threshold
///
/// - `AtLeast(n)`: count must be `>= n` (default, n = 7)
/// - `MoreThan(n)`: count must be `> n`
///
/// # Example
///
/// ```
/// use assessment_domain::scoring::ThresholdRule;
///
/// let rule = ThresholdRule::AtLeast(7);
/// assert!(rule.is_satisfied(7));
/// assert!(!rule.is_satisfied(6));
///
/// let strict = ThresholdRule::MoreThan(7);
/// assert!(strict.is_satisfied(8));
/// assert!(!strict.is_satisfied(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdRule {
    /// Count must be at least n
    AtLeast(usize),

    /// Count must be strictly greater than n
    MoreThan(usize),
}

impl Default for ThresholdRule {
    fn default() -> Self {
        ThresholdRule::AtLeast(7)
    }
}

impl ThresholdRule {
    /// Check if the rule is satisfied by a count
    pub fn is_satisfied(&self, count: usize) -> bool {
        match self {
            ThresholdRule::AtLeast(n) => count >= *n,
            ThresholdRule::MoreThan(n) => count > *n,
        }
    }

    /// Get a human-readable description of this rule
    pub fn description(&self) -> String {
        match self {
            ThresholdRule::AtLeast(n) => format!("at least {}", n),
            ThresholdRule::MoreThan(n) => format!("more than {}", n),
        }
    }

    /// Get the smallest count that satisfies this rule
    pub fn min_count_needed(&self) -> usize {
        match self {
            ThresholdRule::AtLeast(n) => *n,
            ThresholdRule::MoreThan(n) => n.saturating_add(1),
        }
    }

    /// Canonical config-file form (`atleast:N` / `morethan:N`)
    pub fn to_config_string(&self) -> String {
        match self {
            ThresholdRule::AtLeast(n) => format!("atleast:{}", n),
            ThresholdRule::MoreThan(n) => format!("morethan:{}", n),
        }
    }
}

impl std::fmt::Display for ThresholdRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for ThresholdRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let parse_count = |num: &str| -> Result<usize, String> {
            num.trim()
                .parse()
                .map_err(|_| format!("Invalid count in threshold rule: {}", s))
        };

        if let Some(num) = s.strip_prefix(">=") {
            return Ok(ThresholdRule::AtLeast(parse_count(num)?));
        }
        if let Some(num) = s.strip_prefix('>') {
            return Ok(ThresholdRule::MoreThan(parse_count(num)?));
        }

        match s.split_once(':') {
            Some(("atleast" | "at_least", num)) => Ok(ThresholdRule::AtLeast(parse_count(num)?)),
            Some(("morethan" | "more_than", num)) => {
                Ok(ThresholdRule::MoreThan(parse_count(num)?))
            }
            _ => Err(format!(
                "Unknown threshold rule: {}. Valid: atleast:N, morethan:N, >=N, >N",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least_boundaries() {
        let rule = ThresholdRule::AtLeast(7);
        assert!(!rule.is_satisfied(6));
        assert!(rule.is_satisfied(7));
        assert!(rule.is_satisfied(8));
    }

    #[test]
    fn test_more_than_boundaries() {
        let rule = ThresholdRule::MoreThan(7);
        assert!(!rule.is_satisfied(6));
        assert!(!rule.is_satisfied(7));
        assert!(rule.is_satisfied(8));
    }

    #[test]
    fn test_zero_threshold() {
        assert!(ThresholdRule::AtLeast(0).is_satisfied(0));
        assert!(!ThresholdRule::MoreThan(0).is_satisfied(0));
    }

    #[test]
    fn test_min_count_needed() {
        assert_eq!(ThresholdRule::AtLeast(7).min_count_needed(), 7);
        assert_eq!(ThresholdRule::MoreThan(7).min_count_needed(), 8);
    }

    #[test]
    fn test_min_count_needed_saturates() {
        assert_eq!(ThresholdRule::MoreThan(usize::MAX).min_count_needed(), usize::MAX);
        assert!(!ThresholdRule::MoreThan(usize::MAX).is_satisfied(usize::MAX));
    }

    #[test]
    fn test_parse_rule() {
        assert_eq!(
            "atleast:7".parse::<ThresholdRule>(),
            Ok(ThresholdRule::AtLeast(7))
        );
        assert_eq!(
            "at_least:5".parse::<ThresholdRule>(),
            Ok(ThresholdRule::AtLeast(5))
        );
        assert_eq!(
            ">=7".parse::<ThresholdRule>(),
            Ok(ThresholdRule::AtLeast(7))
        );
        assert_eq!(
            "morethan:7".parse::<ThresholdRule>(),
            Ok(ThresholdRule::MoreThan(7))
        );
        assert_eq!(
            "More_Than:3".parse::<ThresholdRule>(),
            Ok(ThresholdRule::MoreThan(3))
        );
        assert_eq!(
            "> 7".parse::<ThresholdRule>(),
            Ok(ThresholdRule::MoreThan(7))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("majority".parse::<ThresholdRule>().is_err());
        assert!("atleast:x".parse::<ThresholdRule>().is_err());
        assert!(">=".parse::<ThresholdRule>().is_err());
    }

    #[test]
    fn test_config_string_parses_back() {
        for rule in [ThresholdRule::AtLeast(7), ThresholdRule::MoreThan(2)] {
            assert_eq!(rule.to_config_string().parse::<ThresholdRule>(), Ok(rule));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ThresholdRule::AtLeast(7).to_string(), "at least 7");
        assert_eq!(ThresholdRule::MoreThan(7).to_string(), "more than 7");
    }

    #[test]
    fn test_default() {
        assert_eq!(ThresholdRule::default(), ThresholdRule::AtLeast(7));
    }
}
