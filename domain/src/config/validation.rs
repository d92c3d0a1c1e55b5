//! Configuration issues
//!
//! Config loading never aborts on a questionable value. Instead every
//! problem is reported as a [`ConfigIssue`] with a [`Severity`], and the
//! caller decides whether to warn or stop.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not match any known value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// The threshold rule could not be parsed.
    InvalidThreshold { value: String },
    /// No answer count can ever satisfy the threshold.
    UnreachableThreshold { needed: usize, questions: usize },
    /// Both a preset and a questionnaire file were given; the file wins.
    ShadowedPreset { preset: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Warn when a threshold needs more answers than the questionnaire has
pub fn check_threshold_reachable(
    threshold: &crate::scoring::ThresholdRule,
    question_count: usize,
) -> Option<ConfigIssue> {
    let needed = threshold.min_count_needed();
    if needed > question_count {
        Some(ConfigIssue::warning(
            ConfigIssueCode::UnreachableThreshold {
                needed,
                questions: question_count,
            },
            format!(
                "scoring.threshold: {} answers needed but the questionnaire has only {} questions; \
                 no recommendation can ever be produced",
                needed, question_count
            ),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ThresholdRule;

    #[test]
    fn test_reachable_threshold() {
        assert!(check_threshold_reachable(&ThresholdRule::AtLeast(7), 16).is_none());
        assert!(check_threshold_reachable(&ThresholdRule::AtLeast(7), 7).is_none());
    }

    #[test]
    fn test_largest_threshold_is_unreachable() {
        let rule: ThresholdRule = format!("morethan:{}", usize::MAX).parse().unwrap();
        let issue = check_threshold_reachable(&rule, 16).unwrap();
        assert_eq!(
            issue.code,
            ConfigIssueCode::UnreachableThreshold {
                needed: usize::MAX,
                questions: 16,
            }
        );
    }

    #[test]
    fn test_unreachable_threshold() {
        let issue = check_threshold_reachable(&ThresholdRule::MoreThan(7), 7).unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(
            issue.code,
            ConfigIssueCode::UnreachableThreshold {
                needed: 8,
                questions: 7
            }
        );
        assert!(!issue.is_error());
    }

    #[test]
    fn test_error_constructor() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::InvalidThreshold {
                value: "lots".to_string(),
            },
            "bad",
        );
        assert!(issue.is_error());
    }
}
