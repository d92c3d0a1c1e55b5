//! Submit Assessment use case.
//!
//! Scores a completed [`AnswerSet`] into a [`Report`], stamping it with the
//! injected [`Clock`] and recording the outcome on the
//! [`AssessmentLogger`] port.

use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger};
use crate::ports::clock::Clock;
use assessment_domain::{AnswerSet, DomainError, Questionnaire, Report, ScoringPolicy};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when submitting an assessment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitAssessmentError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SubmitAssessmentError {
    /// True when submission was blocked by the strict completeness policy
    pub fn is_incomplete(&self) -> bool {
        match self {
            SubmitAssessmentError::Domain(e) => e.is_incomplete(),
        }
    }
}

/// Input for the [`SubmitAssessmentUseCase`].
#[derive(Debug, Clone, Copy)]
pub struct SubmitAssessmentInput<'a> {
    pub questionnaire: &'a Questionnaire,
    pub answers: &'a AnswerSet,
    pub policy: ScoringPolicy,
}

impl<'a> SubmitAssessmentInput<'a> {
    pub fn new(questionnaire: &'a Questionnaire, answers: &'a AnswerSet) -> Self {
        Self {
            questionnaire,
            answers,
            policy: ScoringPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Use case for scoring one submission.
#[derive(Clone)]
pub struct SubmitAssessmentUseCase {
    clock: Arc<dyn Clock>,
    logger: Arc<dyn AssessmentLogger>,
}

impl SubmitAssessmentUseCase {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            logger: Arc::new(NoAssessmentLogger),
        }
    }

    /// Create with an assessment logger.
    pub fn with_logger(mut self, logger: Arc<dyn AssessmentLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Score the submission and produce the report.
    pub fn execute(&self, input: SubmitAssessmentInput<'_>) -> Result<Report, SubmitAssessmentError> {
        let SubmitAssessmentInput {
            questionnaire,
            answers,
            policy,
        } = input;

        debug!(
            "Scoring '{}' ({} questions) with threshold {}",
            questionnaire.title(),
            questionnaire.len(),
            policy.threshold
        );

        let report = match Report::compute(questionnaire, answers, &policy, self.clock.now()) {
            Ok(report) => report,
            Err(e) => {
                warn!("Submission rejected: {}", e);
                if let DomainError::Incomplete { missing } = &e {
                    self.logger.log(AssessmentEvent::new(
                        "assessment_rejected",
                        serde_json::json!({
                            "questionnaire": questionnaire.title(),
                            "missing": missing,
                        }),
                    ));
                }
                return Err(e.into());
            }
        };

        info!(
            "Assessment scored: {} yes, {} no, recommendation: {}",
            report.yes_count,
            report.no_count,
            report
                .recommendation
                .map(|r| r.as_str())
                .unwrap_or("none")
        );

        self.logger.log(AssessmentEvent::new(
            "assessment_submitted",
            serde_json::json!({
                "questionnaire": questionnaire.title(),
                "submitted_at": report.timestamp.to_string(),
                "yes_count": report.yes_count,
                "no_count": report.no_count,
                "unanswered": answers.unanswered_ids().len(),
                "threshold": policy.threshold.to_config_string(),
                "recommendation": report.recommendation,
            }),
        ));

        Ok(report)
    }
}
