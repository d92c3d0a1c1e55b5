//! Run Assessment use case.
//!
//! The linear end-to-end flow: collect answers from an [`AnswerSource`],
//! then score them with [`SubmitAssessmentUseCase`]. Export is left to the
//! caller so a failed export never loses the scored report.

use super::submit_assessment::{SubmitAssessmentError, SubmitAssessmentInput, SubmitAssessmentUseCase};
use crate::ports::answer_source::{AnswerSource, AnswerSourceError};
use assessment_domain::{AnswerSet, Questionnaire, Report, ScoringPolicy};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running an assessment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunAssessmentError {
    #[error("Could not collect answers: {0}")]
    Collect(#[from] AnswerSourceError),

    #[error(transparent)]
    Submit(#[from] SubmitAssessmentError),
}

/// A scored assessment together with the answers it was computed from.
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    pub answers: AnswerSet,
    pub report: Report,
}

/// Use case for one collect → score pass.
pub struct RunAssessmentUseCase<'a> {
    source: &'a dyn AnswerSource,
    submit: SubmitAssessmentUseCase,
}

impl<'a> RunAssessmentUseCase<'a> {
    pub fn new(source: &'a dyn AnswerSource, submit: SubmitAssessmentUseCase) -> Self {
        Self { source, submit }
    }

    pub fn execute(
        &self,
        questionnaire: &Questionnaire,
        policy: ScoringPolicy,
    ) -> Result<AssessmentOutcome, RunAssessmentError> {
        info!(
            "Starting assessment '{}' ({} questions)",
            questionnaire.title(),
            questionnaire.len()
        );

        let answers = self.source.collect(questionnaire, &policy)?;
        let report = self.submit.execute(
            SubmitAssessmentInput::new(questionnaire, &answers).with_policy(policy),
        )?;

        Ok(AssessmentOutcome { answers, report })
    }
}
