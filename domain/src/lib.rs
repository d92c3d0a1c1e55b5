//! Domain layer for yesno-assessment
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Questionnaire
//!
//! An ordered list of yes/no [`Question`]s plus the recommendation messages.
//! Questionnaires are configuration: built-in [`Preset`]s or loaded from a file.
//!
//! ## Scoring
//!
//! An [`AnswerSet`] is scored once into a [`Report`]:
//!
//! ```text
//! yes_count satisfies threshold?  ── yes ──▶ Positive
//!        │ no
//! no_count satisfies threshold?   ── yes ──▶ Negative
//!        │ no
//! fallback_to_negative?           ── yes ──▶ Negative
//!        │ no
//!        ▼
//!  no recommendation
//! ```
//!
//! ## Export
//!
//! [`ReportExporter`] renders a report into an in-memory text file and can
//! parse that text back.

pub mod answer;
pub mod config;
pub mod core;
pub mod questionnaire;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use answer::{Answer, AnswerSet};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use self::core::{error::DomainError, question::Question};
pub use questionnaire::{Preset, Questionnaire};
pub use report::{ExportedReport, ParsedReport, Report, ReportExporter};
pub use scoring::{
    CompletenessPolicy, Recommendation, RecommendationMessages, ScoringPolicy, ThresholdRule,
};
