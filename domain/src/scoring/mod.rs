//! Scoring rules
//!
//! Counts are compared against a [`ThresholdRule`]; the [`ScoringPolicy`]
//! wraps the rule together with the completeness policy and decides which
//! [`Recommendation`] (if any) a submission produces.

pub mod policy;
pub mod recommendation;
pub mod rule;

pub use policy::{CompletenessPolicy, ScoringPolicy};
pub use recommendation::{Recommendation, RecommendationMessages};
pub use rule::ThresholdRule;
