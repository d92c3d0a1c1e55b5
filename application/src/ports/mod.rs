//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod answer_source;
pub mod assessment_logger;
pub mod clock;
pub mod report_sink;
