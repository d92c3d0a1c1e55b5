//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_report;
pub mod run_assessment;
pub mod submit_assessment;

#[cfg(test)]
pub(crate) mod test_support;
