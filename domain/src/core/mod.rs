//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a single yes/no question with optional note
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
