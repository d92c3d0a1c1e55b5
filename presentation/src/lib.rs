//! Presentation layer for yesno-assessment
//!
//! This crate contains the CLI definition, the terminal interviewer that
//! collects answers, and console formatters for reports.

pub mod cli;
pub mod interview;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, PresetArg};
pub use interview::{InteractiveAnswerSource, Interviewer};
pub use output::console::ConsoleFormatter;

/// Turn terminal colors off for the rest of the process
pub fn disable_colors() {
    colored::control::set_override(false);
}
