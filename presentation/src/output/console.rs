//! Console output formatter for assessment reports

use assessment_domain::{OutputFormat, Questionnaire, Recommendation, Report, ScoringPolicy};
use colored::Colorize;

/// Formats reports and questionnaires for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a report in the requested output format
    pub fn render(report: &Report, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Summary => Self::format_summary(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete result: recommendation and every recorded answer
    pub fn format(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Interview Complete!"));
        output.push('\n');

        if let Some(line) = Self::recommendation_line(report) {
            output.push_str(&format!("\n{}\n", line));
        }

        output.push_str(&format!(
            "\n{}\n",
            "Here are the recorded answers:".cyan().bold()
        ));
        for line in &report.answer_lines {
            output.push_str(&format!("{}\n", line));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Counts and recommendation only
    pub fn format_summary(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}   {} {}   {} {}\n",
            "Yes:".green().bold(),
            report.yes_count,
            "No:".yellow().bold(),
            report.no_count,
            "Unanswered:".dimmed(),
            report
                .question_count()
                .saturating_sub(report.yes_count + report.no_count)
        ));

        match Self::recommendation_line(report) {
            Some(line) => output.push_str(&format!("{}\n", line)),
            None => output.push_str(&format!("{}\n", "No recommendation.".dimmed())),
        }

        output
    }

    /// Format as JSON
    pub fn format_json(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered question listing with notes
    pub fn format_questions(questionnaire: &Questionnaire, policy: &ScoringPolicy) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(questionnaire.title()));
        output.push('\n');

        for (index, question) in questionnaire.questions().iter().enumerate() {
            output.push_str(&format!(
                "\n{:>3}. {} {}\n",
                index + 1,
                question.text(),
                format!("({})", question.id()).dimmed()
            ));
            if let Some(note) = question.note() {
                output.push_str(&format!("     {}\n", note.blue()));
            }
        }

        output.push_str(&format!(
            "\n{} {} questions, recommendation when a count is {}\n",
            "Scoring:".cyan().bold(),
            questionnaire.len(),
            policy.threshold.description()
        ));

        output.push_str(&Self::footer());
        output
    }

    fn recommendation_line(report: &Report) -> Option<String> {
        let message = report.message.as_deref()?;
        Some(match report.recommendation {
            Some(Recommendation::Positive) => message.green().bold().to_string(),
            Some(Recommendation::Negative) => message.yellow().bold().to_string(),
            None => message.to_string(),
        })
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
