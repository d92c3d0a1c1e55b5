//! Terminal interviewer: the UI collaborator for interactive runs.
//!
//! Asks each question in order and reads a yes/no reply:
//!
//! ```text
//! [3/16] Has any creditor sued you or obtained a judgment against you for unpaid debts?
//! Your answer (yes/no, Enter to skip)> y
//! ```
//!
//! # Replies
//!
//! | Reply | Meaning |
//! |-------|---------|
//! | `yes`, `y` | Yes |
//! | `no`, `n` | No |
//! | Enter, `skip`, `-` | Unanswered (re-asked when answers are required) |
//! | `/quit`, `quit` | Abort the assessment |

use assessment_application::{AnswerSource, AnswerSourceError};
use assessment_domain::{Answer, AnswerSet, Question, Questionnaire, ScoringPolicy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Outcome of reading a single reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Answer(Answer),
    Quit,
    Invalid,
}

/// Interpret one line typed by the user
pub fn parse_reply(line: &str) -> Reply {
    match line.trim().to_lowercase().as_str() {
        "/quit" | "quit" | "/q" => Reply::Quit,
        other => other
            .parse::<Answer>()
            .map(Reply::Answer)
            .unwrap_or(Reply::Invalid),
    }
}

/// Drives a question-by-question interview over any reader/writer pair
#[derive(Debug, Clone)]
pub struct Interviewer {
    show_intro: bool,
    show_notes: bool,
}

impl Default for Interviewer {
    fn default() -> Self {
        Self {
            show_intro: true,
            show_notes: true,
        }
    }
}

impl Interviewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the intro banner and notes
    pub fn quiet(mut self) -> Self {
        self.show_intro = false;
        self.show_notes = false;
        self
    }

    /// Run the interview
    pub fn conduct<R: BufRead, W: Write>(
        &self,
        questionnaire: &Questionnaire,
        policy: &ScoringPolicy,
        input: &mut R,
        out: &mut W,
    ) -> Result<AnswerSet, AnswerSourceError> {
        let mut answers = AnswerSet::for_questionnaire(questionnaire);
        let total = questionnaire.len();

        if self.show_intro {
            self.write_intro(questionnaire, out).map_err(io_error)?;
        }

        for (index, question) in questionnaire.questions().iter().enumerate() {
            self.write_question(question, index + 1, total, out)
                .map_err(io_error)?;
            let answer = self.ask(policy, input, out)?;
            answers
                .set(question.id(), answer)
                .map_err(|e| AnswerSourceError::InvalidInput(e.to_string()))?;
        }

        writeln!(out).map_err(io_error)?;
        Ok(answers)
    }

    fn write_intro<W: Write>(&self, questionnaire: &Questionnaire, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", questionnaire.title().cyan().bold())?;
        if let Some(intro) = questionnaire.intro() {
            writeln!(out, "{}", intro)?;
        }
        writeln!(out)?;
        writeln!(out, "Please answer the following questions:")?;
        writeln!(out, "{}", "---".dimmed())
    }

    fn write_question<W: Write>(
        &self,
        question: &Question,
        number: usize,
        total: usize,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            format!("[{}/{}]", number, total).dimmed(),
            question.text().bold()
        )?;
        if self.show_notes
            && let Some(note) = question.note()
        {
            writeln!(out, "  {}", note.blue())?;
        }
        Ok(())
    }

    /// Read replies until one is acceptable under the policy
    fn ask<R: BufRead, W: Write>(
        &self,
        policy: &ScoringPolicy,
        input: &mut R,
        out: &mut W,
    ) -> Result<Answer, AnswerSourceError> {
        let prompt = if policy.requires_all_answers() {
            "Your answer (yes/no)>"
        } else {
            "Your answer (yes/no, Enter to skip)>"
        };

        loop {
            write!(out, "{} ", prompt.magenta().bold()).map_err(io_error)?;
            out.flush().map_err(io_error)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(io_error)? == 0 {
                return Err(AnswerSourceError::Cancelled);
            }

            match parse_reply(&line) {
                Reply::Answer(Answer::Unanswered) if policy.requires_all_answers() => {
                    writeln!(out, "{}", "An answer is required for every question.".yellow())
                        .map_err(io_error)?;
                }
                Reply::Answer(answer) => return Ok(answer),
                Reply::Quit => return Err(AnswerSourceError::Cancelled),
                Reply::Invalid => {
                    writeln!(
                        out,
                        "{} Please answer yes or no.",
                        format!("Unrecognized reply '{}'.", line.trim()).yellow()
                    )
                    .map_err(io_error)?;
                }
            }
        }
    }
}

fn io_error(e: io::Error) -> AnswerSourceError {
    AnswerSourceError::IoError(e.to_string())
}

/// [`AnswerSource`] that interviews the user on stdin/stdout
#[derive(Debug, Clone, Default)]
pub struct InteractiveAnswerSource {
    interviewer: Interviewer,
    prompt_on_stderr: bool,
}

impl InteractiveAnswerSource {
    pub fn new(interviewer: Interviewer) -> Self {
        Self {
            interviewer,
            prompt_on_stderr: false,
        }
    }

    /// Write prompts to stderr, leaving stdout for the results file
    pub fn with_prompt_on_stderr(mut self, enabled: bool) -> Self {
        self.prompt_on_stderr = enabled;
        self
    }
}

impl AnswerSource for InteractiveAnswerSource {
    fn collect(
        &self,
        questionnaire: &Questionnaire,
        policy: &ScoringPolicy,
    ) -> Result<AnswerSet, AnswerSourceError> {
        let stdin = io::stdin();
        if self.prompt_on_stderr {
            self.interviewer.conduct(
                questionnaire,
                policy,
                &mut stdin.lock(),
                &mut io::stderr().lock(),
            )
        } else {
            self.interviewer.conduct(
                questionnaire,
                policy,
                &mut stdin.lock(),
                &mut io::stdout().lock(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_domain::Preset;
    use std::io::Cursor;

    fn small() -> Questionnaire {
        Questionnaire::new(
            "Small",
            vec![
                Question::new("a", "Do you own a home?").with_note("Homestead applies."),
                Question::new("b", "Do you own a vehicle?"),
                Question::new("c", "Any tax debt?"),
            ],
        )
        .unwrap()
    }

    fn run(
        interviewer: &Interviewer,
        questionnaire: &Questionnaire,
        policy: ScoringPolicy,
        typed: &str,
    ) -> (Result<AnswerSet, AnswerSourceError>, String) {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = interviewer.conduct(questionnaire, &policy, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_reply() {
        assert_eq!(parse_reply("Y\n"), Reply::Answer(Answer::Yes));
        assert_eq!(parse_reply(" no "), Reply::Answer(Answer::No));
        assert_eq!(parse_reply("\n"), Reply::Answer(Answer::Unanswered));
        assert_eq!(parse_reply("/quit"), Reply::Quit);
        assert_eq!(parse_reply("dunno"), Reply::Invalid);
    }

    #[test]
    fn test_collects_answers_in_order() {
        let (result, transcript) = run(
            &Interviewer::new(),
            &small(),
            ScoringPolicy::default(),
            "yes\n\nn\n",
        );
        let answers = result.unwrap();
        assert_eq!(answers.get("a"), Some(Answer::Yes));
        assert_eq!(answers.get("b"), Some(Answer::Unanswered));
        assert_eq!(answers.get("c"), Some(Answer::No));
        assert!(transcript.contains("Do you own a home?"));
        assert!(transcript.contains("Homestead applies."));
        assert!(transcript.contains("Please answer the following questions:"));
    }

    #[test]
    fn test_invalid_reply_is_reasked() {
        let (result, transcript) = run(
            &Interviewer::new(),
            &small(),
            ScoringPolicy::default(),
            "maybe\ny\ny\ny\n",
        );
        let answers = result.unwrap();
        assert_eq!(answers.yes_count(), 3);
        assert!(transcript.contains("Please answer yes or no."));
    }

    #[test]
    fn test_strict_policy_requires_answer() {
        let (result, transcript) = run(
            &Interviewer::new(),
            &small(),
            ScoringPolicy::default().strict(),
            "\nno\nno\nyes\n",
        );
        let answers = result.unwrap();
        assert!(answers.is_complete());
        assert_eq!(answers.no_count(), 2);
        assert!(transcript.contains("An answer is required"));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (result, _) = run(
            &Interviewer::new(),
            &small(),
            ScoringPolicy::default(),
            "yes\n",
        );
        assert_eq!(result.unwrap_err(), AnswerSourceError::Cancelled);
    }

    #[test]
    fn test_quit_cancels() {
        let (result, _) = run(
            &Interviewer::new(),
            &small(),
            ScoringPolicy::default(),
            "/quit\n",
        );
        assert_eq!(result.unwrap_err(), AnswerSourceError::Cancelled);
    }

    #[test]
    fn test_quiet_hides_intro_and_notes() {
        let questionnaire = Preset::Iowa.build().unwrap();
        let typed = "y\n".repeat(questionnaire.len());
        let (result, transcript) = run(
            &Interviewer::new().quiet(),
            &questionnaire,
            ScoringPolicy::default(),
            &typed,
        );
        assert_eq!(result.unwrap().yes_count(), 16);
        assert!(!transcript.contains("Homestead Exemption"));
        assert!(!transcript.contains("Please answer the following questions:"));
    }
}
