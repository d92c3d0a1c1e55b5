//! Built-in questionnaire presets
//!
//! | Preset | Questions | Notes |
//! |--------|-----------|-------|
//! | `iowa` (default) | 16 | Iowa-specific guidance on exemptions and timing |
//! | `general` | 15 | General financial-distress screening, no notes |

use super::Questionnaire;
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

const TITLE: &str = "Bankruptcy Assessment Chatbot";

const INTRO: &str = "Are you contemplating filing for bankruptcy? Take this brief assessment \
to see if you would be a good candidate for bankruptcy. If you answer \u{201c}yes\u{201d} to \
more than 7 questions, you should consider contacting an attorney to discuss filing for bankruptcy.";

/// Selects one of the built-in questionnaires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Iowa screening with exemption notes
    #[default]
    Iowa,
    /// General financial-distress screening
    General,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Iowa, Preset::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Iowa => "iowa",
            Preset::General => "general",
        }
    }

    /// Build the questionnaire for this preset
    pub fn build(&self) -> Result<Questionnaire, DomainError> {
        let questions = match self {
            Preset::Iowa => iowa_questions(),
            Preset::General => general_questions(),
        };
        Ok(Questionnaire::new(TITLE, questions)?.with_intro(INTRO))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iowa" => Ok(Preset::Iowa),
            "general" => Ok(Preset::General),
            other => Err(DomainError::UnknownPreset(other.to_string())),
        }
    }
}

fn iowa_questions() -> Vec<Question> {
    vec![
        Question::new("q1", "Do you own a home?").with_note(
            "Note: Iowa recognizes the Homestead Exemption, which protects a home of an unlimited \
             value during the course of a bankruptcy, with a few exceptions.",
        ),
        Question::new("q2", "Do you have any garnishable income?").with_note(
            "Note: garnishable income includes wages, salaries, commissions and bonuses but does \
             NOT include government benefits like Social Security, workers' compensation and child \
             or spousal support.",
        ),
        Question::new(
            "q3",
            "Has any creditor sued you or obtained a judgment against you for unpaid debts?",
        ),
        Question::new("q4", "Are you currently losing income because of your debts?"),
        Question::new(
            "q5",
            "Is this your first time filing for bankruptcy? If not, has it at least been eight \
             years since your last filing?",
        )
        .with_note("Note: you may only file for Chapter 7 bankruptcy once every eight years."),
        Question::new(
            "q6",
            "Is most of your debt all one kind (credit card, student loans, medical bills, \
             personal loans, etc.)?",
        ),
        Question::new(
            "q7",
            "Do you have one debt in particular that is causing you barriers?",
        ),
        Question::new("q8", "Are your wages currently being garnished?").with_note(
            "Note: this means that a judgment has already been entered against you by a creditor \
             who is actively collecting from your income, typically through paychecks by your \
             employer.",
        ),
        Question::new(
            "q9",
            "Do you have any upcoming court hearings related to your debts?",
        ),
        Question::new(
            "q10",
            "Are you up-to-date on your child support or alimony payments (if applicable)?",
        ),
        Question::new(
            "q11",
            "Is your driver's license currently suspended due to court debt or getting into an \
             auto accident without auto insurance?",
        ),
        Question::new(
            "q12",
            "Are you anticipating maintaining a job and having a steady income for the next two \
             years?",
        )
        .with_note(
            "Note: The timing of filing bankruptcy is very important. If you know you won\u{2019}t \
             have an income in the foreseeable future (whether it be due to going to school full \
             time, staying home with the kids, etc.), it might be best to wait to file since you \
             won\u{2019}t have any income to lose.",
        ),
        Question::new(
            "q13",
            "Did you incur any of your debt through fraudulent activity?",
        )
        .with_note("Note: Any debts incurred through fraud are not dischargeable."),
        Question::new("q14", "Are all of your past-due taxes paid and current?"),
        Question::new("q15", "Do you own a vehicle?"),
        Question::new("q16", "Do you only own one vehicle?").with_note(
            "Note: You may only own one vehicle with equity worth $7,000 when you file bankruptcy.",
        ),
    ]
}

fn general_questions() -> Vec<Question> {
    [
        "Have you been unable to make the minimum payments on your credit cards for more than 3 months?",
        "Are you behind on your mortgage or rent payments?",
        "Have you received calls or letters from collection agencies?",
        "Are you using one credit card to pay off another?",
        "Have you taken out payday loans to cover regular expenses?",
        "Are you facing wage garnishment?",
        "Do you have medical bills that you are unable to pay?",
        "Do you owe more on your car than it is worth?",
        "Are you borrowing money from family or friends to cover bills?",
        "Have you recently experienced a job loss or significant drop in income?",
        "Are you facing foreclosure or eviction?",
        "Do you have tax debts you cannot pay?",
        "Have you had utilities shut off due to nonpayment?",
        "Are you considering debt consolidation due to overwhelming debt?",
        "Do you feel stressed or overwhelmed by your financial situation?",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| Question::new(format!("q{}", i + 1), *text))
    .collect()
}
