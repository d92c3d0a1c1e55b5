//! CLI command definitions

use assessment_domain::{OutputFormat as DomainOutputFormat, Preset};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Recommendation plus every recorded answer
    Full,
    /// Counts and recommendation only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// Built-in questionnaire selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Iowa screening, 16 questions with notes
    Iowa,
    /// General financial-distress screening, 15 questions
    General,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Iowa => Preset::Iowa,
            PresetArg::General => Preset::General,
        }
    }
}

/// CLI arguments for the assessment
#[derive(Parser, Debug)]
#[command(name = "assessment")]
#[command(author, version, about = "Yes/no screening assessment with a threshold recommendation")]
#[command(long_about = r#"
Asks a fixed list of yes/no questions, counts the answers and prints a
recommendation once either count reaches the threshold (default: at least 7).
A timestamped results file is written afterwards.

Configuration files are loaded from (in priority order):
1. ASSESSMENT_* environment variables (e.g. ASSESSMENT_SCORING__THRESHOLD)
2. --config <path>     Explicit config file
3. ./assessment.toml   Project-level config
4. ~/.config/yesno-assessment/config.toml   Global config

Example:
  assessment
  assessment --preset general --strict
  assessment --answers answers.toml --output summary --no-export
  assessment --threshold ">7" --stdout
"#)]
pub struct Cli {
    /// Built-in questionnaire to use
    #[arg(long, value_enum, value_name = "PRESET")]
    pub preset: Option<PresetArg>,

    /// Questionnaire TOML file (overrides --preset)
    #[arg(long, value_name = "PATH")]
    pub questionnaire: Option<PathBuf>,

    /// Read answers from a TOML or JSON file instead of prompting
    #[arg(short, long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Threshold rule: atleast:N, morethan:N, >=N or >N
    #[arg(short, long, value_name = "RULE")]
    pub threshold: Option<String>,

    /// Require every question to be answered before scoring
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory to write the results file to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the results file to stdout instead of writing it
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,

    /// Do not export a results file
    #[arg(long, conflicts_with_all = ["stdout", "output_dir"])]
    pub no_export: bool,

    /// List the questions and exit
    #[arg(long)]
    pub list_questions: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the intro banner and notes
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
