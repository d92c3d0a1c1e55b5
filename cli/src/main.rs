//! CLI entrypoint for yesno-assessment
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use assessment_application::{
    AnswerSource, AnswerSourceError, AssessmentLogger, ExportReportUseCase, NoAssessmentLogger,
    ReportSink, RunAssessmentError, RunAssessmentUseCase, SubmitAssessmentUseCase, SystemClock,
};
use assessment_domain::{
    ConfigIssue, OutputFormat, Preset, Questionnaire, ScoringPolicy, Severity, ThresholdRule,
    config::check_threshold_reachable,
};
use assessment_infrastructure::{
    ConfigLoader, DirectoryReportSink, FileAnswerSource, FileConfig, JsonlAssessmentLogger,
    QuestionnaireLoader, StdoutReportSink,
};
use assessment_presentation::{
    Cli, ConsoleFormatter, InteractiveAnswerSource, Interviewer, disable_colors,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `--stdout` output stays clean
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting yesno-assessment");

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    report_issues(&config.validate())?;

    if cli.no_color || !config.output.color {
        disable_colors();
    }

    let questionnaire = load_questionnaire(&cli, &config)?;
    let policy = build_policy(&cli, &config)?;

    if let Some(issue) = check_threshold_reachable(&policy.threshold, questionnaire.len()) {
        report_issues(&[issue])?;
    }

    if cli.list_questions {
        print!("{}", ConsoleFormatter::format_questions(&questionnaire, &policy));
        return Ok(());
    }

    // === Dependency Injection ===
    let logger: Arc<dyn AssessmentLogger> = match config
        .log
        .audit_path()
        .and_then(JsonlAssessmentLogger::open)
    {
        Some(logger) => {
            info!("Audit log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAssessmentLogger),
    };

    let source: Box<dyn AnswerSource> = match &cli.answers {
        Some(path) => Box::new(FileAnswerSource::new(path)),
        None => {
            let interviewer = if cli.quiet {
                Interviewer::new().quiet()
            } else {
                Interviewer::new()
            };
            Box::new(
                InteractiveAnswerSource::new(interviewer)
                    .with_prompt_on_stderr(results_go_to_stderr(&cli)),
            )
        }
    };

    let submit = SubmitAssessmentUseCase::new(Arc::new(SystemClock)).with_logger(logger.clone());
    let outcome = match RunAssessmentUseCase::new(source.as_ref(), submit)
        .execute(&questionnaire, policy)
    {
        Ok(outcome) => outcome,
        Err(RunAssessmentError::Collect(AnswerSourceError::Cancelled)) => {
            eprintln!("Assessment cancelled. Nothing was recorded.");
            return Ok(());
        }
        Err(e) => bail!("{}", e),
    };

    // === Output ===
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let rendered = ConsoleFormatter::render(&outcome.report, format);
    if results_go_to_stderr(&cli) {
        eprintln!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    if cli.no_export {
        return Ok(());
    }

    let sink: Arc<dyn ReportSink> = if cli.stdout {
        Arc::new(StdoutReportSink)
    } else {
        let dir = cli
            .output_dir
            .clone()
            .unwrap_or_else(|| config.export.dir_or_current());
        Arc::new(DirectoryReportSink::new(dir))
    };

    let export = ExportReportUseCase::new(sink)
        .with_exporter(config.export.to_exporter())
        .with_logger(logger);

    // The report is already shown; a failed export is not fatal
    match export.execute(&outcome.report) {
        Ok(exported) if !cli.stdout => {
            eprintln!("Results saved to {}", exported.location);
        }
        Ok(_) => {}
        Err(e) => {
            error!("Export failed: {}", e);
            eprintln!("Could not save the results file: {}", e);
            if e.is_retryable() {
                eprintln!("Try again with --output-dir <DIR> or --stdout.");
            }
        }
    }

    Ok(())
}

/// With `--stdout`, stdout carries only the exported results file
fn results_go_to_stderr(cli: &Cli) -> bool {
    cli.stdout && !cli.no_export
}

/// Print configuration issues and stop on any error-level issue
fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
        eprintln!("config: {}", issue.message);
    }

    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Configuration is invalid; fix the issues above and try again.");
    }
    Ok(())
}

/// `--questionnaire`, then `[questionnaire] file`, then the selected preset
fn load_questionnaire(cli: &Cli, config: &FileConfig) -> Result<Questionnaire> {
    if let Some(path) = cli.questionnaire.as_ref().or(config.questionnaire.file.as_ref()) {
        info!("Loading questionnaire from {}", path.display());
        return Ok(QuestionnaireLoader::load(path)?);
    }

    let preset = match cli.preset {
        Some(arg) => Preset::from(arg),
        None => config.questionnaire.parse_preset().0,
    };
    info!("Using preset '{}'", preset);

    preset
        .build()
        .with_context(|| format!("Could not build preset '{}'", preset))
}

/// Scoring policy from config with command-line overrides
fn build_policy(cli: &Cli, config: &FileConfig) -> Result<ScoringPolicy> {
    let (mut policy, _) = config.scoring.to_policy();

    if let Some(raw) = &cli.threshold {
        policy.threshold = raw
            .parse::<ThresholdRule>()
            .map_err(|e| anyhow::anyhow!("Invalid --threshold: {}", e))?;
    }

    if cli.strict {
        policy = policy.strict();
    }

    info!(
        "Recommendation when a count is {}{}",
        policy.threshold.description(),
        if policy.requires_all_answers() {
            " (all answers required)"
        } else {
            ""
        }
    );

    Ok(policy)
}
