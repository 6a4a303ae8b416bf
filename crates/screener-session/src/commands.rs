use std::path::Path;

use eyre::WrapErr;

use screener_core::{AnswerStore, Section};
use screener_export::docx::generate_report_docx;
use screener_export::email::compose_referral_email;
use screener_export::render::render_summary;
use screener_export::styles::ReportStyles;
use screener_export::summary::ScreeningSummary;
use screener_export::transcript::build_transcript;
use screener_rules::{analyze_patterns, compute_route, rule_catalog};
use screener_session::config::{ScreenerConfig, save_config};
use screener_session::replay::replay_answers;

use crate::cli::{AnswersArg, ReplayArgs, SummaryArgs};

fn read_answers(path: &Path) -> eyre::Result<AnswerStore> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read answers at {}", path.display()))?;
    let answers = AnswerStore::from_loose_str(&contents)?;
    tracing::debug!(count = answers.len(), "loaded answers");
    Ok(answers)
}

fn read_catalog(path: &Path) -> eyre::Result<Vec<Section>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read catalog at {}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn route(args: &AnswersArg) -> eyre::Result<()> {
    let answers = read_answers(&args.answers)?;
    for section in compute_route(&answers) {
        println!("{section}");
    }
    Ok(())
}

pub fn analyze(args: &AnswersArg) -> eyre::Result<()> {
    let answers = read_answers(&args.answers)?;
    let results = analyze_patterns(&answers);
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

pub fn summary(args: &SummaryArgs, config: &ScreenerConfig) -> eyre::Result<()> {
    let answers = read_answers(&args.input.answers)?;
    let patterns = analyze_patterns(&answers);
    let date = args.date.unwrap_or_else(|| jiff::Zoned::now().date());
    let summary = ScreeningSummary::build(&answers, &patterns, date, None);
    let options = config.report_options();
    let text = render_summary(&summary, &options)?;

    if args.email {
        if config.clinician_email.is_empty() {
            tracing::warn!("no clinician e-mail configured; message has no recipient");
        }
        let email = compose_referral_email(&config.recipient(), date, &text);
        println!("To: {}\nSubject: {}\n\n{}", email.to, email.subject, email.body);
    } else {
        println!("{text}");
    }

    if let Some(out) = &args.docx {
        let catalog = match &args.catalog {
            Some(path) => read_catalog(path)?,
            None => Vec::new(),
        };
        let transcript = build_transcript(&compute_route(&answers), &catalog, &answers);
        let bytes = generate_report_docx(&summary, &transcript, &options, &ReportStyles::default())?;
        std::fs::write(out, bytes)
            .wrap_err_with(|| format!("failed to write report to {}", out.display()))?;
        tracing::info!(path = %out.display(), "printable report written");
    }

    Ok(())
}

pub fn replay(args: &ReplayArgs) -> eyre::Result<()> {
    let answers = read_answers(&args.input.answers)?;
    let catalog = read_catalog(&args.catalog)?;
    let outcome = replay_answers(&answers, &catalog);

    for section in &outcome.visited {
        println!("{section}");
    }
    if let Some(section) = outcome.blocked_at {
        println!("blocked: {section} has unanswered required questions");
    }

    let detected = outcome.session.findings().iter().filter(|r| r.detected).count();
    tracing::info!(detected, "replayed findings");
    Ok(())
}

pub fn rules() -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(&rule_catalog())?);
    Ok(())
}

pub fn show_config(config: &ScreenerConfig) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

pub fn init_config(path: &Path) -> eyre::Result<()> {
    if path.exists() {
        println!("config already exists at {}", path.display());
        return Ok(());
    }
    save_config(path, &ScreenerConfig::default())?;
    println!("wrote {}", path.display());
    Ok(())
}
