//! Command-line arguments for the `screener` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "screener",
    version,
    about = "Route and score self-screening questionnaire answers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: <config dir>/screener/config.json).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the section route for a set of core answers.
    Route(AnswersArg),

    /// Print the pattern results as JSON.
    Analyze(AnswersArg),

    /// Render the plain-text summary, referral e-mail or printable report.
    Summary(SummaryArgs),

    /// Replay answers page by page through a session, using a catalog.
    Replay(ReplayArgs),

    /// List the registered pattern rules.
    Rules,

    /// Show or initialise the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct AnswersArg {
    /// JSON object mapping question ids to answers.
    #[arg(value_name = "ANSWERS")]
    pub answers: PathBuf,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: AnswersArg,

    /// Wrap the summary in a referral e-mail to the configured clinician.
    #[arg(long)]
    pub email: bool,

    /// Report date (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<jiff::civil::Date>,

    /// Also write a printable DOCX report to this path.
    #[arg(long, value_name = "PATH")]
    pub docx: Option<PathBuf>,

    /// Question catalog used for the DOCX transcript.
    #[arg(long, value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub input: AnswersArg,

    /// Question catalog (JSON array of sections).
    #[arg(long, value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Write a default configuration file if none exists.
    Init,
}
