use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command, ConfigAction};
use screener_session::config::{default_config_path, load_config};

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match &cli.command {
        Command::Route(args) => commands::route(args),
        Command::Analyze(args) => commands::analyze(args),
        Command::Summary(args) => commands::summary(args, &load_config(&config_path)?),
        Command::Replay(args) => commands::replay(args),
        Command::Rules => commands::rules(),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&load_config(&config_path)?),
            ConfigAction::Init => commands::init_config(&config_path),
        },
    }
}
