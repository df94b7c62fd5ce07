mod cli;
mod oneshot;
mod platform;

use std::process::ExitCode;

use analyser_engine::ApiConfig;
use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_info, LogDestination};
use log::LevelFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("web_analyser error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // The interactive form owns the terminal, so it only ever logs to the file.
    let destination = if cli.verbose && !cli.is_interactive() {
        LogDestination::Both(cli.log_file.clone())
    } else {
        LogDestination::File(cli.log_file.clone())
    };
    engine_logging::initialize(destination, level);
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = ApiConfig::from_env(cli.api_base_url.as_deref(), cli.origin.as_deref())
        .context("invalid API configuration")?;
    engine_info!("Using analysis service at {}", config.base_url());

    if cli.check {
        return oneshot::check(config);
    }
    match cli.url.as_deref() {
        Some(url) => oneshot::analyse(url, cli.format, config),
        None => {
            platform::run_app(config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
