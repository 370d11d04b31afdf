//! Main entry point for Brewlog.

use brewlog_cli::{run, Cli, CliResult, Outcome};
use brewlog_common::{init_logging, LoggingConfig};
use brewlog_config::ConfigLoader;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

/// Exit code for errors, distinct from "invalid entries".
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {}", err.report());
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn try_main(cli: &Cli) -> CliResult<Outcome> {
    let config = ConfigLoader::load(cli.config.as_deref())?;

    let mut logging = LoggingConfig::from(&config.logging);
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(&logging)?;
    debug!(version = env!("CARGO_PKG_VERSION"), ?config, "starting brewlog");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &config, &mut out)
}
