use std::{io, process::ExitCode};

use clap::Parser;
use print_library::{Config, app::Session};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the dialogue
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    tracing::debug!(?config, "starting session");

    let mut session = Session::new(io::stdin().lock(), io::stdout(), config);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
