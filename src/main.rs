//! Restamp - Recursive Timestamp Rewriter
//!
//! CLI entry point: parse arguments, initialize logging, run one pass.

use clap::Parser;
use console::style;
use restamp::cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Progress lines show by default; -v adds per-entry detail
    let filter = match cli.verbose {
        0 => EnvFilter::new("restamp=info"),
        _ => EnvFilter::new("restamp=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match restamp::run(&cli.into_config()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
