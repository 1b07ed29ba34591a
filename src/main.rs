//! depcheck CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use depcheck::cli::{output_mode, run_check, Cli};
use depcheck::requirements::CheckReport;
use depcheck::ui::Output;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never interleave with the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("depcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run the check against stdout.
fn run(cli: &Cli) -> anyhow::Result<CheckReport> {
    let mut output = Output::stdout(output_mode(cli));
    run_check(cli, &mut output).context("failed to write dependency report")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("depcheck starting with args: {:?}", cli);

    match run(&cli) {
        Ok(report) => {
            tracing::debug!("All dependencies satisfied: {}", report.all_satisfied());
        }
        Err(e) => {
            tracing::warn!("Dependency check did not complete: {:#}", e);
        }
    }

    // Advisory only: a missing tool must never fail the caller.
    ExitCode::SUCCESS
}
