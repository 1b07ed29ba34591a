//! The dependency check command.

use std::io::Write;

use super::args::Cli;
use crate::error::Result;
use crate::requirements::{CheckReport, DependencyChecker, DependencyRegistry};
use crate::ui::{should_use_colors, Output, OutputMode, ReportRenderer, Theme};

/// Probe every built-in dependency and print the report.
///
/// Returns the report so callers can inspect it; whether anything is
/// missing never turns into an error. Only a failed write of the report
/// does.
pub fn run_check<W: Write>(cli: &Cli, output: &mut Output<W>) -> Result<CheckReport> {
    let registry = DependencyRegistry::new();
    let platform = cli.target_platform();
    tracing::debug!(
        "Checking {} optional dependencies for {}",
        registry.len(),
        platform
    );

    let report = DependencyChecker::new(&registry).check_all();

    let theme = Theme::for_terminal(!cli.no_color && should_use_colors());
    let renderer =
        ReportRenderer::new(theme, platform).with_reasons(output.mode().shows_reasons());

    output.write_lines(renderer.render(&registry, &report))?;

    Ok(report)
}

/// Output mode selected by the command-line flags.
pub fn output_mode(cli: &Cli) -> OutputMode {
    if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    }
}
