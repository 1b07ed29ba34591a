//! Report rendering.
//!
//! Turns a [`CheckReport`] into the lines shown to the user: a header, one
//! line per installed dependency, a guidance block per missing one, and a
//! closing summary.

use super::icons::StatusKind;
use super::theme::Theme;
use crate::requirements::{CheckReport, CheckResult, Dependency, DependencyRegistry, Platform};

/// Heading printed before any probe result.
pub const HEADER: &str = "Checking optional dependencies...";

/// Summary when every dependency was found.
pub const ALL_INSTALLED: &str = "All optional dependencies are installed!";

/// Summary when at least one dependency is missing.
pub const SOME_MISSING: &str = "Some optional dependencies are missing.";

/// Renders check results for one platform.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    theme: Theme,
    platform: Platform,
    show_reasons: bool,
}

impl ReportRenderer {
    /// Create a renderer for the given theme and platform.
    pub fn new(theme: Theme, platform: Platform) -> Self {
        Self {
            theme,
            platform,
            show_reasons: false,
        }
    }

    /// Also show why each missing dependency was rejected.
    pub fn with_reasons(mut self, show: bool) -> Self {
        self.show_reasons = show;
        self
    }

    /// Render the full report.
    pub fn render(&self, registry: &DependencyRegistry, report: &CheckReport) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            self.theme.format_info(HEADER),
            String::new(),
        ];

        for result in report.results() {
            match registry.get(&result.dependency) {
                Some(dep) => self.render_result(dep, result, &mut lines),
                None => {
                    tracing::warn!("No registry entry for '{}'", result.dependency);
                }
            }
        }

        self.render_summary(registry, report, &mut lines);
        lines
    }

    fn render_result(&self, dep: &Dependency, result: &CheckResult, lines: &mut Vec<String>) {
        let kind = StatusKind::from(&result.outcome);
        let title = format!("{} ({})", dep.display_name, dep.command);

        let Some(reason) = result.outcome.absent_reason() else {
            lines.push(kind.format(&self.theme, &format!("{} - installed", title)));
            return;
        };

        lines.push(kind.format(&self.theme, &format!("{} - not found", title)));
        if !dep.purpose.is_empty() {
            lines.push(self.detail(&format!("Required for: {}", dep.purpose)));
        }
        if !dep.homepage.is_empty() {
            lines.push(self.detail(&format!("Install from: {}", dep.homepage)));
        }
        if let Some(hint) = dep.install_hint(&self.platform) {
            lines.push(self.detail(&format!("{}: {}", self.platform.label(), hint.command)));
        }
        if self.show_reasons {
            lines.push(self.detail(&format!("Reason: {}", reason)));
        }
        lines.push(String::new());
    }

    fn render_summary(
        &self,
        registry: &DependencyRegistry,
        report: &CheckReport,
        lines: &mut Vec<String>,
    ) {
        if report.all_satisfied() {
            lines.push(String::new());
            lines.push(self.theme.format_success(ALL_INSTALLED));
            lines.push(String::new());
            return;
        }

        lines.push(self.theme.format_warning(SOME_MISSING));
        for missing in report.missing() {
            if let Some(dep) = registry.get(&missing.dependency) {
                let feature = if dep.feature.is_empty() {
                    "some workflows"
                } else {
                    dep.feature.as_str()
                };
                lines.push(self.theme.format_dim(&format!(
                    "You can still use basic features, but {} requires {}.",
                    feature, dep.display_name
                )));
            }
        }
        lines.push(String::new());
    }

    fn detail(&self, text: &str) -> String {
        self.theme.format_dim(&format!("  {}", text))
    }
}
