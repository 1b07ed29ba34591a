//! Status icons for report lines.

use super::theme::Theme;
use crate::requirements::ProbeOutcome;

/// Status kinds shown in front of a dependency line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Dependency is installed.
    Success,
    /// Dependency is missing.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<&ProbeOutcome> for StatusKind {
    fn from(outcome: &ProbeOutcome) -> Self {
        if outcome.is_present() {
            Self::Success
        } else {
            Self::Warning
        }
    }
}
