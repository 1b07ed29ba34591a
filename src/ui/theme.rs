//! Visual theme and styling.

use console::Style;

/// Named styles used by the report.
///
/// The theme is passed to whatever renders output; nothing reads colors
/// from global state.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for informational headings (cyan).
    pub info: Style,
    /// Style for secondary detail lines (gray).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            info: Style::new().cyan(),
            dim: Style::new().black().bright(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            info: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_terminal(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (text in green).
    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(msg).to_string()
    }

    /// Format a warning message (text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(msg).to_string()
    }

    /// Format an informational heading (text in cyan).
    pub fn format_info(&self, msg: &str) -> String {
        self.info.apply_to(msg).to_string()
    }

    /// Format a detail line (text in gray).
    pub fn format_dim(&self, msg: &str) -> String {
        self.dim.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("ok"), "ok");
        assert_eq!(theme.format_warning("careful"), "careful");
        assert_eq!(theme.format_info("heading"), "heading");
        assert_eq!(theme.format_dim("detail"), "detail");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = Theme::new();
        assert!(theme.format_success("installed").contains("installed"));
        assert!(theme.format_dim("Install from").contains("Install from"));
    }

    #[test]
    fn forced_styles_emit_ansi_codes() {
        let theme = Theme {
            success: Style::new().green().force_styling(true),
            ..Theme::plain()
        };
        assert_eq!(theme.format_success("ok"), "\u{1b}[32mok\u{1b}[0m");
    }

    #[test]
    fn for_terminal_selects_theme() {
        let plain = Theme::for_terminal(false);
        assert_eq!(plain.format_warning("x"), "x");

        let colored = Theme::for_terminal(true);
        assert!(colored.format_warning("x").contains('x'));
    }

    #[test]
    fn default_impl_matches_new() {
        assert_eq!(
            Theme::default().format_info("test"),
            Theme::new().format_info("test")
        );
    }
}
