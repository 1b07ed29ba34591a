//! CLI argument definitions.
//!
//! Every flag is optional; running `depcheck` with no arguments checks the
//! built-in dependencies for the current platform.

use clap::Parser;

use crate::requirements::Platform;

/// depcheck - Check for optional external tools.
#[derive(Debug, Parser)]
#[command(name = "depcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show install guidance for this OS instead of the detected one
    /// (macos, windows, linux, ...)
    #[arg(long, value_name = "OS")]
    pub platform: Option<Platform>,

    /// Explain why a missing dependency was not usable
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The platform to render install guidance for.
    pub fn target_platform(&self) -> Platform {
        self.platform.clone().unwrap_or_else(Platform::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::parse_from(["depcheck"]);
        assert!(cli.platform.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert!(!cli.debug);
        assert_eq!(cli.target_platform(), Platform::current());
    }

    #[test]
    fn platform_flag_is_parsed() {
        let cli = Cli::parse_from(["depcheck", "--platform", "darwin"]);
        assert_eq!(cli.target_platform(), Platform::MacOS);
    }

    #[test]
    fn unknown_platform_is_accepted() {
        let cli = Cli::parse_from(["depcheck", "--platform", "plan9"]);
        assert_eq!(cli.target_platform(), Platform::Other("plan9".into()));
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::parse_from(["depcheck", "-v", "--no-color", "--debug"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["depcheck", "--install"]).is_err());
    }
}
