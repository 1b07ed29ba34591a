//! depcheck - Advisory check for optional external tools.
//!
//! depcheck probes each optional dependency by running `<command> --version`
//! and prints platform-specific install guidance for anything missing. It
//! is advisory only: the binary always exits 0.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency registry, probe, and checker
//! - [`shell`] - Shell command execution
//! - [`ui`] - Themes, icons, and report rendering
//!
//! # Example
//!
//! ```
//! use depcheck::requirements::{AbsentReason, DependencyChecker, DependencyRegistry, Platform, ProbeOutcome};
//! use depcheck::ui::{ReportRenderer, Theme};
//!
//! let registry = DependencyRegistry::new();
//! let report = DependencyChecker::with_probe(&registry, |_: &str| {
//!     ProbeOutcome::Absent(AbsentReason::NotFound)
//! })
//! .check_all();
//!
//! let lines = ReportRenderer::new(Theme::plain(), Platform::Linux).render(&registry, &report);
//! assert!(lines.iter().any(|l| l.contains("curl")));
//! ```

pub mod cli;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{DepcheckError, Result};
