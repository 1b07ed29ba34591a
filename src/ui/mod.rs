//! Terminal output components.
//!
//! This module provides:
//! - [`Theme`] named styles passed explicitly to renderers
//! - [`StatusKind`] icons for report lines
//! - [`ReportRenderer`] which turns check results into text
//! - [`Output`] which writes rendered lines
//!
//! # Example
//!
//! ```
//! use depcheck::requirements::{DependencyChecker, DependencyRegistry, Platform, ProbeOutcome};
//! use depcheck::ui::{ReportRenderer, Theme};
//!
//! let registry = DependencyRegistry::new();
//! let report = DependencyChecker::with_probe(&registry, |_: &str| ProbeOutcome::Present)
//!     .check_all();
//! let lines = ReportRenderer::new(Theme::plain(), Platform::Linux).render(&registry, &report);
//! assert!(lines.iter().any(|l| l == "All optional dependencies are installed!"));
//! ```

pub mod icons;
pub mod output;
pub mod report;
pub mod theme;

pub use icons::StatusKind;
pub use output::{Output, OutputMode};
pub use report::ReportRenderer;
pub use theme::{should_use_colors, Theme};
