//! Optional dependency detection.
//!
//! This module provides tools for detecting whether optional external
//! tools are installed and usable, and for describing how to install
//! the ones that are not.
//!
//! # Modules
//!
//! - [`probe`] - Runs `<command> --version` and classifies the result
//! - [`registry`] - Known dependencies and per-platform install hints
//! - [`checker`] - Probes every registered dependency
//! - [`status`] - Probe outcome and report types

pub mod checker;
pub mod probe;
pub mod registry;
pub mod status;

pub use checker::DependencyChecker;
pub use probe::{probe_command, probe_command_with};
pub use registry::{Dependency, DependencyRegistry, InstallHint, Platform};
pub use status::{AbsentReason, CheckReport, CheckResult, ProbeOutcome};
