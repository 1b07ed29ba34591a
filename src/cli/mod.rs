//! Command-line interface for depcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The dependency check itself

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{output_mode, run_check};
