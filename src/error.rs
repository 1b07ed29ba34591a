//! Error types for depcheck operations.
//!
//! This module defines [`DepcheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures never surface to the caller; they become
//!   [`ProbeOutcome::Absent`](crate::requirements::ProbeOutcome::Absent)
//!   carrying this error's message
//! - Use `DepcheckError` for the few operations that can genuinely fail
//! - The binary adds `anyhow` context on top and logs the chain

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depcheck operations.
#[derive(Debug, Error)]
pub enum DepcheckError {
    /// The shell for a command line could not be started.
    #[error("Failed to start {} for '{command}': {source}", .shell.display())]
    CommandFailed {
        command: String,
        shell: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for depcheck operations.
pub type Result<T> = std::result::Result<T, DepcheckError>;
