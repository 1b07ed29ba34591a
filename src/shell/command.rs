//! Shell command execution.

use crate::error::{DepcheckError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Result of executing a shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>) -> Self {
        Self {
            exit_code,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Shell to run the command line with (None = platform default).
    pub shell: Option<PathBuf>,
}

/// Execute a command line through the platform shell and wait for it.
///
/// Output goes to the null device so a probed tool can never write into
/// the report.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let shell = options.shell.clone().unwrap_or_else(default_shell);

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    let status = cmd.status().map_err(|source| DepcheckError::CommandFailed {
        command: command.to_string(),
        shell: shell.clone(),
        source,
    })?;

    if status.success() {
        Ok(CommandResult::success())
    } else {
        Ok(CommandResult::failure(status.code()))
    }
}

/// The shell used to interpret command lines.
///
/// A fixed POSIX shell on Unix keeps probes independent of the user's
/// login shell and its startup files.
fn default_shell() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var_os("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cmd.exe"))
    } else {
        PathBuf::from("/bin/sh")
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
