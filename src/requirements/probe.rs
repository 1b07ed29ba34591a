//! Command availability probe.
//!
//! A dependency counts as installed when `<command> --version` runs to a
//! zero exit status through the platform shell. Going through the shell
//! means builtins and aliases resolved by `sh` count too.
//!
//! A tool that exists but exits non-zero for `--version` is reported as
//! absent. The outcome keeps the exit code so that case can still be told
//! apart from a tool that is genuinely missing.
//!
//! # Example
//!
//! ```no_run
//! use depcheck::requirements::probe::probe_command;
//!
//! let outcome = probe_command("git");
//! if outcome.is_present() {
//!     println!("git is installed");
//! }
//! ```

use crate::requirements::status::{AbsentReason, ProbeOutcome};
use crate::shell::{execute, CommandOptions, CommandResult};

/// Flag passed to every probed command.
pub const VERSION_FLAG: &str = "--version";

/// Exit status POSIX shells use when a command cannot be found.
const SHELL_NOT_FOUND: i32 = 127;

/// Exit status POSIX shells use when a command is found but cannot run.
const SHELL_NOT_EXECUTABLE: i32 = 126;

/// Exit status `cmd.exe` uses when a command cannot be found.
const CMD_NOT_FOUND: i32 = 9009;

/// Probe a command using the current process environment.
pub fn probe_command(command: &str) -> ProbeOutcome {
    probe_command_with(command, &CommandOptions::default())
}

/// Probe a command with explicit execution options.
///
/// Any environment in `options` is layered over the process environment,
/// which lets callers probe against a different `PATH`.
pub fn probe_command_with(command: &str, options: &CommandOptions) -> ProbeOutcome {
    let line = format!("{} {}", command, VERSION_FLAG);
    let outcome = match execute(&line, options) {
        Ok(result) => classify(&result),
        Err(err) => ProbeOutcome::Absent(AbsentReason::SpawnFailed {
            message: err.to_string(),
        }),
    };

    tracing::debug!("Probed '{}': {:?}", line, outcome);
    outcome
}

/// Map a finished shell invocation to a probe outcome.
pub fn classify(result: &CommandResult) -> ProbeOutcome {
    if result.success {
        return ProbeOutcome::Present;
    }

    let reason = match result.exit_code {
        Some(SHELL_NOT_FOUND) if cfg!(unix) => AbsentReason::NotFound,
        Some(SHELL_NOT_EXECUTABLE) if cfg!(unix) => AbsentReason::NotExecutable,
        Some(CMD_NOT_FOUND) if cfg!(windows) => AbsentReason::NotFound,
        code => AbsentReason::NonZeroExit { code },
    };
    ProbeOutcome::Absent(reason)
}
