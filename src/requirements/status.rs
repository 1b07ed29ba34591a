//! Probe outcome types.
//!
//! Each probe produces a [`ProbeOutcome`]. Failures are kept as an
//! [`AbsentReason`] instead of being swallowed, so callers can still
//! treat the outcome as a plain present/absent flag while tests and
//! verbose output can see why a tool was not usable.

use thiserror::Error;

/// Why a probed command was reported as absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbsentReason {
    /// The shell could not locate the command.
    #[error("command not found")]
    NotFound,

    /// The command exists but could not be executed (e.g., permission denied).
    #[error("command is not executable")]
    NotExecutable,

    /// The command ran but `--version` did not exit cleanly.
    #[error("exited with status {}", describe_code(.code))]
    NonZeroExit {
        /// Exit code, or None if terminated by a signal.
        code: Option<i32>,
    },

    /// The probe process itself could not be started.
    #[error("probe could not be started: {message}")]
    SpawnFailed { message: String },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

/// The result of probing a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Command started and `--version` exited with status 0.
    Present,

    /// Command is not usable.
    Absent(AbsentReason),
}

impl ProbeOutcome {
    /// Whether the command is available.
    pub fn is_present(&self) -> bool {
        matches!(self, ProbeOutcome::Present)
    }

    /// The reason the command is absent, if it is.
    pub fn absent_reason(&self) -> Option<&AbsentReason> {
        match self {
            ProbeOutcome::Present => None,
            ProbeOutcome::Absent(reason) => Some(reason),
        }
    }
}

/// The result of checking one registered dependency.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Registry name of the dependency that was checked
    pub dependency: String,
    /// What the probe found
    pub outcome: ProbeOutcome,
}

/// Results of a full check run, in registry order.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    results: Vec<CheckResult>,
}

impl CheckReport {
    /// Build a report from individual results.
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// All results, in the order they were checked.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Whether every checked dependency is present.
    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_present())
    }

    /// Results for dependencies that were not found.
    pub fn missing(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.outcome.is_present())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, outcome: ProbeOutcome) -> CheckResult {
        CheckResult {
            dependency: name.to_string(),
            outcome,
        }
    }

    #[test]
    fn present_is_present() {
        let outcome = ProbeOutcome::Present;
        assert!(outcome.is_present());
        assert!(outcome.absent_reason().is_none());
    }

    #[test]
    fn absent_keeps_reason() {
        let outcome = ProbeOutcome::Absent(AbsentReason::NotFound);
        assert!(!outcome.is_present());
        assert_eq!(outcome.absent_reason(), Some(&AbsentReason::NotFound));
    }

    #[test]
    fn non_zero_exit_displays_code() {
        let reason = AbsentReason::NonZeroExit { code: Some(2) };
        assert_eq!(reason.to_string(), "exited with status 2");
    }

    #[test]
    fn signal_termination_displays_unknown() {
        let reason = AbsentReason::NonZeroExit { code: None };
        assert!(reason.to_string().contains("signal"));
    }

    #[test]
    fn spawn_failed_displays_message() {
        let reason = AbsentReason::SpawnFailed {
            message: "No such file or directory".into(),
        };
        assert!(reason.to_string().contains("No such file or directory"));
    }

    #[test]
    fn empty_report_is_satisfied() {
        let report = CheckReport::default();
        assert!(report.all_satisfied());
        assert_eq!(report.missing().count(), 0);
    }

    #[test]
    fn report_with_absent_is_not_satisfied() {
        let report = CheckReport::new(vec![
            result("git", ProbeOutcome::Present),
            result("bb", ProbeOutcome::Absent(AbsentReason::NotFound)),
        ]);
        assert!(!report.all_satisfied());

        let missing: Vec<_> = report.missing().map(|r| r.dependency.as_str()).collect();
        assert_eq!(missing, vec!["bb"]);
        assert_eq!(report.results().len(), 2);
    }
}
