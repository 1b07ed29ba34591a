//! Dependency checker.
//!
//! The `DependencyChecker` probes every registered dependency once, in
//! registry order, and collects the outcomes into a [`CheckReport`].

use crate::requirements::probe::probe_command;
use crate::requirements::registry::DependencyRegistry;
use crate::requirements::status::{CheckReport, CheckResult, ProbeOutcome};

/// Checks whether registered dependencies are installed.
///
/// The probe function is injectable so tests can decide outcomes without
/// spawning processes.
pub struct DependencyChecker<'a, F> {
    registry: &'a DependencyRegistry,
    probe: F,
}

impl<'a> DependencyChecker<'a, fn(&str) -> ProbeOutcome> {
    /// Create a checker that probes real commands.
    pub fn new(registry: &'a DependencyRegistry) -> Self {
        Self {
            registry,
            probe: probe_command,
        }
    }
}

impl<'a, F> DependencyChecker<'a, F>
where
    F: Fn(&str) -> ProbeOutcome,
{
    /// Create a checker with a custom probe function.
    ///
    /// The function receives each dependency's command name.
    pub fn with_probe(registry: &'a DependencyRegistry, probe: F) -> Self {
        Self { registry, probe }
    }

    /// Probe every registered dependency.
    pub fn check_all(&self) -> CheckReport {
        let results = self
            .registry
            .iter()
            .map(|dep| {
                let outcome = (self.probe)(&dep.command);
                tracing::debug!(
                    "Dependency '{}' ({}): {}",
                    dep.name,
                    dep.command,
                    if outcome.is_present() {
                        "present"
                    } else {
                        "absent"
                    }
                );
                CheckResult {
                    dependency: dep.name.clone(),
                    outcome,
                }
            })
            .collect();

        CheckReport::new(results)
    }
}
