//! Library integration tests.

use depcheck::requirements::{
    probe_command, AbsentReason, Dependency, DependencyChecker, DependencyRegistry, Platform,
    ProbeOutcome,
};
use depcheck::ui::{ReportRenderer, Theme};
use depcheck::DepcheckError;

fn registry_for(command: &str) -> DependencyRegistry {
    let mut registry = DependencyRegistry::empty();
    registry.register(
        Dependency::new("tool", "Tool", command)
            .needed_for("Extended workflow", "extended workflow")
            .homepage("https://example.com/tool")
            .with_hint(Platform::MacOS, "brew install tool")
            .with_hint(Platform::Windows, "scoop install tool")
            .with_hint(Platform::Linux, "curl -s https://example.com/install | sh"),
    );
    registry
}

fn render(registry: &DependencyRegistry, platform: Platform) -> Vec<String> {
    let report = DependencyChecker::new(registry).check_all();
    ReportRenderer::new(Theme::plain(), platform).render(registry, &report)
}

fn install_lines(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|l| ["  Mac:", "  Windows:", "  Linux:"].iter().any(|p| l.starts_with(p)))
        .count()
}

#[test]
fn error_types_are_public() {
    let err = DepcheckError::CommandFailed {
        command: "bb --version".into(),
        shell: "/bin/sh".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("bb --version"));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> depcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn fake_tool_on_linux_reports_not_found_with_curl() {
    let registry = registry_for("definitely-not-a-real-tool-xyz");
    let lines = render(&registry, Platform::from_identifier("linux"));

    assert!(lines
        .iter()
        .any(|l| l.starts_with('⚠') && l.contains("not found")));
    assert!(lines.iter().any(|l| l.contains("curl")));
    assert_eq!(install_lines(&lines), 1);
}

#[test]
fn fake_tool_gets_one_install_line_per_known_os() {
    let registry = registry_for("definitely-not-a-real-tool-xyz");
    for id in ["darwin", "win32", "linux"] {
        let lines = render(&registry, Platform::from_identifier(id));
        assert_eq!(install_lines(&lines), 1, "platform {}", id);
    }

    let lines = render(&registry, Platform::from_identifier("sunos"));
    assert_eq!(install_lines(&lines), 0);
}

#[test]
fn builtin_reports_installed_on_any_os() {
    let registry = registry_for("echo");
    for id in ["darwin", "win32", "linux", "sunos"] {
        let lines = render(&registry, Platform::from_identifier(id));
        assert!(lines.iter().any(|l| l.starts_with('✓')));
        assert!(!lines.iter().any(|l| l.contains("not found")));
        assert!(lines
            .iter()
            .any(|l| l == "All optional dependencies are installed!"));
    }
}

#[test]
fn probe_keeps_absent_reason() {
    let outcome = probe_command("definitely-not-a-real-tool-xyz");
    assert!(matches!(outcome, ProbeOutcome::Absent(_)));
    if cfg!(unix) {
        assert_eq!(outcome, ProbeOutcome::Absent(AbsentReason::NotFound));
    }
}

#[test]
fn checking_twice_renders_identically() {
    let registry = registry_for("definitely-not-a-real-tool-xyz");
    assert_eq!(
        render(&registry, Platform::Linux),
        render(&registry, Platform::Linux)
    );
}
