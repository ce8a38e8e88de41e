//! Run results and CI reporting
//!
//! A completed run produces either a [BumpReport] or a [SkipReason]. Both
//! can be exported as `key=value` pairs appended to the file named by
//! `$GITHUB_OUTPUT`, plus a human-readable markdown summary, matching the
//! contract the surrounding automation consumes.

use crate::boundary::BoundaryWarning;
use crate::classifier::preview::PrImpact;
use crate::domain::BumpKind;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Structured result of a completed bump run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpReport {
    pub old_version: String,
    pub new_version: String,
    pub kind: BumpKind,
    pub reason: String,
    /// Degraded-input and rejected-transition warnings collected on the way
    pub warnings: Vec<BoundaryWarning>,
}

impl BumpReport {
    /// True when the run actually moved the version
    pub fn changed(&self) -> bool {
        self.old_version != self.new_version
    }
}

/// Why a run ended without a version change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The analyzed commit is the tool's own bump commit
    BotCommit,
    /// Versioning disabled through the environment override
    EnvOverride,
}

impl SkipReason {
    /// Reason code used in CI outputs
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::BotCommit => "bot-commit",
            SkipReason::EnvOverride => "env-override",
        }
    }
}

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Bumped(BumpReport),
    Skipped(SkipReason),
}

/// Output pairs for a completed bump
pub fn bump_outputs(report: &BumpReport) -> Vec<(&'static str, String)> {
    vec![
        ("old-version", report.old_version.clone()),
        ("new-version", report.new_version.clone()),
        ("bump-type", report.kind.as_str().to_string()),
        ("reason", report.reason.clone()),
    ]
}

/// Output pairs for a skipped run (or a failed update)
pub fn skip_outputs(reason_code: &str) -> Vec<(&'static str, String)> {
    vec![
        ("should-skip", "true".to_string()),
        ("skip-reason", reason_code.to_string()),
    ]
}

/// Append `key=value` pairs to the file named by `$GITHUB_OUTPUT`
///
/// A no-op outside CI (variable unset).
pub fn write_github_outputs(pairs: &[(&'static str, String)]) -> Result<()> {
    let Some(path) = std::env::var_os("GITHUB_OUTPUT") else {
        return Ok(());
    };

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    for (key, value) in pairs {
        writeln!(file, "{}={}", key, value)?;
    }
    Ok(())
}

/// Write the markdown summary for a completed bump
pub fn write_summary(report: &BumpReport, path: &Path) -> Result<()> {
    let mut body = String::new();
    body.push_str("## Automated version update\n\n");
    body.push_str(&format!(
        "**{}** -> **{}**\n\n",
        report.old_version, report.new_version
    ));
    body.push_str(&format!("- Bump type: {}\n", report.kind));
    body.push_str(&format!("- Reason: {}\n", report.reason));
    if !report.changed() {
        body.push_str("- The version was left unchanged\n");
    }
    for warning in &report.warnings {
        body.push_str(&format!("\n> Warning: {}\n", warning));
    }

    fs::write(path, body)?;
    Ok(())
}

/// Write the markdown summary for a PR impact preview
pub fn write_preview_summary(impact: &PrImpact, base_version: &str, path: &Path) -> Result<()> {
    let mut body = String::new();
    body.push_str("## Version impact preview\n\n");
    body.push_str(&format!(
        "Merging this branch will likely apply a **{}** bump to **{}**.\n\n",
        impact.predicted, base_version
    ));
    body.push_str(&format!("- Files changed: {}\n", impact.total_files));
    body.push_str(&format!("- Source files: {}\n", impact.source_files));
    body.push_str(&format!("- New files: {}\n", impact.new_files));
    body.push_str(&format!("- Deleted files: {}\n", impact.deleted_files));
    body.push_str("\nThis is a preview; the final bump is decided after merge.\n");

    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn report() -> BumpReport {
        BumpReport {
            old_version: "1.2.3".to_string(),
            new_version: "1.3.0".to_string(),
            kind: BumpKind::Minor,
            reason: "New file: src/feature.rs".to_string(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_skip_reason_codes() {
        assert_eq!(SkipReason::BotCommit.as_str(), "bot-commit");
        assert_eq!(SkipReason::EnvOverride.as_str(), "env-override");
    }

    #[test]
    fn test_bump_outputs_pairs() {
        let pairs = bump_outputs(&report());
        assert!(pairs.contains(&("old-version", "1.2.3".to_string())));
        assert!(pairs.contains(&("new-version", "1.3.0".to_string())));
        assert!(pairs.contains(&("bump-type", "minor".to_string())));
    }

    #[test]
    fn test_report_changed() {
        assert!(report().changed());

        let mut unchanged = report();
        unchanged.new_version = unchanged.old_version.clone();
        assert!(!unchanged.changed());
    }

    #[test]
    #[serial]
    fn test_write_github_outputs_appends() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("outputs");
        std::env::set_var("GITHUB_OUTPUT", &out);

        write_github_outputs(&bump_outputs(&report())).unwrap();
        write_github_outputs(&skip_outputs("bot-commit")).unwrap();

        std::env::remove_var("GITHUB_OUTPUT");

        let content = fs::read_to_string(out).unwrap();
        assert!(content.contains("old-version=1.2.3"));
        assert!(content.contains("new-version=1.3.0"));
        assert!(content.contains("should-skip=true"));
        assert!(content.contains("skip-reason=bot-commit"));
    }

    #[test]
    #[serial]
    fn test_write_github_outputs_noop_without_env() {
        std::env::remove_var("GITHUB_OUTPUT");
        write_github_outputs(&bump_outputs(&report())).unwrap();
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version_summary.txt");

        write_summary(&report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("**1.2.3** -> **1.3.0**"));
        assert!(content.contains("Bump type: minor"));
        assert!(content.contains("New file: src/feature.rs"));
    }

    #[test]
    fn test_write_summary_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version_summary.txt");

        let mut r = report();
        r.new_version = r.old_version.clone();
        r.warnings.push(crate::boundary::BoundaryWarning::RejectedTransition {
            detail: "Cannot graduate 1.2.3".to_string(),
        });
        write_summary(&r, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("left unchanged"));
        assert!(content.contains("Cannot graduate 1.2.3"));
    }
}
