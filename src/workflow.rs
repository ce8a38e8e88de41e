//! Bump workflow orchestration
//!
//! Wires the collaborators around the two pure cores: read the change
//! snapshot, run the skip checks, classify, transition, persist. Everything
//! here degrades to safe defaults except the final version write, whose
//! failure is the one hard error of the system.

use crate::boundary::BoundaryWarning;
use crate::classifier::preview::{predict_impact, PrImpact};
use crate::classifier::ChangeClassifier;
use crate::config::Config;
use crate::domain::{ChangeSet, Version};
use crate::error::Result;
use crate::git::ChangeSource;
use crate::report::{BumpReport, RunOutcome, SkipReason};
use crate::store::VersionStore;
use crate::transition::{next_version, Transition};

/// Version used when no parseable version is stored yet
const INITIAL_VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
    pre: None,
};

/// Runtime options for one bump run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Analyze and report without writing the version file
    pub dry_run: bool,
    /// Operator-forced bypass of the whole analysis
    pub skip_override: bool,
}

/// True when versioning is disabled through the environment
pub fn skip_requested_from_env() -> bool {
    std::env::var("SKIP_VERSIONING")
        .map(|value| value == "true")
        .unwrap_or(false)
}

/// Run the full analyze-and-bump workflow
///
/// Returns `Ok(Skipped(..))` for the bot-commit and override bypasses,
/// `Ok(Bumped(..))` for every completed analysis (including rejected
/// transitions, which leave the version unchanged and carry a warning),
/// and `Err` only when the version write fails.
pub fn run_bump<S: ChangeSource, V: VersionStore>(
    options: &WorkflowOptions,
    config: &Config,
    source: &S,
    store: &mut V,
) -> Result<RunOutcome> {
    let mut warnings = Vec::new();

    let changes = match source.head_changes() {
        Ok(changes) => changes,
        Err(e) => {
            warnings.push(BoundaryWarning::UnreadableChangeset {
                reason: e.to_string(),
            });
            ChangeSet::empty()
        }
    };

    // Never re-version the tool's own bump commit
    if changes.message.contains(&config.behavior.bot_marker) {
        return Ok(RunOutcome::Skipped(SkipReason::BotCommit));
    }

    if options.skip_override {
        return Ok(RunOutcome::Skipped(SkipReason::EnvOverride));
    }

    let current = read_current_version(store, &mut warnings);

    let classifier = ChangeClassifier::new(config);
    let decision = classifier.classify(&changes);

    let new_version = match next_version(&current, decision.kind) {
        Transition::Applied(version) => {
            if !options.dry_run {
                store.write_version(&version.to_string())?;
            }
            version
        }
        Transition::Rejected { warning } => {
            warnings.push(BoundaryWarning::RejectedTransition { detail: warning });
            current
        }
    };

    Ok(RunOutcome::Bumped(BumpReport {
        old_version: current.to_string(),
        new_version: new_version.to_string(),
        kind: decision.kind,
        reason: decision.reason,
        warnings,
    }))
}

/// Result of a preview run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewReport {
    pub base_version: String,
    pub impact: PrImpact,
    pub warnings: Vec<BoundaryWarning>,
}

/// Predict the bump a branch would produce against the base revision
///
/// Read-only: never touches the version store content.
pub fn run_preview<S: ChangeSource, V: VersionStore>(
    config: &Config,
    base: &str,
    source: &S,
    store: &V,
) -> PreviewReport {
    let mut warnings = Vec::new();

    let changes = match source.changes_against(base) {
        Ok(changes) => changes,
        Err(e) => {
            warnings.push(BoundaryWarning::UnreadableChangeset {
                reason: e.to_string(),
            });
            ChangeSet::empty()
        }
    };

    let base_version = read_current_version(store, &mut warnings);
    let impact = predict_impact(&changes, &config.heuristics);

    PreviewReport {
        base_version: base_version.to_string(),
        impact,
        warnings,
    }
}

/// Read the stored version, substituting the initial fallback on any
/// missing or unparseable input
fn read_current_version<V: VersionStore>(
    store: &V,
    warnings: &mut Vec<BoundaryWarning>,
) -> Version {
    match store.read_version() {
        Ok(Some(raw)) => match Version::parse(&raw) {
            Ok(version) => version,
            Err(_) => {
                warnings.push(BoundaryWarning::UnparsableVersion {
                    raw,
                    fallback: INITIAL_VERSION.to_string(),
                });
                INITIAL_VERSION
            }
        },
        Ok(None) => {
            warnings.push(BoundaryWarning::MissingVersionFile {
                fallback: INITIAL_VERSION.to_string(),
            });
            INITIAL_VERSION
        }
        Err(e) => {
            warnings.push(BoundaryWarning::MissingVersionFile {
                fallback: format!("{} ({})", INITIAL_VERSION, e),
            });
            INITIAL_VERSION
        }
    }
}
