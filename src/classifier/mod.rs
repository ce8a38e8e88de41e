//! Change classification engine
//!
//! Turns a [ChangeSet] into a [BumpDecision] by accumulating severity-tagged
//! evidence from the commit message and the per-file diff scan. The rules are
//! data: every keyword list, extension set and threshold comes from
//! [crate::config::HeuristicsConfig] and [crate::config::PhrasesConfig].

pub mod preview;

use crate::config::{Config, HeuristicsConfig, PhrasesConfig};
use crate::domain::{BumpDecision, BumpKind, ChangeKind, ChangeSet, FileChange, IndicatorSet, Severity};
use regex::Regex;

/// Analyzes a changeset to determine the version bump to apply
pub struct ChangeClassifier {
    heuristics: HeuristicsConfig,
    phrases: PhrasesConfig,
    /// Compiled `breaking_patterns`; invalid patterns are dropped so a bad
    /// config entry cannot make classification fail
    breaking_patterns: Vec<Regex>,
    /// Path of the version metadata file, excluded from the scan so the
    /// classifier never reacts to its own prior output
    version_file_path: String,
}

impl ChangeClassifier {
    /// Create a classifier from the loaded configuration
    pub fn new(config: &Config) -> Self {
        let breaking_patterns = config
            .heuristics
            .breaking_patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        ChangeClassifier {
            heuristics: config.heuristics.clone(),
            phrases: config.phrases.clone(),
            breaking_patterns,
            version_file_path: config.version_file.path.clone(),
        }
    }

    /// Classify a changeset into a bump decision
    ///
    /// Deterministic and total: identical inputs always produce the same
    /// decision, and a changeset with no usable evidence falls back to a
    /// patch bump. Precedence: pre-release phrase overrides, then the
    /// initial-commit short circuit, then the per-file scan combined with
    /// the commit-message tone.
    pub fn classify(&self, changes: &ChangeSet) -> BumpDecision {
        let message_lower = changes.message.to_lowercase();

        if let Some(decision) = self.phrase_override(&message_lower) {
            return decision;
        }

        if changes.is_initial {
            return BumpDecision::new(BumpKind::Patch, "Initial commit");
        }

        let mut indicators = IndicatorSet::new();

        for file in &changes.files {
            if file.path == self.version_file_path {
                continue;
            }
            self.scan_file(file, &mut indicators);
        }

        self.scan_message_tone(&changes.message, &message_lower, &mut indicators);

        indicators.decide().unwrap_or_else(|| {
            BumpDecision::new(BumpKind::Patch, "No significant changes detected")
        })
    }

    /// Check the commit message against the pre-release phrase tables
    ///
    /// Tables are checked in ladder order: graduation first, then the three
    /// stage increments, then the two promotions. First match wins.
    fn phrase_override(&self, message_lower: &str) -> Option<BumpDecision> {
        let tables: [(&[String], BumpKind, &str); 6] = [
            (
                self.phrases.graduate.as_slice(),
                BumpKind::Graduate,
                "Graduation",
            ),
            (
                self.phrases.alpha_increment.as_slice(),
                BumpKind::AlphaIncrement,
                "Alpha increment",
            ),
            (
                self.phrases.beta_increment.as_slice(),
                BumpKind::BetaIncrement,
                "Beta increment",
            ),
            (
                self.phrases.rc_increment.as_slice(),
                BumpKind::RcIncrement,
                "Rc increment",
            ),
            (
                self.phrases.promote_to_beta.as_slice(),
                BumpKind::PromoteToBeta,
                "Promotion to beta",
            ),
            (
                self.phrases.promote_to_rc.as_slice(),
                BumpKind::PromoteToRc,
                "Promotion to rc",
            ),
        ];

        for (phrases, kind, label) in tables {
            if let Some(phrase) = phrases
                .iter()
                .find(|p| message_lower.contains(&p.to_lowercase()))
            {
                return Some(BumpDecision::new(
                    kind,
                    format!("{} requested in commit message ('{}')", label, phrase),
                ));
            }
        }

        None
    }

    /// Route one file change into the matching scan branch
    fn scan_file(&self, file: &FileChange, indicators: &mut IndicatorSet) {
        let path_lower = file.path.to_lowercase();

        if has_extension(&path_lower, &self.heuristics.source_extensions) {
            match file.kind {
                ChangeKind::Deleted => indicators.record(
                    Severity::Major,
                    format!("Deleted core file: {}", file.path),
                ),
                ChangeKind::Added => {
                    if contains_any(&path_lower, &self.heuristics.api_path_markers) {
                        indicators.record(
                            Severity::Minor,
                            format!("New API/interface: {}", file.path),
                        );
                    } else {
                        indicators.record(Severity::Minor, format!("New file: {}", file.path));
                    }
                }
                ChangeKind::Modified => match &file.diff_text {
                    Some(diff) => self.scan_diff(file, &path_lower, diff, indicators),
                    // No patch text available, the safest reading is a small fix
                    None => {
                        indicators.record(Severity::Patch, format!("Modified: {}", file.path))
                    }
                },
            }
        } else if has_extension(&path_lower, &self.heuristics.config_extensions) {
            if contains_any(&path_lower, &self.heuristics.manifest_markers) {
                indicators.record(
                    Severity::Minor,
                    format!("Package configuration updated: {}", file.path),
                );
            } else {
                indicators.record(Severity::Patch, format!("Config updated: {}", file.path));
            }
        } else if has_extension(&path_lower, &self.heuristics.doc_extensions) {
            indicators.record(
                Severity::Patch,
                format!("Documentation updated: {}", file.path),
            );
        } else if path_lower.contains("test") {
            indicators.record(Severity::Patch, format!("Tests updated: {}", file.path));
        }
    }

    /// Inspect the diff of a modified source file
    ///
    /// Three independent scans feed the accumulator: breaking-change
    /// keywords and patterns, change volume, and new-definition keywords.
    /// One file can contribute to all three buckets at once.
    fn scan_diff(
        &self,
        file: &FileChange,
        path_lower: &str,
        diff: &str,
        indicators: &mut IndicatorSet,
    ) {
        let diff_lower = diff.to_lowercase();

        let has_breaking_keyword = self
            .heuristics
            .breaking_keywords
            .iter()
            .any(|k| diff_lower.contains(&k.to_lowercase()))
            || self
                .breaking_patterns
                .iter()
                .any(|re| re.is_match(&diff_lower));

        if has_breaking_keyword {
            indicators.record(
                Severity::Major,
                format!("Breaking change detected in {}", file.path),
            );
        }

        // Change volume is approximated by counting raw '+'/'-' characters
        // rather than added/removed lines. The thresholds were calibrated
        // against this count, so it is kept as-is.
        let additions = diff.matches('+').count();
        let deletions = diff.matches('-').count();
        let total_changes = additions + deletions;

        if total_changes > self.heuristics.major_change_threshold {
            if contains_any(path_lower, &self.heuristics.core_path_markers) {
                indicators.record(
                    Severity::Major,
                    format!(
                        "Major refactoring in core file: {} ({} changes)",
                        file.path, total_changes
                    ),
                );
            } else {
                indicators.record(
                    Severity::Minor,
                    format!(
                        "Significant changes: {} ({} changes)",
                        file.path, total_changes
                    ),
                );
            }
        } else if total_changes > self.heuristics.minor_change_threshold {
            indicators.record(
                Severity::Minor,
                format!("Medium changes: {} ({} changes)", file.path, total_changes),
            );
        } else {
            indicators.record(
                Severity::Patch,
                format!("Small fix: {} ({} changes)", file.path, total_changes),
            );
        }

        if self
            .heuristics
            .definition_keywords
            .iter()
            .any(|k| diff_lower.contains(&k.to_lowercase()))
        {
            indicators.record(
                Severity::Minor,
                format!("New functionality in {}", file.path),
            );
        }
    }

    /// Read the overall tone of the commit message
    ///
    /// Only the first matching category is recorded, checked in
    /// major, minor, patch order.
    fn scan_message_tone(
        &self,
        message: &str,
        message_lower: &str,
        indicators: &mut IndicatorSet,
    ) {
        let snippet: String = message.chars().take(50).collect();

        if contains_any(message_lower, &self.heuristics.major_tone_keywords) {
            indicators.record(
                Severity::Major,
                format!("Breaking change indicated in commit: {}...", snippet),
            );
        } else if contains_any(message_lower, &self.heuristics.minor_tone_keywords) {
            indicators.record(
                Severity::Minor,
                format!("Feature indicated in commit: {}...", snippet),
            );
        } else if contains_any(message_lower, &self.heuristics.patch_tone_keywords) {
            indicators.record(
                Severity::Patch,
                format!("Fix indicated in commit: {}...", snippet),
            );
        }
    }
}

/// True when the (lower-cased) path ends in one of the extensions
fn has_extension(path_lower: &str, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| path_lower.ends_with(&format!(".{}", ext)))
}

/// True when the haystack contains any of the (lower-cased) markers
fn contains_any(haystack: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| haystack.contains(&marker.to_lowercase()))
}
