//! Coarse PR impact prediction
//!
//! Previews the likely bump for a branch before it merges. Deliberately
//! much blunter than the full classifier: it only counts files, because the
//! branch may still be rebased and per-diff evidence would go stale.

use crate::config::HeuristicsConfig;
use crate::domain::{BumpKind, ChangeKind, ChangeSet};

use super::has_extension;

/// Predicted impact of merging a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrImpact {
    pub predicted: BumpKind,
    pub total_files: usize,
    pub source_files: usize,
    pub new_files: usize,
    pub deleted_files: usize,
}

/// Predict the bump a changeset would likely produce once merged
///
/// Any deletion or a changeset touching more than 10 files predicts a major
/// bump; any new file or more than 3 source files predicts minor; everything
/// else predicts patch.
pub fn predict_impact(changes: &ChangeSet, heuristics: &HeuristicsConfig) -> PrImpact {
    let total_files = changes.files.len();
    let source_files = changes
        .files
        .iter()
        .filter(|f| has_extension(&f.path.to_lowercase(), &heuristics.source_extensions))
        .count();
    let new_files = changes
        .files
        .iter()
        .filter(|f| f.kind == ChangeKind::Added)
        .count();
    let deleted_files = changes
        .files
        .iter()
        .filter(|f| f.kind == ChangeKind::Deleted)
        .count();

    let predicted = if deleted_files > 0 || total_files > 10 {
        BumpKind::Major
    } else if new_files > 0 || source_files > 3 {
        BumpKind::Minor
    } else {
        BumpKind::Patch
    };

    PrImpact {
        predicted,
        total_files,
        source_files,
        new_files,
        deleted_files,
    }
}
