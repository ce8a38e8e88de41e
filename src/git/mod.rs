//! Git change-source abstraction layer
//!
//! This module provides a trait-based abstraction over the one piece of git
//! access the tool needs: materializing a [ChangeSet] snapshot for analysis.
//! The concrete implementations are:
//!
//! - [repository::Git2ChangeSource]: a real implementation using the `git2` crate
//! - [mock::MockChangeSource]: a mock implementation for testing
//!
//! The workflow depends only on the [ChangeSource] trait; the snapshot is
//! taken once, before the core runs, and never mutated afterwards.

pub mod mock;
pub mod repository;

pub use mock::MockChangeSource;
pub use repository::Git2ChangeSource;

use crate::domain::ChangeSet;
use crate::error::Result;

/// Supplies change snapshots from a repository
pub trait ChangeSource {
    /// Changes introduced by the HEAD commit, relative to its first parent
    ///
    /// For a commit with no parent the diff is taken against the empty tree
    /// and the returned changeset is flagged `is_initial`.
    fn head_changes(&self) -> Result<ChangeSet>;

    /// Changes between a base revision and HEAD
    ///
    /// Used by the PR preview mode; `base` accepts any revision syntax
    /// understood by git (branch name, `origin/main`, `HEAD~1`, ...).
    fn changes_against(&self, base: &str) -> Result<ChangeSet>;
}
