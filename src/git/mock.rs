use crate::domain::ChangeSet;
use crate::error::{AutobumpError, Result};

use super::ChangeSource;

/// Mock change source for testing without actual git operations
pub struct MockChangeSource {
    head: ChangeSet,
    base_diffs: Vec<(String, ChangeSet)>,
    fail: bool,
}

impl MockChangeSource {
    /// Create a source returning the given changeset for HEAD
    pub fn new(head: ChangeSet) -> Self {
        MockChangeSource {
            head,
            base_diffs: Vec::new(),
            fail: false,
        }
    }

    /// Create a source whose every method fails, for the degraded-input path
    pub fn failing() -> Self {
        MockChangeSource {
            head: ChangeSet::empty(),
            base_diffs: Vec::new(),
            fail: true,
        }
    }

    /// Register the changeset returned for a base revision
    pub fn add_base_diff(&mut self, base: impl Into<String>, changes: ChangeSet) {
        self.base_diffs.push((base.into(), changes));
    }
}

impl ChangeSource for MockChangeSource {
    fn head_changes(&self) -> Result<ChangeSet> {
        if self.fail {
            return Err(git2::Error::from_str("injected source failure").into());
        }
        Ok(self.head.clone())
    }

    fn changes_against(&self, base: &str) -> Result<ChangeSet> {
        if self.fail {
            return Err(git2::Error::from_str("injected source failure").into());
        }
        self.base_diffs
            .iter()
            .find(|(b, _)| b == base)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| {
                AutobumpError::config(format!("No mock diff registered for base '{}'", base))
            })
    }
}
