use std::fmt;

/// How a file changed in the analyzed commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Added => write!(f, "added"),
            ChangeKind::Deleted => write!(f, "deleted"),
            ChangeKind::Modified => write!(f, "modified"),
        }
    }
}

/// A single file change supplied by the change source
///
/// `diff_text` is the raw unified diff for the file when available. It is
/// absent for deletions, additions of binary files, or when the source could
/// not render a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    pub kind: ChangeKind,
    pub diff_text: Option<String>,
}

impl FileChange {
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        FileChange {
            path: path.into(),
            kind,
            diff_text: None,
        }
    }

    pub fn with_diff(path: impl Into<String>, kind: ChangeKind, diff: impl Into<String>) -> Self {
        FileChange {
            path: path.into(),
            kind,
            diff_text: Some(diff.into()),
        }
    }
}

/// Snapshot of one commit's changes, the unit of analysis
///
/// One `ChangeSet` is materialized per run by the change source and treated
/// as read-only input from then on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Per-file changes in the order the source reported them
    pub files: Vec<FileChange>,
    /// Message of the originating commit
    pub message: String,
    /// True when the commit has no parent
    pub is_initial: bool,
}

impl ChangeSet {
    pub fn new(files: Vec<FileChange>, message: impl Into<String>) -> Self {
        ChangeSet {
            files,
            message: message.into(),
            is_initial: false,
        }
    }

    /// Empty changeset used as the safe fallback when input is unavailable
    pub fn empty() -> Self {
        ChangeSet::default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
