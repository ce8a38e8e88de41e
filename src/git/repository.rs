use crate::domain::{ChangeKind, ChangeSet, FileChange};
use crate::error::Result;
use git2::{Delta, Diff, DiffOptions, Repository as Git2Repo};
use std::path::Path;

use super::ChangeSource;

/// Wrapper around git2::Repository implementing [ChangeSource]
pub struct Git2ChangeSource {
    repo: Git2Repo,
}

impl Git2ChangeSource {
    /// Open or discover a git repository starting from `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2ChangeSource { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2ChangeSource { repo }
    }

    /// Convert a git2 diff into per-file changes with patch text
    fn collect_changes(&self, diff: &Diff) -> Vec<FileChange> {
        let mut files = Vec::new();

        for (idx, delta) in diff.deltas().enumerate() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path());
            let path = match path {
                Some(p) => p.to_string_lossy().to_string(),
                None => continue,
            };

            let kind = match delta.status() {
                Delta::Added => ChangeKind::Added,
                Delta::Deleted => ChangeKind::Deleted,
                _ => ChangeKind::Modified,
            };

            // Patch text is best-effort: binary files and unloadable blobs
            // simply analyze without a diff
            let diff_text = git2::Patch::from_diff(diff, idx)
                .ok()
                .flatten()
                .and_then(|mut patch| patch.to_buf().ok())
                .and_then(|buf| buf.as_str().map(|s| s.to_string()));

            files.push(FileChange {
                path,
                kind,
                diff_text,
            });
        }

        files
    }
}

impl ChangeSource for Git2ChangeSource {
    fn head_changes(&self) -> Result<ChangeSet> {
        let head = self.repo.head()?.peel_to_commit()?;
        let message = head.message().unwrap_or("").to_string();
        let is_initial = head.parent_count() == 0;

        let head_tree = head.tree()?;
        let parent_tree = if is_initial {
            None
        } else {
            Some(head.parent(0)?.tree()?)
        };

        let mut opts = DiffOptions::new();
        let diff = self.repo.diff_tree_to_tree(
            parent_tree.as_ref(),
            Some(&head_tree),
            Some(&mut opts),
        )?;

        Ok(ChangeSet {
            files: self.collect_changes(&diff),
            message,
            is_initial,
        })
    }

    fn changes_against(&self, base: &str) -> Result<ChangeSet> {
        let base_commit = self.repo.revparse_single(base)?.peel_to_commit()?;
        let head = self.repo.head()?.peel_to_commit()?;
        let message = head.message().unwrap_or("").to_string();

        let mut opts = DiffOptions::new();
        let diff = self.repo.diff_tree_to_tree(
            Some(&base_commit.tree()?),
            Some(&head.tree()?),
            Some(&mut opts),
        )?;

        Ok(ChangeSet {
            files: self.collect_changes(&diff),
            message,
            is_initial: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn commit_all(repo: &Git2Repo, message: &str) -> git2::Oid {
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn commit_removal(repo: &Git2Repo, path: &str, message: &str) -> git2::Oid {
        let mut index = repo.index().unwrap();
        index.remove_path(Path::new(path)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
        let parent = repo.head().unwrap().peel_to_commit().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
            .unwrap()
    }

    #[test]
    fn test_head_changes_initial_commit() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
        commit_all(&repo, "import everything");

        let source = Git2ChangeSource::from_git2(repo);
        let changes = source.head_changes().unwrap();

        assert!(changes.is_initial);
        assert_eq!(changes.message, "import everything");
        assert_eq!(changes.files.len(), 1);
        assert_eq!(changes.files[0].path, "main.rs");
        assert_eq!(changes.files[0].kind, ChangeKind::Added);
    }

    #[test]
    fn test_head_changes_modification_carries_diff_text() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
        commit_all(&repo, "initial");
        fs::write(dir.path().join("main.rs"), "fn main() { run(); }\n").unwrap();
        commit_all(&repo, "fix: call run");

        let source = Git2ChangeSource::from_git2(repo);
        let changes = source.head_changes().unwrap();

        assert!(!changes.is_initial);
        assert_eq!(changes.files.len(), 1);
        assert_eq!(changes.files[0].kind, ChangeKind::Modified);
        let diff = changes.files[0].diff_text.as_deref().unwrap();
        assert!(diff.contains("+fn main() { run(); }"));
        assert!(diff.contains("-fn main() {}"));
    }

    #[test]
    fn test_head_changes_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        fs::write(dir.path().join("obsolete.rs"), "pub fn old() {}\n").unwrap();
        commit_all(&repo, "initial");
        commit_removal(&repo, "obsolete.rs", "drop obsolete module");

        let source = Git2ChangeSource::from_git2(repo);
        let changes = source.head_changes().unwrap();

        assert_eq!(changes.files.len(), 1);
        assert_eq!(changes.files[0].path, "obsolete.rs");
        assert_eq!(changes.files[0].kind, ChangeKind::Deleted);
    }

    #[test]
    fn test_changes_against_base_revision() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        fs::write(dir.path().join("a.rs"), "// a\n").unwrap();
        commit_all(&repo, "initial");
        fs::write(dir.path().join("b.rs"), "// b\n").unwrap();
        commit_all(&repo, "second");
        fs::write(dir.path().join("c.rs"), "// c\n").unwrap();
        commit_all(&repo, "third");

        let source = Git2ChangeSource::from_git2(repo);
        let changes = source.changes_against("HEAD~2").unwrap();

        let mut paths: Vec<_> = changes.files.iter().map(|f| f.path.clone()).collect();
        paths.sort();
        assert_eq!(paths, vec!["b.rs".to_string(), "c.rs".to_string()]);
    }

    #[test]
    fn test_open_fails_outside_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Git2ChangeSource::open(dir.path()).is_err());
    }
}
