use crate::config::VersionFileConfig;
use crate::error::{AutobumpError, Result};
use regex::Regex;
use std::fs;
use std::path::PathBuf;

use super::VersionStore;

/// Version store backed by a metadata file and a regex pattern
///
/// The pattern's first capture group is the version string; everything
/// around the match is preserved on rewrite. The default configuration
/// targets `version = "..."` in a Cargo.toml; a Python project would point
/// it at `__about__.py` with a `__version__` pattern instead.
#[derive(Debug)]
pub struct FileVersionStore {
    path: PathBuf,
    pattern: Regex,
}

impl FileVersionStore {
    /// Build a store from the version-file configuration
    pub fn from_config(config: &VersionFileConfig) -> Result<Self> {
        Self::new(&config.path, &config.pattern)
    }

    pub fn new(path: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            AutobumpError::config(format!("Invalid version file pattern: {}", e))
        })?;

        Ok(FileVersionStore {
            path: path.into(),
            pattern,
        })
    }
}

impl VersionStore for FileVersionStore {
    fn read_version(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(self
            .pattern
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()))
    }

    fn write_version(&mut self, version: &str) -> Result<()> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AutobumpError::store(format!(
                "Cannot read version file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let caps = self.pattern.captures(&content).ok_or_else(|| {
            AutobumpError::store(format!(
                "Version pattern matched nothing in '{}'",
                self.path.display()
            ))
        })?;

        let group = caps.get(1).ok_or_else(|| {
            AutobumpError::store("Version pattern has no capture group".to_string())
        })?;

        let mut updated = String::with_capacity(content.len());
        updated.push_str(&content[..group.start()]);
        updated.push_str(version);
        updated.push_str(&content[group.end()..]);

        fs::write(&self.path, updated).map_err(|e| {
            AutobumpError::store(format!(
                "Cannot write version file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VersionFileConfig;
    use std::fs;

    fn store_for(dir: &tempfile::TempDir, file: &str, pattern: &str) -> FileVersionStore {
        FileVersionStore::new(dir.path().join(file), pattern).unwrap()
    }

    #[test]
    fn test_read_version_from_cargo_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"1.2.3\"\n",
        )
        .unwrap();

        let config = VersionFileConfig::default();
        let store = store_for(&dir, "Cargo.toml", &config.pattern);
        assert_eq!(store.read_version().unwrap(), Some("1.2.3".to_string()));
    }

    #[test]
    fn test_read_version_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = VersionFileConfig::default();
        let store = store_for(&dir, "Cargo.toml", &config.pattern);
        assert_eq!(store.read_version().unwrap(), None);
    }

    #[test]
    fn test_read_version_no_match_is_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();

        let config = VersionFileConfig::default();
        let store = store_for(&dir, "Cargo.toml", &config.pattern);
        assert_eq!(store.read_version().unwrap(), None);
    }

    #[test]
    fn test_write_version_preserves_surroundings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\nversion = \"1.2.3\"\nedition = \"2021\"\n",
        )
        .unwrap();

        let config = VersionFileConfig::default();
        let mut store = store_for(&dir, "Cargo.toml", &config.pattern);
        store.write_version("1.3.0").unwrap();

        let content = fs::read_to_string(dir.path().join("Cargo.toml")).unwrap();
        assert!(content.contains("version = \"1.3.0\""));
        assert!(content.contains("name = \"demo\""));
        assert!(content.contains("edition = \"2021\""));
    }

    #[test]
    fn test_write_version_roundtrips_through_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "version = \"0.1.0\"\n").unwrap();

        let config = VersionFileConfig::default();
        let mut store = store_for(&dir, "Cargo.toml", &config.pattern);
        store.write_version("2.0.0a3").unwrap();
        assert_eq!(store.read_version().unwrap(), Some("2.0.0a3".to_string()));
    }

    #[test]
    fn test_write_version_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = VersionFileConfig::default();
        let mut store = store_for(&dir, "Cargo.toml", &config.pattern);

        let err = store.write_version("1.0.0").unwrap_err();
        assert!(err.to_string().contains("Version store error"));
    }

    #[test]
    fn test_write_version_no_match_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "nothing here\n").unwrap();

        let config = VersionFileConfig::default();
        let mut store = store_for(&dir, "Cargo.toml", &config.pattern);

        let err = store.write_version("1.0.0").unwrap_err();
        assert!(err.to_string().contains("matched nothing"));
    }

    #[test]
    fn test_python_about_file_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("__about__.py"),
            "__version__ = \"0.4.2\"\n",
        )
        .unwrap();

        let pattern = r#"__version__\s*=\s*"([^"]+)""#;
        let mut store = store_for(&dir, "__about__.py", pattern);
        assert_eq!(store.read_version().unwrap(), Some("0.4.2".to_string()));

        store.write_version("0.5.0").unwrap();
        let content = fs::read_to_string(dir.path().join("__about__.py")).unwrap();
        assert_eq!(content, "__version__ = \"0.5.0\"\n");
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = FileVersionStore::new("Cargo.toml", "(unclosed").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
