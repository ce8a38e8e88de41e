use crate::error::{AutobumpError, Result};

use super::VersionStore;

/// Mock version store for testing without a filesystem
///
/// Holds the version in memory and can be told to fail on write so the
/// persistence-failure path can be exercised.
pub struct MockVersionStore {
    version: Option<String>,
    fail_writes: bool,
    pub writes: Vec<String>,
}

impl MockVersionStore {
    /// Create a store holding the given version string
    pub fn with_version(version: impl Into<String>) -> Self {
        MockVersionStore {
            version: Some(version.into()),
            fail_writes: false,
            writes: Vec::new(),
        }
    }

    /// Create a store with no stored version (missing file)
    pub fn empty() -> Self {
        MockVersionStore {
            version: None,
            fail_writes: false,
            writes: Vec::new(),
        }
    }

    /// Make every subsequent write fail
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl VersionStore for MockVersionStore {
    fn read_version(&self) -> Result<Option<String>> {
        Ok(self.version.clone())
    }

    fn write_version(&mut self, version: &str) -> Result<()> {
        if self.fail_writes {
            return Err(AutobumpError::store("Injected write failure".to_string()));
        }
        self.version = Some(version.to_string());
        self.writes.push(version.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_store_read_write() {
        let mut store = MockVersionStore::with_version("1.0.0");
        assert_eq!(store.read_version().unwrap(), Some("1.0.0".to_string()));

        store.write_version("1.1.0").unwrap();
        assert_eq!(store.read_version().unwrap(), Some("1.1.0".to_string()));
        assert_eq!(store.writes, vec!["1.1.0".to_string()]);
    }

    #[test]
    fn test_mock_store_empty() {
        let store = MockVersionStore::empty();
        assert_eq!(store.read_version().unwrap(), None);
    }

    #[test]
    fn test_mock_store_injected_failure() {
        let mut store = MockVersionStore::with_version("1.0.0").fail_writes();
        assert!(store.write_version("1.1.0").is_err());
        assert_eq!(store.read_version().unwrap(), Some("1.0.0".to_string()));
    }
}
