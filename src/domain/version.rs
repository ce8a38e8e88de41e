use crate::domain::prerelease::PreRelease;
use crate::error::{AutobumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version with an optional pre-release suffix
///
/// Serialized as `MAJOR.MINOR.PATCH[{a|b|rc}N]`, e.g. `1.4.0` or `2.0.0a3`.
/// Stable versions carry `pre = None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre: Option<PreRelease>,
}

impl Version {
    /// Create a new stable version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Create a new pre-release version
    pub fn with_pre(major: u32, minor: u32, patch: u32, pre: PreRelease) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Some(pre),
        }
    }

    /// Parse a version string (e.g., "1.4.0", "2.0.0a3", "v1.0.0rc0")
    ///
    /// A leading 'v' or 'V' prefix is tolerated. The pre-release suffix, if
    /// present, is attached to the patch component without a separator.
    pub fn parse(s: &str) -> Result<Self> {
        let clean = s.trim().trim_start_matches('v').trim_start_matches('V');

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(AutobumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z with optional pre-release suffix",
                s
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| AutobumpError::version(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| AutobumpError::version(format!("Invalid minor version: {}", parts[1])))?;

        // The patch segment may carry the pre-release suffix: "0a3" -> 0 + a3
        let last = parts[2];
        let digit_end = last
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(last.len());

        if digit_end == 0 {
            return Err(AutobumpError::version(format!(
                "Invalid patch version: {}",
                last
            )));
        }

        let patch = last[..digit_end]
            .parse::<u32>()
            .map_err(|_| AutobumpError::version(format!("Invalid patch version: {}", last)))?;

        let pre = if digit_end < last.len() {
            Some(PreRelease::parse(&last[digit_end..])?)
        } else {
            None
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre,
        })
    }

    /// True when this is a pre-release version
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Return the same version with a different pre-release marker
    pub fn with_prerelease(&self, pre: Option<PreRelease>) -> Self {
        Version { pre, ..*self }
    }
}

impl FromStr for Version {
    type Err = AutobumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "{}", pre)?;
        }
        Ok(())
    }
}
