//! Pre-release stage handling for version strings
//!
//! Supports the ordered maturity ladder alpha -> beta -> rc, each stage
//! carrying its own iteration counter. Rendered in the compact suffix form
//! used by the version file: `a3`, `b1`, `rc0`.

use crate::error::{AutobumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release stage (alpha, beta, or release candidate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    Rc,
}

impl Stage {
    /// Suffix token used when serializing a version string
    pub fn token(&self) -> &'static str {
        match self {
            Stage::Alpha => "a",
            Stage::Beta => "b",
            Stage::Rc => "rc",
        }
    }
}

impl FromStr for Stage {
    type Err = AutobumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" | "alpha" => Ok(Stage::Alpha),
            "b" | "beta" => Ok(Stage::Beta),
            "rc" => Ok(Stage::Rc),
            other => Err(AutobumpError::version(format!(
                "Invalid pre-release stage: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Pre-release marker with its iteration counter
///
/// # Examples
/// - "a3" -> PreRelease { stage: Alpha, number: 3 }
/// - "rc0" -> PreRelease { stage: Rc, number: 0 }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreRelease {
    /// The pre-release stage (alpha, beta, or rc)
    pub stage: Stage,
    /// Iteration counter within the stage
    pub number: u32,
}

impl PreRelease {
    /// Create a new pre-release marker
    pub fn new(stage: Stage, number: u32) -> Self {
        PreRelease { stage, number }
    }

    /// Parse a pre-release suffix such as "a3", "b1" or "rc0"
    ///
    /// The stage token is matched longest-first so that "rc" is not
    /// mistaken for a custom token starting with 'r'.
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Parsed pre-release marker
    /// * `Err` - If the token or counter is missing or malformed
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(AutobumpError::version(
                "Empty pre-release suffix".to_string(),
            ));
        }

        let (token, digits) = if let Some(rest) = s.strip_prefix("rc") {
            ("rc", rest)
        } else if let Some(rest) = s.strip_prefix('a') {
            ("a", rest)
        } else if let Some(rest) = s.strip_prefix('b') {
            ("b", rest)
        } else {
            return Err(AutobumpError::version(format!(
                "Unrecognized pre-release suffix: '{}'",
                s
            )));
        };

        let stage: Stage = token.parse()?;

        let number = digits.parse::<u32>().map_err(|_| {
            AutobumpError::version(format!("Invalid pre-release counter: '{}'", digits))
        })?;

        Ok(PreRelease { stage, number })
    }

    /// Increment the iteration counter within the current stage
    pub fn increment(&self) -> Self {
        PreRelease {
            stage: self.stage,
            number: self.number + 1,
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stage, self.number)
    }
}
