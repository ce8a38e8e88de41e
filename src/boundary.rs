use std::fmt;

/// Warnings for degraded inputs and rejected transitions.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The change source could not be read; analysis ran on an empty changeset
    UnreadableChangeset { reason: String },
    /// The version file is missing or carries no version string
    MissingVersionFile { fallback: String },
    /// The stored version string cannot be parsed
    UnparsableVersion { raw: String, fallback: String },
    /// A stage-gated transition did not apply; the version is unchanged
    RejectedTransition { detail: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnreadableChangeset { reason } => {
                write!(
                    f,
                    "Cannot read changes from repository ({}), analyzing an empty changeset",
                    reason
                )
            }
            BoundaryWarning::MissingVersionFile { fallback } => {
                write!(f, "No stored version found, starting from {}", fallback)
            }
            BoundaryWarning::UnparsableVersion { raw, fallback } => {
                write!(f, "Cannot parse version '{}', falling back to {}", raw, fallback)
            }
            BoundaryWarning::RejectedTransition { detail } => {
                write!(f, "{}", detail)
            }
        }
    }
}
