//! Version transition state machine
//!
//! Applies a [BumpKind] to a [Version], walking the pre-release ladder
//! `stable -> alpha -> beta -> rc -> stable`. Stage-gated transitions are
//! rejected (version unchanged, warning surfaced) when the current stage
//! does not satisfy their precondition; ordinary major/minor/patch bumps are
//! valid at any stage and preserve the pre-release marker.

use crate::domain::{BumpKind, PreRelease, Stage, Version};

/// Outcome of applying a bump decision to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The transition applied; carries the new version
    Applied(Version),
    /// The transition was invalid for the current stage; the version is
    /// unchanged and the warning explains the unmet precondition
    Rejected { warning: String },
}

impl Transition {
    /// The resulting version: the new one when applied, `current` otherwise
    pub fn version(&self, current: &Version) -> Version {
        match self {
            Transition::Applied(v) => *v,
            Transition::Rejected { .. } => *current,
        }
    }

    /// The warning for a rejected transition, if any
    pub fn warning(&self) -> Option<&str> {
        match self {
            Transition::Applied(_) => None,
            Transition::Rejected { warning } => Some(warning),
        }
    }
}

/// Compute the next version for a bump decision
///
/// Total and pure: never fails, never mutates its input. An unsatisfiable
/// transition returns [Transition::Rejected] with the version left as-is.
pub fn next_version(current: &Version, kind: BumpKind) -> Transition {
    match kind {
        BumpKind::Major => Transition::Applied(Version {
            major: current.major + 1,
            minor: 0,
            patch: 0,
            pre: current.pre,
        }),
        BumpKind::Minor => Transition::Applied(Version {
            major: current.major,
            minor: current.minor + 1,
            patch: 0,
            pre: current.pre,
        }),
        BumpKind::Patch => Transition::Applied(Version {
            major: current.major,
            minor: current.minor,
            patch: current.patch + 1,
            pre: current.pre,
        }),
        BumpKind::AlphaIncrement => stage_increment(current, Stage::Alpha),
        BumpKind::BetaIncrement => stage_increment(current, Stage::Beta),
        BumpKind::RcIncrement => stage_increment(current, Stage::Rc),
        BumpKind::PromoteToBeta => promote(current, Stage::Alpha, Stage::Beta),
        BumpKind::PromoteToRc => promote(current, Stage::Beta, Stage::Rc),
        BumpKind::Graduate => match current.pre {
            Some(_) => Transition::Applied(current.with_prerelease(None)),
            None => Transition::Rejected {
                warning: format!(
                    "Cannot graduate {}: version is already stable",
                    current
                ),
            },
        },
    }
}

/// Increment the counter of the given stage, gated on being in that stage
fn stage_increment(current: &Version, required: Stage) -> Transition {
    match current.pre {
        Some(pre) if pre.stage == required => {
            Transition::Applied(current.with_prerelease(Some(pre.increment())))
        }
        _ => Transition::Rejected {
            warning: format!(
                "Cannot increment {} counter on {}: version is not in {} stage",
                required, current, required
            ),
        },
    }
}

/// Move from one stage to the next, counter reset to zero
fn promote(current: &Version, from: Stage, to: Stage) -> Transition {
    match current.pre {
        Some(pre) if pre.stage == from => {
            Transition::Applied(current.with_prerelease(Some(PreRelease::new(to, 0))))
        }
        _ => Transition::Rejected {
            warning: format!(
                "Cannot promote {} to {}: version is not in {} stage",
                current, to, from
            ),
        },
    }
}
