//! Domain logic - pure business rules independent of git operations

pub mod change;
pub mod decision;
pub mod prerelease;
pub mod version;

pub use change::{ChangeKind, ChangeSet, FileChange};
pub use decision::{BumpDecision, BumpKind, Indicator, IndicatorSet, Severity};
pub use prerelease::{PreRelease, Stage};
pub use version::Version;
