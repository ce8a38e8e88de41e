use std::fmt;

/// Version bump decision kind
///
/// Covers the standard semantic bumps plus the pre-release ladder
/// transitions requested through commit-message phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    /// Drop the pre-release suffix, keeping the base version
    Graduate,
    /// Increment the alpha counter
    AlphaIncrement,
    /// Increment the beta counter
    BetaIncrement,
    /// Increment the rc counter
    RcIncrement,
    /// Move from alpha to beta, counter reset
    PromoteToBeta,
    /// Move from beta to rc, counter reset
    PromoteToRc,
}

impl BumpKind {
    /// Short identifier used in CI outputs and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Graduate => "graduate",
            BumpKind::AlphaIncrement => "alpha-increment",
            BumpKind::BetaIncrement => "beta-increment",
            BumpKind::RcIncrement => "rc-increment",
            BumpKind::PromoteToBeta => "promote-to-beta",
            BumpKind::PromoteToRc => "promote-to-rc",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classifier's verdict for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpDecision {
    pub kind: BumpKind,
    /// Human-readable explanation, the first indicator of the winning severity
    pub reason: String,
}

impl BumpDecision {
    pub fn new(kind: BumpKind, reason: impl Into<String>) -> Self {
        BumpDecision {
            kind,
            reason: reason.into(),
        }
    }
}

/// Evidence severity, ordered so the highest non-empty bucket wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Patch,
    Minor,
    Major,
}

impl Severity {
    pub fn bump_kind(&self) -> BumpKind {
        match self {
            Severity::Major => BumpKind::Major,
            Severity::Minor => BumpKind::Minor,
            Severity::Patch => BumpKind::Patch,
        }
    }
}

/// A single piece of evidence collected during the per-file scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub severity: Severity,
    pub detail: String,
}

/// Accumulates indicators and reduces them to a final decision
///
/// Buckets are independent: one file may contribute evidence at several
/// severities at once. The reduction picks the highest severity present and
/// reports the first indicator recorded at that severity.
#[derive(Debug, Default)]
pub struct IndicatorSet {
    indicators: Vec<Indicator>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        IndicatorSet::default()
    }

    pub fn record(&mut self, severity: Severity, detail: impl Into<String>) {
        self.indicators.push(Indicator {
            severity,
            detail: detail.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Number of indicators recorded at the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.indicators
            .iter()
            .filter(|i| i.severity == severity)
            .count()
    }

    /// Reduce to the final decision, or `None` when no evidence was recorded
    pub fn decide(&self) -> Option<BumpDecision> {
        let top = self.indicators.iter().map(|i| i.severity).max()?;
        let first = self.indicators.iter().find(|i| i.severity == top)?;

        Some(BumpDecision::new(top.bump_kind(), first.detail.clone()))
    }
}
