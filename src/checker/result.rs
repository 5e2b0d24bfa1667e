use serde::Serialize;

use super::Violation;

/// Outcome of reviewing one article.
///
/// A review fails when any violation belongs to a blocking category
/// (sentence patterns, vocabulary, hooks). Non-blocking violations alone
/// (punctuation, quote count) only downgrade the article to `Minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pass,
    Minor,
    Fail,
}

impl ReviewStatus {
    /// Derive the status from a violation list. Total over any input.
    #[must_use]
    pub fn classify(violations: &[Violation]) -> Self {
        if violations.iter().any(|v| v.category.is_blocking()) {
            Self::Fail
        } else if violations.is_empty() {
            Self::Pass
        } else {
            Self::Minor
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn is_minor(self) -> bool {
        matches!(self, Self::Minor)
    }

    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }
}

/// One reviewed article: filename, derived status, and the violations in
/// category evaluation order.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResult {
    pub filename: String,
    pub status: ReviewStatus,
    pub violations: Vec<Violation>,
}

impl ReviewResult {
    #[must_use]
    pub fn new(filename: impl Into<String>, violations: Vec<Violation>) -> Self {
        let status = ReviewStatus::classify(&violations);
        Self {
            filename: filename.into(),
            status,
            violations,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
