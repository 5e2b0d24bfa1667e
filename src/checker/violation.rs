use serde::Serialize;

use crate::rules::{self, RuleCategory};

/// Where a violation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "line", rename_all = "snake_case")]
pub enum Location {
    /// 1-based line number.
    Line(usize),
    /// The rule applies to the document as a whole.
    Document,
}

/// One detected breach of the style guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub location: Location,
    pub category: RuleCategory,
    /// Rule subtype shown next to the category. Empty for the quote rule,
    /// which has no subtypes.
    pub label: &'static str,
    /// Trimmed offending line, or a document-level summary.
    pub excerpt: String,
    pub suggestion: &'static str,
}

impl Violation {
    /// Create a line-level violation. The excerpt is trimmed for display.
    #[must_use]
    pub fn line(
        line: usize,
        category: RuleCategory,
        label: &'static str,
        excerpt: &str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            location: Location::Line(line),
            category,
            label,
            excerpt: excerpt.trim().to_string(),
            suggestion,
        }
    }

    /// Create the document-level quote-count violation.
    #[must_use]
    pub fn quote_count(total: usize) -> Self {
        Self {
            location: Location::Document,
            category: RuleCategory::QuoteLimit,
            label: "",
            excerpt: format!("全篇共 {total} 個引號"),
            suggestion: rules::QUOTE_SUGGESTION,
        }
    }

    /// Category and subtype as shown in reports, e.g. `禁用標點 (Em-dash)`.
    #[must_use]
    pub fn type_label(&self) -> String {
        if self.label.is_empty() {
            self.category.display_name().to_string()
        } else {
            format!("{} ({})", self.category.display_name(), self.label)
        }
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
