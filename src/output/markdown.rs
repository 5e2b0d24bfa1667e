use std::fmt::Write;

use crate::checker::{Location, ReviewResult, ReviewStatus, Violation};
use crate::error::Result;

use super::ReportFormatter;

/// Excerpts longer than this many characters are truncated in detail tables.
const EXCERPT_MAX_CHARS: usize = 20;

/// The reference report: one summary table over all articles, then a detail
/// table per article with violations. Clean articles get no detail section.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn status_cell(status: ReviewStatus) -> &'static str {
        match status {
            ReviewStatus::Pass => "✅ Pass",
            ReviewStatus::Minor => "⚠️ Minor",
            ReviewStatus::Fail => "❌ Fail",
        }
    }

    fn location_cell(violation: &Violation) -> String {
        match violation.location {
            Location::Line(line) => line.to_string(),
            Location::Document => "全文".to_string(),
        }
    }

    // Character count, not bytes: excerpts are mostly CJK text.
    fn truncate_excerpt(excerpt: &str) -> String {
        if excerpt.chars().count() > EXCERPT_MAX_CHARS {
            let head: String = excerpt.chars().take(EXCERPT_MAX_CHARS).collect();
            format!("{head}...")
        } else {
            excerpt.to_string()
        }
    }

    fn write_summary(output: &mut String, results: &[ReviewResult]) {
        writeln!(output, "## 批次 Review 彙總\n").ok();
        writeln!(output, "| 檔案 | 狀態 | 違規數 |").ok();
        writeln!(output, "|------|------|--------|").ok();

        for result in results {
            writeln!(
                output,
                "| {} | {} | {} |",
                result.filename,
                Self::status_cell(result.status),
                result.violations.len()
            )
            .ok();
        }
    }

    fn write_details(output: &mut String, result: &ReviewResult) {
        writeln!(output, "\n## Review 結果：{}\n", result.filename).ok();
        writeln!(output, "### ❌ 違規項目\n").ok();
        writeln!(output, "| # | 位置 | 違規類型 | 原文 | 建議修正 |").ok();
        writeln!(output, "|---|------|----------|------|----------|").ok();

        for (i, violation) in result.violations.iter().enumerate() {
            writeln!(
                output,
                "| {} | {} | {} | `{}` | {} |",
                i + 1,
                Self::location_cell(violation),
                violation.type_label(),
                Self::truncate_excerpt(&violation.excerpt),
                violation.suggestion
            )
            .ok();
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, results: &[ReviewResult]) -> Result<String> {
        let mut output = String::new();

        Self::write_summary(&mut output, results);

        for result in results {
            if !result.violations.is_empty() {
                Self::write_details(&mut output, result);
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
