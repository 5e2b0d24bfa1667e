use serde::Serialize;

use crate::checker::{ReviewResult, ReviewStatus};
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: &'a [ReviewResult],
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    minor: usize,
    failed: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, results: &[ReviewResult]) -> Result<String> {
        let (passed, minor, failed) =
            results
                .iter()
                .fold((0, 0, 0), |(p, m, f), r| match r.status {
                    ReviewStatus::Pass => (p + 1, m, f),
                    ReviewStatus::Minor => (p, m + 1, f),
                    ReviewStatus::Fail => (p, m, f + 1),
                });

        let output = JsonOutput {
            summary: Summary {
                total_files: results.len(),
                passed,
                minor,
                failed,
            },
            results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
