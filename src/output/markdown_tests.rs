use crate::checker::{ReviewResult, Violation};
use crate::output::ReportFormatter;
use crate::rules::RuleCategory;

use super::MarkdownFormatter;

fn em_dash_violation(line: usize) -> Violation {
    Violation::line(
        line,
        RuleCategory::Punctuation,
        "Em-dash",
        "前半—後半",
        "改用句號或逗號",
    )
}

fn format(results: &[ReviewResult]) -> String {
    MarkdownFormatter.format(results).unwrap()
}

#[test]
fn summary_lists_every_file_in_order() {
    let results = vec![
        ReviewResult::new("a.md", vec![]),
        ReviewResult::new("b.md", vec![em_dash_violation(1)]),
    ];

    let output = format(&results);

    assert!(output.contains("## 批次 Review 彙總"));
    assert!(output.contains("| 檔案 | 狀態 | 違規數 |"));
    assert!(output.contains("| a.md | ✅ Pass | 0 |"));
    assert!(output.contains("| b.md | ⚠️ Minor | 1 |"));

    let a_pos = output.find("| a.md |").unwrap();
    let b_pos = output.find("| b.md |").unwrap();
    assert!(a_pos < b_pos);
}

#[test]
fn fail_status_cell() {
    let violation = Violation::line(1, RuleCategory::Vocabulary, "賦能", "賦能", "換個詞");
    let results = vec![ReviewResult::new("c.md", vec![violation])];

    assert!(format(&results).contains("| c.md | ❌ Fail | 1 |"));
}

#[test]
fn clean_file_has_no_detail_section() {
    let results = vec![ReviewResult::new("a.md", vec![])];

    let output = format(&results);

    assert!(!output.contains("## Review 結果"));
    assert!(!output.contains("違規項目"));
}

#[test]
fn detail_rows_are_numbered_from_one() {
    let results = vec![ReviewResult::new(
        "b.md",
        vec![em_dash_violation(1), em_dash_violation(4)],
    )];

    let output = format(&results);

    assert!(output.contains("## Review 結果：b.md"));
    assert!(output.contains("### ❌ 違規項目"));
    assert!(output.contains("| # | 位置 | 違規類型 | 原文 | 建議修正 |"));
    assert!(output.contains("| 1 | 1 | 禁用標點 (Em-dash) | `前半—後半` | 改用句號或逗號 |"));
    assert!(output.contains("| 2 | 4 | 禁用標點 (Em-dash) | `前半—後半` | 改用句號或逗號 |"));
}

#[test]
fn document_level_location_renders_as_whole_document() {
    let results = vec![ReviewResult::new("b.md", vec![Violation::quote_count(2)])];

    let output = format(&results);

    assert!(output.contains("| 1 | 全文 | 引號過多 | `全篇共 2 個引號` | 一篇最多使用 1 個引號 |"));
}

#[test]
fn long_excerpt_is_truncated_to_twenty_chars() {
    let excerpt = "字".repeat(21);
    let violation = Violation::line(1, RuleCategory::Vocabulary, "賦能", &excerpt, "換個詞");
    let results = vec![ReviewResult::new("b.md", vec![violation])];

    let output = format(&results);
    let expected = format!("`{}...`", "字".repeat(20));

    assert!(output.contains(&expected));
    assert!(!output.contains(&format!("`{excerpt}`")));
}

#[test]
fn twenty_char_excerpt_is_verbatim() {
    let excerpt = "字".repeat(20);
    let violation = Violation::line(1, RuleCategory::Vocabulary, "賦能", &excerpt, "換個詞");
    let results = vec![ReviewResult::new("b.md", vec![violation])];

    let output = format(&results);

    assert!(output.contains(&format!("`{excerpt}`")));
    assert!(!output.contains("..."));
}

#[test]
fn empty_results_render_header_only() {
    let output = format(&[]);

    assert!(output.contains("## 批次 Review 彙總"));
    assert!(output.contains("|------|------|--------|"));
    assert!(!output.contains("## Review 結果"));
}
