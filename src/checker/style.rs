use regex::Regex;

use crate::error::{Result, StyleGuardError};
use crate::rules::{self, LineRule, RuleCategory};

use super::Violation;

struct CompiledLineRule {
    matcher: Regex,
    label: &'static str,
    suggestion: &'static str,
}

struct CompiledHookRule {
    matcher: Regex,
    label: &'static str,
}

/// Runs the full rule catalog against one article's content.
///
/// Categories are evaluated in a fixed order (punctuation, sentence
/// patterns, vocabulary, quote count, hooks); within a category, lines are
/// walked top to bottom. That order is observable in reports and must not
/// change.
pub struct StyleChecker {
    punctuation: Vec<CompiledLineRule>,
    sentence: Vec<CompiledLineRule>,
    hooks: Vec<CompiledHookRule>,
}

impl StyleChecker {
    /// Compile the rule catalog.
    ///
    /// # Errors
    /// Returns an error if a catalog pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            punctuation: compile_line_rules(rules::PUNCTUATION_RULES)?,
            sentence: compile_line_rules(rules::SENTENCE_RULES)?,
            hooks: rules::HOOK_RULES
                .iter()
                .map(|rule| {
                    Ok(CompiledHookRule {
                        matcher: compile(rule.pattern)?,
                        label: rule.label,
                    })
                })
                .collect::<Result<_>>()?,
        })
    }

    /// Review one document and return its violations, possibly empty.
    #[must_use]
    pub fn review(&self, content: &str) -> Vec<Violation> {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut violations = Vec::new();

        check_line_rules(
            &lines,
            RuleCategory::Punctuation,
            &self.punctuation,
            &mut violations,
        );
        check_line_rules(
            &lines,
            RuleCategory::SentencePattern,
            &self.sentence,
            &mut violations,
        );
        check_vocabulary(&lines, &mut violations);
        check_quote_count(content, &mut violations);
        self.check_hooks(&lines, &mut violations);

        violations
    }

    /// Hook rules only see the first `HOOK_WINDOW` non-blank lines, each
    /// keeping its original line number.
    fn check_hooks(&self, lines: &[&str], violations: &mut Vec<Violation>) {
        let opening = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| (idx + 1, *line))
            .take(rules::HOOK_WINDOW);

        for (line_no, line) in opening {
            for rule in &self.hooks {
                if rule.matcher.is_match(line) {
                    violations.push(Violation::line(
                        line_no,
                        RuleCategory::Hook,
                        rule.label,
                        line,
                        rules::HOOK_SUGGESTION,
                    ));
                }
            }
        }
    }
}

fn compile(pattern: &'static str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| StyleGuardError::InvalidRule {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn compile_line_rules(line_rules: &[LineRule]) -> Result<Vec<CompiledLineRule>> {
    line_rules
        .iter()
        .map(|rule| {
            Ok(CompiledLineRule {
                matcher: compile(rule.pattern)?,
                label: rule.label,
                suggestion: rule.suggestion,
            })
        })
        .collect()
}

fn check_line_rules(
    lines: &[&str],
    category: RuleCategory,
    line_rules: &[CompiledLineRule],
    violations: &mut Vec<Violation>,
) {
    for (idx, line) in lines.iter().enumerate() {
        for rule in line_rules {
            if rule.matcher.is_match(line) {
                violations.push(Violation::line(
                    idx + 1,
                    category,
                    rule.label,
                    line,
                    rule.suggestion,
                ));
            }
        }
    }
}

// One violation per rule per line, however many times the word occurs.
fn check_vocabulary(lines: &[&str], violations: &mut Vec<Violation>) {
    for (idx, line) in lines.iter().enumerate() {
        for rule in rules::VOCABULARY_RULES {
            if line.contains(rule.word) {
                violations.push(Violation::line(
                    idx + 1,
                    RuleCategory::Vocabulary,
                    rule.word,
                    line,
                    rule.suggestion,
                ));
            }
        }
    }
}

// Chinese opening quotes count one each; ASCII double quotes count in pairs.
fn check_quote_count(content: &str, violations: &mut Vec<Violation>) {
    let total = content.matches('「').count() + content.matches('"').count() / 2;
    if total > rules::QUOTE_LIMIT {
        violations.push(Violation::quote_count(total));
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
