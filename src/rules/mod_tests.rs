use super::{
    HOOK_RULES, HOOK_WINDOW, PUNCTUATION_RULES, QUOTE_LIMIT, RuleCategory, SENTENCE_RULES,
    VOCABULARY_RULES,
};

#[test]
fn catalog_sizes_are_fixed() {
    assert_eq!(PUNCTUATION_RULES.len(), 2);
    assert_eq!(SENTENCE_RULES.len(), 5);
    assert_eq!(VOCABULARY_RULES.len(), 7);
    assert_eq!(HOOK_RULES.len(), 12);
}

#[test]
fn limits_are_fixed() {
    assert_eq!(QUOTE_LIMIT, 1);
    assert_eq!(HOOK_WINDOW, 5);
}

#[test]
fn blocking_categories() {
    assert!(!RuleCategory::Punctuation.is_blocking());
    assert!(!RuleCategory::QuoteLimit.is_blocking());
    assert!(RuleCategory::SentencePattern.is_blocking());
    assert!(RuleCategory::Vocabulary.is_blocking());
    assert!(RuleCategory::Hook.is_blocking());
}

#[test]
fn display_names() {
    assert_eq!(RuleCategory::Punctuation.display_name(), "禁用標點");
    assert_eq!(RuleCategory::SentencePattern.display_name(), "禁用句型");
    assert_eq!(RuleCategory::Vocabulary.display_name(), "禁用詞彙");
    assert_eq!(RuleCategory::QuoteLimit.display_name(), "引號過多");
    assert_eq!(RuleCategory::Hook.display_name(), "Hook 禁用模式");
}

#[test]
fn catalog_patterns_compile() {
    for rule in PUNCTUATION_RULES.iter().chain(SENTENCE_RULES) {
        assert!(regex::Regex::new(rule.pattern).is_ok(), "{}", rule.pattern);
    }
    for rule in HOOK_RULES {
        assert!(regex::Regex::new(rule.pattern).is_ok(), "{}", rule.pattern);
    }
}
