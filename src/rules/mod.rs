//! The editorial rule catalog.
//!
//! Every rule is a compile-time constant. The catalog entries define
//! compatibility with already-reviewed article corpora and must not change
//! without re-reviewing those corpora.

use serde::Serialize;

/// A rule matched by a regex pattern against a single line.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pub pattern: &'static str,
    pub label: &'static str,
    pub suggestion: &'static str,
}

/// A rule matched by plain substring search against a single line.
#[derive(Debug, Clone, Copy)]
pub struct WordRule {
    pub word: &'static str,
    pub suggestion: &'static str,
}

/// A rule applied only to the opening lines of a document.
#[derive(Debug, Clone, Copy)]
pub struct HookRule {
    pub pattern: &'static str,
    pub label: &'static str,
}

/// Rule category, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Punctuation,
    SentencePattern,
    Vocabulary,
    QuoteLimit,
    Hook,
}

impl RuleCategory {
    /// Category name as shown in reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Punctuation => "禁用標點",
            Self::SentencePattern => "禁用句型",
            Self::Vocabulary => "禁用詞彙",
            Self::QuoteLimit => "引號過多",
            Self::Hook => "Hook 禁用模式",
        }
    }

    /// Whether a violation in this category fails the whole review.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::SentencePattern | Self::Vocabulary | Self::Hook)
    }
}

/// Maximum quotes allowed per article.
pub const QUOTE_LIMIT: usize = 1;

/// Hook rules only inspect this many non-blank lines from the top.
pub const HOOK_WINDOW: usize = 5;

pub const QUOTE_SUGGESTION: &str = "一篇最多使用 1 個引號";

pub const HOOK_SUGGESTION: &str = "換個切入點";

pub const PUNCTUATION_RULES: &[LineRule] = &[
    LineRule {
        pattern: "—",
        label: "Em-dash",
        suggestion: "改用句號或逗號",
    },
    LineRule {
        pattern: "；",
        label: "Semicolon",
        suggestion: "改用句號或逗號",
    },
];

// Non-greedy spans: the shortest stretch between the two markers on one line.
pub const SENTENCE_RULES: &[LineRule] = &[
    LineRule {
        pattern: "不是.*?而是.*?",
        label: "不是...而是...",
        suggestion: "改用直述句",
    },
    LineRule {
        pattern: "在.*?的時代",
        label: "在...的時代",
        suggestion: "刪除或改寫",
    },
    LineRule {
        pattern: "不只.*?還是.*?",
        label: "不只...還是...",
        suggestion: "改用直述句",
    },
    LineRule {
        pattern: "不只是.*?而是.*?",
        label: "不只是...而是...",
        suggestion: "改用直述句",
    },
    LineRule {
        pattern: "不需要.*?只需要",
        label: "不需要...只需要",
        suggestion: "改用直述句",
    },
];

pub const VOCABULARY_RULES: &[WordRule] = &[
    WordRule {
        word: "賦能",
        suggestion: "換個詞",
    },
    WordRule {
        word: "深度",
        suggestion: "具體一點",
    },
    WordRule {
        word: "快速變化",
        suggestion: "具體一點",
    },
    WordRule {
        word: "記住！",
        suggestion: "不要命令讀者",
    },
    WordRule {
        word: "一起撐",
        suggestion: "太矯情",
    },
    WordRule {
        word: "溫柔",
        suggestion: "太矯情",
    },
    WordRule {
        word: "陪你一起",
        suggestion: "太矯情",
    },
];

pub const HOOK_RULES: &[HookRule] = &[
    HookRule {
        pattern: "你一定會很驚訝",
        label: "假裝驚訝",
    },
    HookRule {
        pattern: "說出來你可能不信",
        label: "假裝驚訝",
    },
    HookRule {
        pattern: "非常重要",
        label: "過度強調",
    },
    HookRule {
        pattern: "絕對不能錯過",
        label: "過度強調",
    },
    HookRule {
        pattern: "一定要看到最後",
        label: "過度強調",
    },
    HookRule {
        pattern: "我發現一件事",
        label: "空洞鋪陳",
    },
    HookRule {
        pattern: "讓我告訴你一個秘密",
        label: "空洞鋪陳",
    },
    HookRule {
        pattern: "是的，你沒看錯",
        label: "冗餘確認",
    },
    HookRule {
        pattern: "沒錯，就是這樣",
        label: "冗餘確認",
    },
    HookRule {
        pattern: "太棒了",
        label: "誇張情緒",
    },
    HookRule {
        pattern: "天啊",
        label: "誇張情緒",
    },
    HookRule {
        pattern: "超級重要",
        label: "誇張情緒",
    },
];

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
