use regex::Regex;
use std::sync::OnceLock;

use super::types::FormattedText;

/// One inline substitution: every non-overlapping match of `pattern` is
/// replaced by `replacement`, where `${1}` is the delimited content.
#[derive(Debug, Clone, Copy)]
pub struct InlineRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// Substitutions in application order. Code spans come last so emphasis
/// markup never sees the `<code>` tags they produce.
pub const INLINE_RULES: [InlineRule; 5] = [
    InlineRule {
        name: "strong_asterisk",
        pattern: r"\*\*([^\r\n]*?)\*\*",
        replacement: "<strong>${1}</strong>",
    },
    InlineRule {
        name: "strong_underscore",
        pattern: r"__([^\r\n]*?)__",
        replacement: "<strong>${1}</strong>",
    },
    InlineRule {
        name: "emphasis_asterisk",
        pattern: r"\*([^\r\n]*?)\*",
        replacement: "<em>${1}</em>",
    },
    InlineRule {
        name: "emphasis_underscore",
        pattern: r"_([^\r\n]*?)_",
        replacement: "<em>${1}</em>",
    },
    InlineRule {
        name: "code_span",
        pattern: r"`([^`]+?)`",
        replacement: "<code>${1}</code>",
    },
];

fn compiled_rules() -> &'static [(Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        INLINE_RULES
            .iter()
            .map(|rule| {
                let re = Regex::new(rule.pattern).expect("Invalid inline rule regex");
                (re, rule.replacement)
            })
            .collect()
    })
}

/// Applies the inline rules to single lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineFormatter {
    escape_html: bool,
}

impl InlineFormatter {
    /// `escape_html` escapes `&`, `<` and `>` in the raw line before any
    /// substitution, so generated text cannot smuggle in its own markup.
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    pub fn format(&self, line: &str) -> FormattedText {
        let mut text = if self.escape_html {
            html_escape::encode_text(line).into_owned()
        } else {
            line.to_string()
        };

        for (re, replacement) in compiled_rules() {
            text = re.replace_all(&text, *replacement).into_owned();
        }

        FormattedText::from_markup(text)
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Formats a line with the default (escaping) formatter.
pub fn format_inline(line: &str) -> FormattedText {
    InlineFormatter::default().format(line)
}
