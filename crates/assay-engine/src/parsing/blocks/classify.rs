use super::{
    kinds::{CodeFence, Heading, ListItem, Paragraph, Rule},
    types::ListKind,
};

/// What a single line looks like, judged without surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts with the fence marker; `language` is only meaningful on an opener.
    Fence { language: Option<String> },
    Heading { level: u8, text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    Rule,
    Blank,
    /// Anything else: becomes a paragraph outside code blocks.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing. Whether the line sits inside a code
/// block is decided by the builder, which then ignores `kind` and keeps
/// `raw` verbatim.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line, checking patterns in fixed precedence order:
    /// fence, heading, unordered item, ordered item, rule, blank, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let kind = if CodeFence::is_fence(line) {
            LineKind::Fence {
                language: CodeFence::language(line),
            }
        } else if let Some((level, text)) = Heading::parse(line) {
            LineKind::Heading { level, text }
        } else if let Some((kind, text)) = ListItem::parse(line) {
            LineKind::ListItem { kind, text }
        } else if Rule::matches(line) {
            LineKind::Rule
        } else if Paragraph::is_blank(line) {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass { raw: line, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind(line: &str) -> LineKind<'_> {
        LineClassifier.classify(line).kind
    }

    #[test]
    fn fence_beats_everything() {
        assert_eq!(
            kind("```Rust"),
            LineKind::Fence {
                language: Some("rust".into())
            }
        );
    }

    #[test]
    fn heading_beats_list_and_rule() {
        assert_eq!(
            kind("# - item"),
            LineKind::Heading {
                level: 1,
                text: "- item"
            }
        );
    }

    #[test]
    fn spaced_asterisks_are_a_list_item_not_a_rule() {
        assert_eq!(
            kind("* * *"),
            LineKind::ListItem {
                kind: ListKind::Unordered,
                text: "* *"
            }
        );
    }

    #[rstest]
    #[case("---", LineKind::Rule)]
    #[case("___", LineKind::Rule)]
    #[case("", LineKind::Blank)]
    #[case("   \t", LineKind::Blank)]
    #[case("just words", LineKind::Text)]
    #[case("--", LineKind::Text)]
    #[case("  ```", LineKind::Text)]
    fn classifies_remaining_kinds(#[case] line: &str, #[case] expected: LineKind<'static>) {
        assert_eq!(kind(line), expected);
    }

    #[test]
    fn raw_is_the_untouched_line() {
        let c = LineClassifier.classify("  1.  step  ");
        assert_eq!(c.raw, "  1.  step  ");
        assert_eq!(
            c.kind,
            LineKind::ListItem {
                kind: ListKind::Ordered,
                text: "step  "
            }
        );
    }
}
