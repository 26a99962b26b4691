//! Parser tests over whole responses.
//!
//! Every case also runs the output through the invariant checker.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseOptions, Parser,
    blocks::{Block, ListKind},
    inline::FormattedText,
    parse_blocks,
    snapshot::invariants,
};

fn parse(input: &str) -> Vec<Block> {
    let blocks = parse_blocks(input);
    invariants(input, &blocks);
    blocks
}

fn text(s: &str) -> FormattedText {
    FormattedText::from_markup(s)
}

fn items(kind: ListKind, items: &[&str]) -> Block {
    Block::List {
        kind,
        items: items.iter().map(|s| text(s)).collect(),
    }
}

fn code(language: Option<&str>, lines: &[&str]) -> Block {
    Block::Code {
        language: language.map(str::to_string),
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn mixed_response() {
    let blocks = parse("# Title\n\nSome *em* and **strong** text.\n- a\n- b\n```\ncode line\n```");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                text: text("Title")
            },
            Block::Paragraph {
                text: text("Some <em>em</em> and <strong>strong</strong> text.")
            },
            items(ListKind::Unordered, &["a", "b"]),
            code(None, &["code line"]),
        ]
    );
}

#[test]
fn list_kind_change_forces_flush() {
    assert_eq!(
        parse("1. first\n2. second\n- switched"),
        vec![
            items(ListKind::Ordered, &["first", "second"]),
            items(ListKind::Unordered, &["switched"]),
        ]
    );
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n   \n\t\n")]
fn blank_input_has_no_blocks(#[case] input: &str) {
    assert_eq!(parse(input), vec![]);
}

#[test]
fn parsing_is_deterministic() {
    let input = "## A\n* x\n1. y\n```js\nconst a = `b`;\n---\nend";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn fenced_lines_are_verbatim_and_uninterpreted() {
    let input = "```Rust \n# not a heading\n- not a list\n**not bold**\n\n---\n```";
    assert_eq!(
        parse(input),
        vec![code(
            Some("rust"),
            &["# not a heading", "- not a list", "**not bold**", "", "---"]
        )]
    );
}

#[test]
fn unterminated_fence_covers_rest_of_input() {
    let input = "intro\n```\na\n```\nmiddle\n```py\nb\n- c";
    assert_eq!(
        parse(input),
        vec![
            Block::Paragraph {
                text: text("intro")
            },
            code(None, &["a"]),
            Block::Paragraph {
                text: text("middle")
            },
            code(Some("py"), &["b", "- c"]),
        ]
    );
}

#[test]
fn trailing_newline_inside_unterminated_fence_is_kept() {
    assert_eq!(parse("```\nx\n"), vec![code(None, &["x", ""])]);
}

#[test]
fn one_line_between_lists_splits_them() {
    assert_eq!(
        parse("- a\n- b\nbreak\n- c"),
        vec![
            items(ListKind::Unordered, &["a", "b"]),
            Block::Paragraph {
                text: text("break")
            },
            items(ListKind::Unordered, &["c"]),
        ]
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        parse("- a\n\n- b"),
        vec![
            items(ListKind::Unordered, &["a"]),
            items(ListKind::Unordered, &["b"]),
        ]
    );
}

#[test]
fn mixed_bullets_share_one_list() {
    assert_eq!(
        parse("- a\n* b\n  - nested"),
        vec![items(ListKind::Unordered, &["a", "b", "nested"])]
    );
}

#[test]
fn list_items_are_inline_formatted() {
    assert_eq!(
        parse("1. run `cargo test`\n2. check **output**"),
        vec![items(
            ListKind::Ordered,
            &["run <code>cargo test</code>", "check <strong>output</strong>"]
        )]
    );
}

#[rstest]
#[case("# one", 1)]
#[case("## two", 2)]
#[case("###### six", 6)]
#[case("########## ten", 6)]
fn heading_levels_are_capped(#[case] input: &str, #[case] level: u8) {
    match parse(input).as_slice() {
        [Block::Heading { level: got, .. }] => assert_eq!(*got, level),
        other => panic!("expected one heading, got {other:?}"),
    }
}

#[test]
fn heading_flushes_list() {
    assert_eq!(
        parse("- a\n# H"),
        vec![
            items(ListKind::Unordered, &["a"]),
            Block::Heading {
                level: 1,
                text: text("H")
            },
        ]
    );
}

#[test]
fn rules_flush_lists_and_stand_alone() {
    assert_eq!(
        parse("- a\n---\n___\n***"),
        vec![
            items(ListKind::Unordered, &["a"]),
            Block::Rule,
            Block::Rule,
            Block::Rule,
        ]
    );
}

#[test]
fn adjacent_lines_are_separate_paragraphs() {
    assert_eq!(
        parse("one\ntwo"),
        vec![
            Block::Paragraph { text: text("one") },
            Block::Paragraph { text: text("two") },
        ]
    );
}

#[test]
fn paragraph_keeps_leading_whitespace() {
    assert_eq!(
        parse("   indented"),
        vec![Block::Paragraph {
            text: text("   indented")
        }]
    );
}

#[test]
fn prose_is_escaped_by_default() {
    assert_eq!(
        parse("<img src=x onerror=alert(1)>"),
        vec![Block::Paragraph {
            text: text("&lt;img src=x onerror=alert(1)&gt;")
        }]
    );
}

#[test]
fn escaping_can_be_disabled() {
    let parser = Parser::with_options(ParseOptions { escape_html: false });
    assert_eq!(
        parser.parse("<b>x</b>"),
        vec![Block::Paragraph {
            text: text("<b>x</b>")
        }]
    );
}

#[test]
fn code_is_never_escaped_in_blocks() {
    assert_eq!(parse("```\n<b>&</b>\n```"), vec![code(None, &["<b>&</b>"])]);
}

#[test]
fn crlf_list_items_match_lf_items() {
    assert_eq!(
        parse("- a\r\n- b\r\n1. c\r"),
        vec![
            items(ListKind::Unordered, &["a", "b"]),
            items(ListKind::Ordered, &["c"]),
        ]
    );
}

#[test]
fn crlf_fences_keep_code_lines_verbatim() {
    assert_eq!(
        parse("```rust\r\nlet x = 1;\r\n```\r"),
        vec![code(Some("rust"), &["let x = 1;\r"])]
    );
}
