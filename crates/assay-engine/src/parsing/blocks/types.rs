use serde::{Deserialize, Serialize};

use crate::parsing::inline::FormattedText;

/// Whether a list is numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// `1. item`
    Ordered,
    /// `- item` or `* item`
    Unordered,
}

impl ListKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered)
    }
}

/// A parsed block of a generated response.
///
/// Blocks are produced in input line order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A `#` heading. `level` is always within `1..=6`.
    Heading { level: u8, text: FormattedText },
    /// A single non-blank line of prose.
    Paragraph { text: FormattedText },
    /// A run of list items of the same kind. `items` is never empty.
    List {
        kind: ListKind,
        items: Vec<FormattedText>,
    },
    /// A fenced code block. `lines` are kept verbatim, without inline formatting.
    Code {
        /// Lower-cased info string after the opening fence, `None` when empty.
        language: Option<String>,
        lines: Vec<String>,
    },
    /// A horizontal divider.
    Rule,
}

impl Block {
    /// Raw source of a code block, joined with `\n`; `None` for other blocks.
    ///
    /// This is the exact text a copy action hands to the clipboard.
    pub fn source(&self) -> Option<String> {
        match self {
            Block::Code { lines, .. } => Some(lines.join("\n")),
            _ => None,
        }
    }

    /// Short name of the block variant, used as the outline label.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::List { .. } => "List",
            Block::Code { .. } => "Code",
            Block::Rule => "Rule",
        }
    }
}
