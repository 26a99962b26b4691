use crate::parsing::inline::{FormattedText, InlineFormatter};

use super::{
    classify::{LineClass, LineKind},
    kinds::CodeFence,
    types::{Block, ListKind},
};

/// The block currently being accumulated, if any.
///
/// Holding lists and fences in one enum keeps at most one of them open.
#[derive(Debug)]
enum LeafState {
    None,
    List {
        kind: ListKind,
        items: Vec<FormattedText>,
    },
    Fence {
        language: Option<String>,
        lines: Vec<String>,
    },
}

pub struct BlockBuilder {
    formatter: InlineFormatter,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(formatter: InlineFormatter) -> Self {
        Self {
            formatter,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c.raw);
            return;
        }

        match &c.kind {
            LineKind::Fence { language } => {
                self.flush_list();
                self.leaf = LeafState::Fence {
                    language: language.clone(),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                let text = self.formatter.format(text);
                self.out.push(Block::Heading {
                    level: *level,
                    text,
                });
            }
            LineKind::ListItem { kind, text } => self.extend_list(*kind, text),
            LineKind::Rule => {
                self.flush_list();
                self.out.push(Block::Rule);
            }
            LineKind::Blank => self.flush_list(),
            LineKind::Text => {
                self.flush_list();
                let text = self.formatter.format(c.raw);
                self.out.push(Block::Paragraph { text });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.flush_unterminated_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, raw: &str) {
        if CodeFence::is_fence(raw) {
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(raw.to_string());
        }
    }

    fn extend_list(&mut self, kind: ListKind, text: &str) {
        let item = self.formatter.format(text);
        if let LeafState::List {
            kind: active,
            items,
        } = &mut self.leaf
            && *active == kind
        {
            items.push(item);
            return;
        }

        // Kind change or fresh list.
        self.flush_list();
        self.leaf = LeafState::List {
            kind,
            items: vec![item],
        };
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::List { kind, items } if !items.is_empty() => {
                self.out.push(Block::List { kind, items });
            }
            LeafState::List { .. } => {}
            other => self.leaf = other, // put back non-list leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { language, lines } = prev {
            self.out.push(Block::Code { language, lines });
        } else {
            self.leaf = prev;
        }
    }

    /// Emits a still-open fence at end of input instead of dropping it.
    fn flush_unterminated_fence(&mut self) {
        if let LeafState::Fence { language, lines } = &self.leaf {
            log::debug!(
                "unterminated code fence (language: {:?}, {} buffered lines)",
                language,
                lines.len()
            );
        }
        self.flush_fence();
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(InlineFormatter::default())
    }
}
