pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, LineClassifier, kinds::CodeFence};
use inline::InlineFormatter;

/// Options controlling how responses are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Escape `&`, `<` and `>` in prose before inline markup is applied.
    pub escape_html: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { escape_html: true }
    }
}

/// Parses generated responses into blocks.
///
/// A `Parser` holds only options; every call to [`Parser::parse`] starts
/// from fresh state, so one parser can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses `text` into blocks in a single pass over its `\n`-separated lines.
    ///
    /// Total over all inputs: the empty string yields no blocks, and
    /// malformed fences or lists degrade into ordinary blocks.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let classifier = LineClassifier;
        let mut builder = BlockBuilder::new(InlineFormatter::new(self.options.escape_html));

        for line in text.split('\n') {
            let lc = classifier.classify(line);
            builder.push(&lc);
        }

        builder.finish()
    }
}

/// Parses `text` with default options.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    Parser::default().parse(text)
}

/// Returns the inner text of a response that is entirely one fenced block,
/// or the trimmed response otherwise.
pub fn unwrap_fenced_payload(text: &str) -> &str {
    CodeFence::unwrap_payload(text)
}
