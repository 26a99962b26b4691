//! # Inline Formatting
//!
//! Line-local substitution of emphasis and code spans into HTML markup.
//!
//! ## Architecture
//!
//! Inline formatting is separate from block parsing and runs on the text of
//! every heading, list item and paragraph. Code block lines never reach it.
//!
//! The formatter escapes the raw line, then applies an ordered table of
//! regex rules, each exactly once over the whole line:
//!
//! 1. `**strong**`
//! 2. `__strong__`
//! 3. `*emphasis*`
//! 4. `_emphasis_`
//! 5. `` `code` `` (last)
//!
//! Delimiters match non-greedily and never span lines. Unbalanced
//! delimiters stay as literal characters.
//!
//! ## Modules
//!
//! - **`types`**: `FormattedText`, the markup-bearing output string
//! - **`rules`**: the substitution table and `InlineFormatter`
//! - **`segments`**: decomposes `FormattedText` into styled runs for non-HTML renderers

pub mod rules;
pub mod segments;
pub mod types;

pub use rules::{InlineFormatter, InlineRule, format_inline};
pub use segments::Segment;
pub use types::FormattedText;
