pub mod copy;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use copy::{Clipboard, ClipboardError, CopyButton, CopyState};
pub use parsing::{
    ParseOptions, Parser, parse_blocks, unwrap_fenced_payload,
    blocks::{Block, ListKind},
    inline::{FormattedText, InlineFormatter, Segment, format_inline},
};
