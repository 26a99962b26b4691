//! # Copy Action
//!
//! Copy-to-clipboard support for rendered code blocks.
//!
//! Parsing only guarantees that each [`Block::Code`](crate::Block::Code)
//! keeps its raw source. Writing it out goes through an injected
//! [`Clipboard`] capability, and the transient button feedback
//! (`Copy` → `Copied!`/`Error!` → `Copy`) is modelled by [`CopyButton`].

pub mod button;
pub mod clipboard;

pub use button::{CopyButton, CopyState, DEFAULT_FEEDBACK};
pub use clipboard::{Clipboard, ClipboardError};
