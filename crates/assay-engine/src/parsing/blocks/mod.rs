//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over `\n`-separated lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (fence, heading, list item, rule, blank)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds the open list
//!    or code fence and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `ListKind`)
//! - **`kinds`**: Line-pattern types with owned delimiters (CodeFence, Heading, ListItem, Rule)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - An unterminated fence is emitted at end of input, never dropped
//! - Lists are never empty; a list kind change starts a new list
//! - Output order follows input line order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use types::{Block, ListKind};
