//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`invariants`**: Runtime checks for parser correctness (heading levels
//!   in range, lists non-empty, code lines verbatim and in input order)
//!
//! Snapshots themselves are taken over [`crate::render::outline`], a stable
//! one-line-per-item text form of the block sequence.

pub mod invariants;

pub use crate::render::outline::render as outline;
pub use invariants::check as invariants;
