//! # Rendering
//!
//! Maps parsed blocks to output formats. Parsing never depends on these.
//!
//! - **`html`**: HTML fragments and standalone pages, with a copy button per code block
//! - **`outline`**: a compact text form of the block sequence, used by snapshot
//!   tests and the CLI's `--outline` mode

pub mod html;
pub mod outline;
