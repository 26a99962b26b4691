use crate::parsing::blocks::{Block, kinds::Heading};

/// Validates parser output invariants against the input it came from.
///
/// Asserts that:
/// - There are no more blocks than input lines
/// - Heading levels lie within `1..=6`
/// - Lists are never empty
/// - Code lines appear verbatim in the input, in input order
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, blocks: &[Block]) {
    let lines: Vec<&str> = input.split('\n').collect();
    assert!(
        blocks.len() <= lines.len(),
        "more blocks than lines: {} blocks for {} lines",
        blocks.len(),
        lines.len()
    );

    let mut cursor = 0usize;
    for (i, b) in blocks.iter().enumerate() {
        match b {
            Block::Heading { level, .. } => assert!(
                (1..=Heading::MAX_LEVEL).contains(level),
                "heading level out of range at block {i}: {level}"
            ),
            Block::List { items, .. } => {
                assert!(!items.is_empty(), "empty list at block {i}")
            }
            Block::Code { lines: code, .. } => {
                for line in code {
                    let found = lines[cursor..].iter().position(|l| *l == line.as_str());
                    match found {
                        Some(offset) => cursor += offset + 1,
                        None => panic!(
                            "code line {line:?} at block {i} not found in input after line {cursor}"
                        ),
                    }
                }
            }
            Block::Paragraph { .. } | Block::Rule => {}
        }
    }
}
