/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// line pattern matches. Each non-blank line is its own paragraph; adjacent
/// lines are never merged.
pub struct Paragraph;

impl Paragraph {
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }
}
