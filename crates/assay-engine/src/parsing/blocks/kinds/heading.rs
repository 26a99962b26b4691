/// Heading block type with owned marker constant.
///
/// A heading is any line starting with one or more `#`. No space is required
/// after the marker run, and runs longer than [`Heading::MAX_LEVEL`] map to
/// the deepest level.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Splits a heading line into `(level, text)`.
    ///
    /// The text is the remainder after the marker run with surrounding
    /// whitespace removed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let run = line.len() - rest.len();
        if run == 0 {
            return None;
        }
        let level = run.min(Self::MAX_LEVEL as usize) as u8;
        Some((level, rest.trim()))
    }
}
