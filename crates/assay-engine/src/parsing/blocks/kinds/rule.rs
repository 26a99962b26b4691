/// Horizontal rule block type.
///
/// A rule is a line made only of one repeated rule character, at least
/// [`Rule::MIN_RUN`] long. Whitespace anywhere on the line disqualifies it.
pub struct Rule;

impl Rule {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(line: &str) -> bool {
        line.len() >= Self::MIN_RUN
            && Self::CHARS
                .iter()
                .any(|&c| line.chars().all(|ch| ch == c))
    }
}
