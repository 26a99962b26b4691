use regex::Regex;
use std::sync::OnceLock;

use crate::parsing::blocks::types::ListKind;

/// List item block type.
///
/// Both item forms allow leading whitespace and require whitespace between
/// the marker and the item text. Nesting is not tracked: indented items join
/// the surrounding list.
pub struct ListItem;

impl ListItem {
    fn unordered() -> &'static Regex {
        static UNORDERED: OnceLock<Regex> = OnceLock::new();
        UNORDERED
            .get_or_init(|| Regex::new(r"^\s*[-*]\s+([^\r\n]*)").expect("Invalid unordered item regex"))
    }

    fn ordered() -> &'static Regex {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        ORDERED.get_or_init(|| Regex::new(r"^\s*[0-9]+\.\s+([^\r\n]*)").expect("Invalid ordered item regex"))
    }

    /// Matches a list item, returning its kind and text.
    ///
    /// Unordered items are checked before ordered ones.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        if let Some(text) = Self::capture(Self::unordered(), line) {
            return Some((ListKind::Unordered, text));
        }
        Self::capture(Self::ordered(), line).map(|text| (ListKind::Ordered, text))
    }

    fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
