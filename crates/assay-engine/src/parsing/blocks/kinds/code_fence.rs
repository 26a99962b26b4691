use regex::Regex;
use std::sync::OnceLock;

/// Fenced code block type with owned delimiter constant.
///
/// A fence is only recognised at the very start of a line. Opening and
/// closing fences use the same marker; anything after the marker on an
/// opening fence is the declared language.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Language declared after an opening fence, trimmed and lower-cased.
    ///
    /// Returns `None` for lines that are not fences and for bare fences.
    pub fn language(line: &str) -> Option<String> {
        let info = line.strip_prefix(Self::MARKER)?.trim();
        if info.is_empty() {
            None
        } else {
            Some(info.to_lowercase())
        }
    }

    /// Strips a single fence wrapping an entire response.
    ///
    /// Structured (JSON) responses frequently arrive as one fenced block.
    /// When `text` is exactly such a block, its trimmed inner text is
    /// returned; otherwise the trimmed input is returned unchanged.
    pub fn unwrap_payload(text: &str) -> &str {
        static PAYLOAD: OnceLock<Regex> = OnceLock::new();
        let re = PAYLOAD.get_or_init(|| {
            Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("Invalid payload fence regex")
        });

        let trimmed = text.trim();
        match re.captures(trimmed).and_then(|caps| caps.get(2)) {
            Some(inner) if !inner.as_str().is_empty() => inner.as_str().trim(),
            _ => trimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence() {
        assert!(CodeFence::is_fence("```rust"));
        assert!(CodeFence::is_fence("```"));
    }

    #[test]
    fn indented_fence_is_not_a_fence() {
        assert!(!CodeFence::is_fence("  ```"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_fence("hello"));
        assert!(!CodeFence::is_fence("``inline``"));
    }

    #[test]
    fn language_is_trimmed_and_lowercased() {
        assert_eq!(CodeFence::language("```  YAML  "), Some("yaml".to_string()));
    }

    #[test]
    fn bare_fence_has_no_language() {
        assert_eq!(CodeFence::language("```"), None);
        assert_eq!(CodeFence::language("```   "), None);
    }

    #[test]
    fn unwrap_payload_strips_json_fence() {
        let text = "```json\n{\"findings\": []}\n```";
        assert_eq!(CodeFence::unwrap_payload(text), "{\"findings\": []}");
    }

    #[test]
    fn unwrap_payload_tolerates_surrounding_whitespace() {
        let text = "\n\n```\n[1, 2]\n```  \n";
        assert_eq!(CodeFence::unwrap_payload(text), "[1, 2]");
    }

    #[test]
    fn unwrap_payload_leaves_plain_text() {
        assert_eq!(CodeFence::unwrap_payload("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn unwrap_payload_leaves_text_with_trailing_prose() {
        let text = "```json\n{}\n```\nDone.";
        assert_eq!(CodeFence::unwrap_payload(text), text);
    }
}
