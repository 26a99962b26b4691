use std::fmt;

use serde::{Deserialize, Serialize};

use super::segments::{self, Segment};

/// Text of a single line after inline formatting.
///
/// Holds HTML-style markup (`<strong>`, `<em>`, `<code>`) produced by the
/// inline rules. Block parsing treats it as opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedText(String);

impl FormattedText {
    /// Wraps already formatted markup without re-running the inline rules.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Styled runs of this text with markup removed and entities decoded.
    pub fn segments(&self) -> Vec<Segment> {
        segments::split(&self.0)
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FormattedText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FormattedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
