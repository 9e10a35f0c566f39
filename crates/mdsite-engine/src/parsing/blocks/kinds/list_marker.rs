use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The two list flavours and their item markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListMarker {
    /// `* `, `- ` or `+ `
    Unordered,
    /// `<digits>. `
    Ordered,
}

impl ListMarker {
    pub const BULLETS: [&'static str; 3] = ["* ", "- ", "+ "];

    fn ordered_pattern() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid ordered list regex"))
    }

    pub fn tag(self) -> &'static str {
        match self {
            ListMarker::Unordered => "ul",
            ListMarker::Ordered => "ol",
        }
    }

    /// True if `line`, ignoring indentation, starts with this marker.
    pub fn matches(self, line: &str) -> bool {
        self.strip(line).is_some()
    }

    /// Removes indentation, the marker and the single whitespace after it.
    pub fn strip(self, line: &str) -> Option<&str> {
        let line = line.trim_start();
        match self {
            ListMarker::Unordered => Self::BULLETS
                .iter()
                .find_map(|bullet| line.strip_prefix(*bullet)),
            ListMarker::Ordered => Self::ordered_pattern()
                .find(line)
                .map(|m| &line[m.end()..]),
        }
    }
}
