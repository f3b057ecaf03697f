use std::sync::OnceLock;

use regex::Regex;

use crate::document::HeadingLevel;

/// ATX heading, one to three `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,3})\s").expect("Invalid heading regex"))
    }

    /// Returns the level and the byte offset where the heading text starts.
    pub fn open(trimmed: &str) -> Option<(HeadingLevel, usize)> {
        let caps = Self::pattern().captures(trimmed)?;
        let hashes = caps.get(1)?;
        let level = HeadingLevel::try_from(hashes.len()).ok()?;
        Some((level, caps.get(0)?.end()))
    }
}
