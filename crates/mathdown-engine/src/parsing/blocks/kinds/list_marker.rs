use std::sync::OnceLock;

use regex::Regex;

/// Bullet list marker: `- ` or `* `.
pub struct BulletMarker;

impl BulletMarker {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Returns the byte offset where item text starts.
    pub fn open(trimmed: &str) -> Option<usize> {
        Self::MARKERS
            .iter()
            .find(|m| trimmed.starts_with(*m))
            .map(|m| m.len())
    }
}

/// Ordered list marker: digits, a dot, then whitespace.
pub struct NumberedMarker;

impl NumberedMarker {
    fn pattern() -> &'static Regex {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMBERED_REGEX
            .get_or_init(|| Regex::new(r"^([0-9]+)\.\s").expect("Invalid numbered item regex"))
    }

    /// Returns the literal label digits and the offset where item text starts.
    pub fn open(trimmed: &str) -> Option<(&str, usize)> {
        let caps = Self::pattern().captures(trimmed)?;
        Some((caps.get(1)?.as_str(), caps.get(0)?.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_markers() {
        assert_eq!(BulletMarker::open("- item"), Some(2));
        assert_eq!(BulletMarker::open("* item"), Some(2));
        assert_eq!(BulletMarker::open("+ item"), None);
        assert_eq!(BulletMarker::open("*emphasis*"), None);
    }

    #[test]
    fn numbered_marker_keeps_label() {
        assert_eq!(NumberedMarker::open("12. twelve"), Some(("12", 4)));
        assert_eq!(NumberedMarker::open("007. bond"), Some(("007", 5)));
    }

    #[test]
    fn numbered_marker_needs_dot_and_space() {
        assert_eq!(NumberedMarker::open("1) nope"), None);
        assert_eq!(NumberedMarker::open("1.nope"), None);
        assert_eq!(NumberedMarker::open("v1. nope"), None);
    }
}
