use crate::document::HeadingLevel;
use crate::parsing::text::{LineRef, physical_lines};

use super::kinds::{BulletMarker, CodeFence, Heading, NumberedMarker, ThematicRule};

/// Block-level role of a single line, derived from the line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole<'a> {
    Heading { level: HeadingLevel },
    BulletItem,
    NumberedItem { label: &'a str },
    FenceDelimiter { language: &'a str },
    Rule,
    Blank,
    Plain,
}

/// A classified physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: u32,
    /// Full line text as it appeared in the input.
    pub text: &'a str,
    /// The part that carries displayable text: after the heading or list
    /// marker, or the whole untrimmed line for `Plain`.
    pub content: &'a str,
    pub role: LineRole<'a>,
}

/// Classifies individual lines for the block assembly phase.
///
/// Rules are checked in a fixed priority on the trimmed line, first match
/// wins: fence, heading, rule, bullet, numbered, blank, plain. Indentation
/// never changes the role.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify<'a>(&self, lr: LineRef<'a>) -> Line<'a> {
        let (role, content) = Self::role_of(lr.text);
        Line {
            index: lr.index,
            text: lr.text,
            content,
            role,
        }
    }

    /// Roles are decided on the trimmed line; content is cut from the line
    /// with only its indent removed, so trailing whitespace survives.
    fn role_of(text: &str) -> (LineRole<'_>, &str) {
        let unindented = text.trim_start();
        let trimmed = unindented.trim_end();
        if let Some(language) = CodeFence::sig(trimmed) {
            return (LineRole::FenceDelimiter { language }, "");
        }
        if let Some((level, at)) = Heading::open(trimmed) {
            return (LineRole::Heading { level }, &unindented[at..]);
        }
        if ThematicRule::matches(trimmed) {
            return (LineRole::Rule, "");
        }
        if let Some(at) = BulletMarker::open(trimmed) {
            return (LineRole::BulletItem, &unindented[at..]);
        }
        if let Some((label, at)) = NumberedMarker::open(trimmed) {
            return (LineRole::NumberedItem { label }, &unindented[at..]);
        }
        if trimmed.is_empty() {
            return (LineRole::Blank, "");
        }
        (LineRole::Plain, text)
    }
}

/// Splits `raw` into lines and classifies each one.
pub fn classify(raw: &str) -> Vec<Line<'_>> {
    let classifier = LineClassifier;
    physical_lines(raw).map(|lr| classifier.classify(lr)).collect()
}
