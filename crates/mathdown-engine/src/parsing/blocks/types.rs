use crate::document::{HeadingLevel, LineSpan};

/// A list item before inline processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem<'a> {
    pub line: u32,
    pub label: Option<&'a str>,
    pub text: &'a str,
}

/// The kind of an assembled block whose text has not been inline-parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlockKind<'a> {
    Heading { level: HeadingLevel, text: &'a str },
    /// Contiguous plain lines joined with `\n`.
    Paragraph { text: String },
    CodeBlock {
        language: Option<&'a str>,
        raw_lines: Vec<&'a str>,
    },
    List { ordered: bool, items: Vec<RawItem<'a>> },
    Rule,
    Blank,
}

/// Output of the block assembly phase, attributable to a line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub lines: LineSpan,
    pub kind: RawBlockKind<'a>,
}
