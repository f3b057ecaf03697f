//! Public output tree.
//!
//! Every leaf holds plain text. Nothing in here is markup, and the host must
//! render each leaf through an escaping text-insertion primitive.

use serde::Serialize;

/// Order-based identifier for blocks, list items and runs.
///
/// Assigned from a single counter in document pre-order, so identical input
/// always yields identical identifiers and hosts can diff two renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// Inclusive range of input line indices a block was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub first: u32,
    pub last: u32,
}

impl LineSpan {
    pub fn single(index: u32) -> Self {
        Self {
            first: index,
            last: index,
        }
    }
}

/// Heading depth. Only three levels are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeadingLevel {
    H1 = 1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn depth(self) -> u8 {
        self as u8
    }
}

impl TryFrom<usize> for HeadingLevel {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            _ => Err(()),
        }
    }
}

/// Whether an equation came from `$$...$$` or `$...$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EquationForm {
    Block,
    Inline,
}

impl EquationForm {
    /// The delimiter that opens and closes this form.
    pub fn delimiter(self) -> &'static str {
        match self {
            EquationForm::Block => "$$",
            EquationForm::Inline => "$",
        }
    }
}

/// A typed span of text inside a block. Runs never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineRun {
    pub id: NodeId,
    pub kind: InlineKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineKind {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Equation {
        form: EquationForm,
        transcoded: String,
    },
}

impl InlineRun {
    /// The run's visible text, delimiters already removed.
    pub fn text(&self) -> &str {
        match &self.kind {
            InlineKind::Text(s) | InlineKind::Bold(s) | InlineKind::Italic(s) | InlineKind::Code(s) => {
                s
            }
            InlineKind::Equation { transcoded, .. } => transcoded,
        }
    }
}

/// Concatenates the visible text of a run sequence.
pub fn runs_text(runs: &[InlineRun]) -> String {
    runs.iter().map(InlineRun::text).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: NodeId,
    /// Input line the item came from.
    pub line: u32,
    /// Literal number text for ordered items (`"7"` for `7. foo`), `None` for bullets.
    pub label: Option<String>,
    pub content: Vec<InlineRun>,
}

/// A top-level structural unit of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub id: NodeId,
    pub lines: LineSpan,
    pub kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    Heading {
        level: HeadingLevel,
        content: Vec<InlineRun>,
    },
    Paragraph {
        content: Vec<InlineRun>,
    },
    /// Verbatim lines between fence delimiters. No inline processing.
    CodeBlock {
        language: Option<String>,
        raw_lines: Vec<String>,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    Rule,
    Blank,
}

impl BlockNode {
    /// Flattens the block to plain text for previews and notifications.
    ///
    /// List items and code lines are joined with `\n`.
    pub fn plain_text(&self) -> String {
        match &self.kind {
            BlockKind::Heading { content, .. } | BlockKind::Paragraph { content } => {
                runs_text(content)
            }
            BlockKind::CodeBlock { raw_lines, .. } => raw_lines.join("\n"),
            BlockKind::List { items, .. } => items
                .iter()
                .map(|item| runs_text(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
            BlockKind::Rule | BlockKind::Blank => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_run(id: u32, s: &str) -> InlineRun {
        InlineRun {
            id: NodeId(id),
            kind: InlineKind::Text(s.into()),
        }
    }

    #[test]
    fn heading_level_from_count() {
        assert_eq!(HeadingLevel::try_from(2), Ok(HeadingLevel::H2));
        assert!(HeadingLevel::try_from(4).is_err());
        assert!(HeadingLevel::try_from(0).is_err());
        assert_eq!(HeadingLevel::H3.depth(), 3);
    }

    #[test]
    fn equation_run_text_is_transcoded() {
        let run = InlineRun {
            id: NodeId(0),
            kind: InlineKind::Equation {
                form: EquationForm::Inline,
                transcoded: "α".into(),
            },
        };
        assert_eq!(run.text(), "α");
    }

    #[test]
    fn list_plain_text_joins_items() {
        let block = BlockNode {
            id: NodeId(0),
            lines: LineSpan { first: 0, last: 1 },
            kind: BlockKind::List {
                ordered: false,
                items: vec![
                    ListItem {
                        id: NodeId(1),
                        line: 0,
                        label: None,
                        content: vec![text_run(2, "one")],
                    },
                    ListItem {
                        id: NodeId(3),
                        line: 1,
                        label: None,
                        content: vec![text_run(4, "two")],
                    },
                ],
            },
        };
        assert_eq!(block.plain_text(), "one\ntwo");
    }

    #[test]
    fn rule_has_no_text() {
        let block = BlockNode {
            id: NodeId(0),
            lines: LineSpan::single(0),
            kind: BlockKind::Rule,
        };
        assert_eq!(block.plain_text(), "");
    }
}
