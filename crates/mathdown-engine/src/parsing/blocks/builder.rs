use crate::document::LineSpan;
use crate::options::RenderOptions;

use super::{
    classify::{Line, LineRole},
    types::{RawBlock, RawBlockKind, RawItem},
};

/// The block currently being accumulated.
///
/// Each line consumes the current value and yields the next one; closed
/// blocks are pushed to the builder's output on the way.
#[derive(Debug, Default)]
enum OpenBlock<'a> {
    #[default]
    Idle,
    Paragraph {
        first: u32,
        last: u32,
        lines: Vec<&'a str>,
    },
    List {
        first: u32,
        last: u32,
        ordered: bool,
        items: Vec<RawItem<'a>>,
    },
    Fence {
        first: u32,
        last: u32,
        language: Option<&'a str>,
        raw_lines: Vec<&'a str>,
    },
}

pub struct BlockBuilder<'a> {
    options: RenderOptions,
    open: OpenBlock<'a>,
    out: Vec<RawBlock<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            open: OpenBlock::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &Line<'a>) {
        let state = std::mem::take(&mut self.open);
        self.open = self.step(state, line);
    }

    pub fn finish(mut self) -> Vec<RawBlock<'a>> {
        // EOF flush
        let state = std::mem::take(&mut self.open);
        if let OpenBlock::Fence { first, .. } = &state {
            log::debug!("code fence opened on line {first} is never closed; keeping the rest of the input as code");
        }
        self.close(state);
        self.out
    }

    fn step(&mut self, state: OpenBlock<'a>, line: &Line<'a>) -> OpenBlock<'a> {
        match state {
            OpenBlock::Fence {
                first,
                language,
                raw_lines,
                ..
            } if matches!(line.role, LineRole::FenceDelimiter { .. }) => {
                self.emit(
                    LineSpan {
                        first,
                        last: line.index,
                    },
                    RawBlockKind::CodeBlock {
                        language,
                        raw_lines,
                    },
                );
                OpenBlock::Idle
            }
            OpenBlock::Fence {
                first,
                language,
                mut raw_lines,
                ..
            } => {
                raw_lines.push(line.text);
                OpenBlock::Fence {
                    first,
                    last: line.index,
                    language,
                    raw_lines,
                }
            }
            state => self.step_outside_fence(state, line),
        }
    }

    fn step_outside_fence(&mut self, state: OpenBlock<'a>, line: &Line<'a>) -> OpenBlock<'a> {
        let (role, content) = match line.role {
            LineRole::FenceDelimiter { .. } if !self.options.allow_code_fences => {
                (LineRole::Plain, line.text)
            }
            role => (role, line.content),
        };
        let at = LineSpan::single(line.index);

        match role {
            LineRole::FenceDelimiter { language } => {
                self.close(state);
                OpenBlock::Fence {
                    first: line.index,
                    last: line.index,
                    language: Some(language).filter(|l| !l.is_empty()),
                    raw_lines: vec![],
                }
            }
            LineRole::Heading { level } => {
                self.close(state);
                self.emit(
                    at,
                    RawBlockKind::Heading {
                        level,
                        text: content,
                    },
                );
                OpenBlock::Idle
            }
            LineRole::Rule => {
                self.close(state);
                self.emit(at, RawBlockKind::Rule);
                OpenBlock::Idle
            }
            LineRole::Blank => {
                self.close(state);
                self.emit(at, RawBlockKind::Blank);
                OpenBlock::Idle
            }
            LineRole::BulletItem | LineRole::NumberedItem { .. } => {
                let label = match role {
                    LineRole::NumberedItem { label } => Some(label),
                    _ => None,
                };
                let ordered = label.is_some();
                let item = RawItem {
                    line: line.index,
                    label,
                    text: content,
                };
                match state {
                    OpenBlock::List {
                        first,
                        ordered: open_ordered,
                        mut items,
                        ..
                    } if open_ordered == ordered => {
                        items.push(item);
                        OpenBlock::List {
                            first,
                            last: line.index,
                            ordered,
                            items,
                        }
                    }
                    other => {
                        self.close(other);
                        OpenBlock::List {
                            first: line.index,
                            last: line.index,
                            ordered,
                            items: vec![item],
                        }
                    }
                }
            }
            LineRole::Plain => match state {
                OpenBlock::Paragraph {
                    first, mut lines, ..
                } => {
                    lines.push(content);
                    OpenBlock::Paragraph {
                        first,
                        last: line.index,
                        lines,
                    }
                }
                other => {
                    self.close(other);
                    OpenBlock::Paragraph {
                        first: line.index,
                        last: line.index,
                        lines: vec![content],
                    }
                }
            },
        }
    }

    fn close(&mut self, state: OpenBlock<'a>) {
        match state {
            OpenBlock::Idle => {}
            OpenBlock::Paragraph { first, last, lines } => self.emit(
                LineSpan { first, last },
                RawBlockKind::Paragraph {
                    text: lines.join("\n"),
                },
            ),
            OpenBlock::List {
                first,
                last,
                ordered,
                items,
            } => self.emit(LineSpan { first, last }, RawBlockKind::List { ordered, items }),
            // Unterminated fence: emit as code block anyway
            OpenBlock::Fence {
                first,
                last,
                language,
                raw_lines,
            } => self.emit(
                LineSpan { first, last },
                RawBlockKind::CodeBlock {
                    language,
                    raw_lines,
                },
            ),
        }
    }

    fn emit(&mut self, lines: LineSpan, kind: RawBlockKind<'a>) {
        self.out.push(RawBlock { lines, kind });
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
