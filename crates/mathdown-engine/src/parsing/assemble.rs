use crate::document::{BlockKind, BlockNode, InlineKind, InlineRun, ListItem, NodeId};
use crate::options::RenderOptions;

use super::{
    blocks::{RawBlock, RawBlockKind, RawItem},
    inline::{InlineToken, tokenize_inline},
    math::{EquationPlaceholder, Extracted, extract_equations, transcode},
    text::Span,
};

/// Hands out [`NodeId`]s from one counter, in the order they are requested.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// Turns raw blocks into the public tree.
///
/// Ids are allocated in pre-order: a block, then (for lists) each item
/// followed by its runs, then the next block.
pub struct DocumentAssembler {
    options: RenderOptions,
    ids: IdAllocator,
}

impl DocumentAssembler {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ids: IdAllocator::default(),
        }
    }

    pub fn assemble(mut self, raw: Vec<RawBlock<'_>>) -> Vec<BlockNode> {
        raw.into_iter().map(|b| self.block(b)).collect()
    }

    fn block(&mut self, raw: RawBlock<'_>) -> BlockNode {
        let id = self.ids.next_id();
        let kind = match raw.kind {
            RawBlockKind::Heading { level, text } => BlockKind::Heading {
                level,
                content: self.inline_runs(text),
            },
            RawBlockKind::Paragraph { text } => BlockKind::Paragraph {
                content: self.inline_runs(&text),
            },
            RawBlockKind::CodeBlock {
                language,
                raw_lines,
            } => BlockKind::CodeBlock {
                language: language.map(str::to_string),
                raw_lines: raw_lines.into_iter().map(str::to_string).collect(),
            },
            RawBlockKind::List { ordered, items } => BlockKind::List {
                ordered,
                items: items.into_iter().map(|item| self.item(item)).collect(),
            },
            RawBlockKind::Rule => BlockKind::Rule,
            RawBlockKind::Blank => BlockKind::Blank,
        };
        BlockNode {
            id,
            lines: raw.lines,
            kind,
        }
    }

    fn item(&mut self, raw: RawItem<'_>) -> ListItem {
        let id = self.ids.next_id();
        ListItem {
            id,
            line: raw.line,
            label: raw.label.map(str::to_string),
            content: self.inline_runs(raw.text),
        }
    }

    /// Runs equation extraction, inline tokenizing and transcoding over one
    /// piece of displayable text and splices the equations back in.
    fn inline_runs(&mut self, text: &str) -> Vec<InlineRun> {
        let extracted = if self.options.allow_equations {
            extract_equations(text)
        } else {
            Extracted::verbatim(text)
        };
        let tokens = tokenize_inline(&extracted.text);

        let mut splicer = Splicer {
            text: &extracted.text,
            pending: extracted.equations.iter().peekable(),
            ids: &mut self.ids,
            out: Vec::with_capacity(tokens.len()),
        };
        for token in tokens {
            splicer.token(token);
        }
        splicer.out
    }
}

/// Walks tokens in order and consumes the equations whose markers fall inside
/// each one. Markers never sit inside a delimiter, so every equation lands in
/// exactly one token's inner span.
struct Splicer<'a, I: Iterator<Item = &'a EquationPlaceholder>> {
    text: &'a str,
    pending: std::iter::Peekable<I>,
    ids: &'a mut IdAllocator,
    out: Vec<InlineRun>,
}

impl<'a, I: Iterator<Item = &'a EquationPlaceholder>> Splicer<'a, I> {
    fn token(&mut self, token: InlineToken) {
        let inner = token.inner();
        match token {
            InlineToken::Code { .. } => self.code(inner),
            InlineToken::Text(_) => self.split(inner, InlineKind::Text),
            InlineToken::Bold { .. } => self.split(inner, InlineKind::Bold),
            InlineToken::Italic { .. } => self.split(inner, InlineKind::Italic),
        }
    }

    /// Inline code is verbatim, so equations inside it go back to source form.
    fn code(&mut self, inner: Span) {
        let mut s = String::with_capacity(inner.len());
        let mut pos = inner.start;
        while let Some(eq) = self.pending.next_if(|eq| inner.contains(eq.at)) {
            s.push_str(Span::new(pos, eq.at).slice(self.text));
            s.push_str(&eq.delimited_source());
            pos = eq.at + EquationPlaceholder::MARKER.len_utf8();
        }
        s.push_str(Span::new(pos, inner.end).slice(self.text));
        self.push(InlineKind::Code(s));
    }

    /// Emits `inner` as runs of `kind`, cut around every equation it holds.
    fn split(&mut self, inner: Span, kind: fn(String) -> InlineKind) {
        let mut pos = inner.start;
        while let Some(eq) = self.pending.next_if(|eq| inner.contains(eq.at)) {
            self.piece(pos, eq.at, kind);
            self.push(InlineKind::Equation {
                form: eq.form,
                transcoded: transcode(&eq.source),
            });
            pos = eq.at + EquationPlaceholder::MARKER.len_utf8();
        }
        self.piece(pos, inner.end, kind);
    }

    fn piece(&mut self, start: usize, end: usize, kind: fn(String) -> InlineKind) {
        let piece = Span::new(start, end);
        if !piece.is_empty() {
            self.push(kind(piece.slice(self.text).to_string()));
        }
    }

    fn push(&mut self, kind: InlineKind) {
        let id = self.ids.next_id();
        self.out.push(InlineRun { id, kind });
    }
}
