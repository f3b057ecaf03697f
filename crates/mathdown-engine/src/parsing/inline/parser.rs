use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::InlineToken,
};

/// Delimiter kinds whose closer search already failed on the current line.
///
/// A later opener on the same line would search a suffix of the same range,
/// so it cannot succeed either. Remembering the failure keeps the pass linear.
#[derive(Debug, Default, Clone, Copy)]
struct DeadEnds {
    bold: bool,
    code: bool,
    italic: bool,
}

/// Per-line scanning limits. Inline constructs never span a line break.
#[derive(Debug, Clone, Copy)]
struct LineScope {
    end: usize,
    dead: DeadEnds,
}

impl LineScope {
    fn starting_at(cur: &Cursor<'_>) -> Self {
        Self {
            end: cur.line_end(),
            dead: DeadEnds::default(),
        }
    }
}

/// Tokenizes one block's text into [`InlineToken`]s.
///
/// Finds the earliest-starting construct among bold `**...**`, inline code
/// `` `...` `` and italic `*...*`; on a tie at the same byte the order is
/// bold, code, italic. Content must be non-empty and stay on one line.
/// Unterminated delimiters remain part of the surrounding text.
///
/// # Returns
/// Tokens covering the whole input in order. Text between constructs is
/// emitted as `InlineToken::Text`.
pub fn tokenize_inline(s: &str) -> Vec<InlineToken> {
    let mut cur = Cursor::new(s);
    let mut line = LineScope::starting_at(&cur);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text token
    fn flush_text(out: &mut Vec<InlineToken>, start: usize, end: usize) {
        if end > start {
            out.push(InlineToken::Text(Span::new(start, end)));
        }
    }

    while !cur.eof() {
        if cur.peek() == Some(b'\n') {
            cur.bump();
            line = LineScope::starting_at(&cur);
            continue;
        }
        let token = try_parse_bold(&mut cur, &mut line)
            .or_else(|| try_parse_code_span(&mut cur, &mut line))
            .or_else(|| try_parse_italic(&mut cur, &mut line));
        if let Some(token) = token {
            flush_text(&mut out, text_start, token.full().start);
            text_start = token.full().end;
            out.push(token);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos().min(s.len()));
    out
}

/// Attempts to parse `**...**` at the current position.
fn try_parse_bold(cur: &mut Cursor<'_>, line: &mut LineScope) -> Option<InlineToken> {
    if line.dead.bold || !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let start = cur.pos();
    let inner_start = start + Strong::DELIM.len();
    // At least one content byte before the closer may begin.
    let search_from = inner_start + 1;
    let bytes = cur.bytes();
    let close = (search_from < line.end)
        .then(|| {
            bytes[search_from..line.end]
                .windows(Strong::DELIM.len())
                .position(|w| w == Strong::DELIM)
        })
        .flatten();

    let Some(off) = close else {
        line.dead.bold = true;
        return None;
    };
    let inner_end = search_from + off;
    let end = inner_end + Strong::DELIM.len();
    cur.jump_to(end);

    Some(InlineToken::Bold {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span would be empty, or if it
/// isn't closed on this line.
fn try_parse_code_span(cur: &mut Cursor<'_>, line: &mut LineScope) -> Option<InlineToken> {
    if line.dead.code || cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let start = cur.pos();
    let inner_start = start + 1;
    let bytes = cur.bytes();
    let close = bytes[inner_start.min(line.end)..line.end]
        .iter()
        .position(|&b| b == CodeSpan::TICK);

    let Some(off) = close else {
        line.dead.code = true;
        return None;
    };
    if off == 0 {
        // Empty span; the second tick may still open one.
        return None;
    }
    let inner_end = inner_start + off;
    let end = inner_end + 1;
    cur.jump_to(end);

    Some(InlineToken::Code {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse `*...*` where both stars stand alone.
fn try_parse_italic(cur: &mut Cursor<'_>, line: &mut LineScope) -> Option<InlineToken> {
    let bytes = cur.bytes();
    let start = cur.pos();
    if line.dead.italic || !Emphasis::is_lone_star(bytes, start) {
        return None;
    }

    let inner_start = start + 1;
    let close = (inner_start + 1..line.end).find(|&at| Emphasis::is_lone_star(bytes, at));

    let Some(inner_end) = close else {
        line.dead.italic = true;
        return None;
    };
    let end = inner_end + 1;
    cur.jump_to(end);

    Some(InlineToken::Italic {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
