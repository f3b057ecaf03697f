use crate::parsing::text::Span;

/// A token from the inline formatter, as spans into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken {
    /// Plain text that isn't part of any construct.
    Text(Span),
    /// `**...**`
    Bold {
        /// Full span including both `**`.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
    /// `*...*`
    Italic { full: Span, inner: Span },
    /// `` `...` ``. Raw zone: nothing inside is re-scanned.
    Code { full: Span, inner: Span },
}

impl InlineToken {
    /// Extracts the full span from any token variant.
    pub fn full(&self) -> Span {
        match self {
            InlineToken::Text(sp) => *sp,
            InlineToken::Bold { full, .. }
            | InlineToken::Italic { full, .. }
            | InlineToken::Code { full, .. } => *full,
        }
    }

    /// The span holding the visible content.
    pub fn inner(&self) -> Span {
        match self {
            InlineToken::Text(sp) => *sp,
            InlineToken::Bold { inner, .. }
            | InlineToken::Italic { inner, .. }
            | InlineToken::Code { inner, .. } => *inner,
        }
    }
}
