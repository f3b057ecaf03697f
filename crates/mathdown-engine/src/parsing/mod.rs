pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod math;
pub mod snapshot;
pub mod text;

use crate::document::BlockNode;
use crate::options::RenderOptions;

use assemble::DocumentAssembler;
use blocks::{BlockBuilder, LineClassifier};
use text::physical_lines;

/// Renders `text` with every capability enabled.
pub fn render(text: &str) -> Vec<BlockNode> {
    render_with(text, &RenderOptions::default())
}

/// Renders `text` into the public block tree.
///
/// Total: any input, including malformed fences and unterminated delimiters,
/// yields a tree. Anomalies are resolved in place and logged at `debug`.
pub fn render_with(text: &str, options: &RenderOptions) -> Vec<BlockNode> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(*options);

    for lr in physical_lines(text) {
        let line = classifier.classify(lr);
        builder.push(&line);
    }

    let raw = builder.finish();
    let blocks = DocumentAssembler::new(*options).assemble(raw);
    log::trace!(
        "rendered {} bytes into {} blocks ({options:?})",
        text.len(),
        blocks.len()
    );
    blocks
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::document::{BlockKind, InlineKind, LineSpan};

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render("").is_empty());
    }

    #[test]
    fn terminal_newline_adds_no_block() {
        assert_eq!(render("hello\n").len(), 1);
        assert_eq!(render("hello\r\n"), render("hello"));
    }

    #[test]
    fn heading_paragraph_and_rule() {
        let blocks = render("## Notes\nfirst\nsecond\n---");
        let kinds: Vec<_> = blocks.iter().map(|b| &b.kind).collect();
        assert!(matches!(kinds[0], BlockKind::Heading { .. }));
        assert!(matches!(kinds[1], BlockKind::Paragraph { .. }));
        assert_eq!(kinds[2], &BlockKind::Rule);
        assert_eq!(blocks[1].lines, LineSpan { first: 1, last: 2 });
        assert_eq!(blocks[1].plain_text(), "first\nsecond");
    }

    #[test]
    fn code_block_is_untouched_by_inline_stages() {
        let blocks = render("```\n**x** $y$\n```");
        assert_eq!(
            blocks[0].kind,
            BlockKind::CodeBlock {
                language: None,
                raw_lines: vec!["**x** $y$".into()],
            }
        );
    }

    #[test]
    fn digest_options_keep_fences_and_dollars_as_text() {
        let blocks = render_with("```\n$x$", &RenderOptions::digest());
        assert_eq!(blocks.len(), 1);
        let BlockKind::Paragraph { content } = &blocks[0].kind else {
            panic!("expected paragraph");
        };
        let kinds: Vec<_> = content.iter().map(|r| &r.kind).collect();
        assert_eq!(kinds, vec![&InlineKind::Text("```\n$x$".into())]);
    }
}
