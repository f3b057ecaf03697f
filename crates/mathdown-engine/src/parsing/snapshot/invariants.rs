use crate::document::{BlockKind, BlockNode, NodeId};
use crate::parsing::blocks::kinds::CodeFence;

/// Panics if `blocks` is not a well-formed render of `source`.
pub fn check(source: &str, blocks: &[BlockNode]) {
    let lines: Vec<&str> = source.lines().collect();
    let n = lines.len() as u32;

    let mut prev_last: Option<u32> = None;
    for b in blocks {
        assert!(
            b.lines.first <= b.lines.last && b.lines.last < n,
            "block lines out of bounds: {:?} (line count: {n})",
            b.lines
        );
        if let Some(prev) = prev_last {
            assert!(
                b.lines.first > prev,
                "block lines overlap or go backwards: {:?} after line {prev}",
                b.lines
            );
        }
        prev_last = Some(b.lines.last);

        if let BlockKind::CodeBlock { raw_lines, .. } = &b.kind {
            let first = b.lines.first as usize;
            let last = b.lines.last as usize;
            let closed = last > first && CodeFence::sig(lines[last].trim()).is_some();
            let interior = if closed {
                &lines[first + 1..last]
            } else {
                &lines[first + 1..=last]
            };
            assert_eq!(
                raw_lines, interior,
                "code block {:?} is not verbatim",
                b.lines
            );
        }
    }

    let ids = pre_order_ids(blocks);
    assert!(
        ids.windows(2).all(|w| w[0] < w[1]),
        "node ids are not strictly increasing in pre-order: {ids:?}"
    );
}

fn pre_order_ids(blocks: &[BlockNode]) -> Vec<NodeId> {
    let mut ids = vec![];
    for b in blocks {
        ids.push(b.id);
        match &b.kind {
            BlockKind::Heading { content, .. } | BlockKind::Paragraph { content } => {
                ids.extend(content.iter().map(|r| r.id));
            }
            BlockKind::List { items, .. } => {
                for item in items {
                    ids.push(item.id);
                    ids.extend(item.content.iter().map(|r| r.id));
                }
            }
            BlockKind::CodeBlock { .. } | BlockKind::Rule | BlockKind::Blank => {}
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineSpan;
    use crate::parsing::render;

    #[test]
    fn accepts_rendered_documents() {
        let src = "# a\n```\nb\n```\n```\nc";
        check(src, &render(src));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rejects_out_of_range_lines() {
        let mut blocks = render("x");
        blocks[0].lines = LineSpan { first: 0, last: 3 };
        check("x", &blocks);
    }

    #[test]
    #[should_panic(expected = "not strictly increasing")]
    fn rejects_reused_ids() {
        let mut blocks = render("x\n\ny");
        blocks[2].id = NodeId(0);
        check("x\n\ny", &blocks);
    }
}
