use std::fmt::Write;

use crate::document::{BlockKind, BlockNode, InlineKind, InlineRun, LineSpan};

/// Prints blocks one per line, with their runs and items indented below.
///
/// ```text
/// Heading(1) lines 0..0 #0
///   Text "Title" #1
/// CodeBlock(rust) lines 1..3 #2
///   | fn main() {}
/// ```
pub fn outline(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        let head = match &b.kind {
            BlockKind::Heading { level, .. } => format!("Heading({})", level.depth()),
            BlockKind::Paragraph { .. } => "Paragraph".to_string(),
            BlockKind::CodeBlock { language, .. } => {
                format!("CodeBlock({})", language.as_deref().unwrap_or("-"))
            }
            BlockKind::List { ordered: true, .. } => "List(ordered)".to_string(),
            BlockKind::List { ordered: false, .. } => "List(bullet)".to_string(),
            BlockKind::Rule => "Rule".to_string(),
            BlockKind::Blank => "Blank".to_string(),
        };
        let _ = writeln!(out, "{head} {} #{}", lines(b.lines), b.id.0);

        match &b.kind {
            BlockKind::Heading { content, .. } | BlockKind::Paragraph { content } => {
                runs(&mut out, content, 1);
            }
            BlockKind::CodeBlock { raw_lines, .. } => {
                for l in raw_lines {
                    let _ = writeln!(out, "  | {l}");
                }
            }
            BlockKind::List { items, .. } => {
                for item in items {
                    let label = item.label.as_deref().unwrap_or("-");
                    let _ = writeln!(out, "  Item {label:?} line {} #{}", item.line, item.id.0);
                    runs(&mut out, &item.content, 2);
                }
            }
            BlockKind::Rule | BlockKind::Blank => {}
        }
    }
    out
}

fn lines(span: LineSpan) -> String {
    format!("lines {}..{}", span.first, span.last)
}

fn runs(out: &mut String, runs: &[InlineRun], depth: usize) {
    let indent = "  ".repeat(depth);
    for r in runs {
        let kind = match &r.kind {
            InlineKind::Text(_) => "Text".to_string(),
            InlineKind::Bold(_) => "Bold".to_string(),
            InlineKind::Italic(_) => "Italic".to_string(),
            InlineKind::Code(_) => "Code".to_string(),
            InlineKind::Equation { form, .. } => format!("Equation({form:?})"),
        };
        let _ = writeln!(out, "{indent}{kind} {:?} #{}", r.text(), r.id.0);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::render;

    #[test]
    fn outlines_every_node_kind() {
        let blocks = render("# T\n- a\n\n```x\ny\n```\n---");
        assert_eq!(
            outline(&blocks),
            "Heading(1) lines 0..0 #0\n\
             \x20 Text \"T\" #1\n\
             List(bullet) lines 1..1 #2\n\
             \x20 Item \"-\" line 1 #3\n\
             \x20   Text \"a\" #4\n\
             Blank lines 2..2 #5\n\
             CodeBlock(x) lines 3..5 #6\n\
             \x20 | y\n\
             Rule lines 6..6 #7\n"
        );
    }
}
