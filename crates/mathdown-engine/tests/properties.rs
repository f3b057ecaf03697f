//! Behavioral laws of `render`, checked on concrete inputs.

use mathdown_engine::{
    BlockKind, BlockNode, EquationForm, InlineKind, InlineRun, LineSpan, ListItem, NodeId, render,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn paragraph_runs(blocks: &[BlockNode]) -> Vec<InlineKind> {
    assert_eq!(blocks.len(), 1, "expected one block: {blocks:?}");
    let BlockKind::Paragraph { content } = &blocks[0].kind else {
        panic!("expected paragraph, got {:?}", blocks[0].kind);
    };
    content.iter().map(|r| r.kind.clone()).collect()
}

fn leaf_texts(blocks: &[BlockNode]) -> Vec<String> {
    let mut out = vec![];
    for b in blocks {
        match &b.kind {
            BlockKind::Heading { content, .. } | BlockKind::Paragraph { content } => {
                out.extend(content.iter().map(|r| r.text().to_string()));
            }
            BlockKind::List { items, .. } => {
                for item in items {
                    out.extend(item.content.iter().map(|r| r.text().to_string()));
                }
            }
            BlockKind::CodeBlock { raw_lines, .. } => out.extend(raw_lines.iter().cloned()),
            BlockKind::Rule | BlockKind::Blank => {}
        }
    }
    out
}

#[rstest]
#[case("hello world")]
#[case("two lines\nof prose")]
#[case("3 < 4 & 5 > 2")]
#[case("accents é and ✓ marks")]
#[case("  leading spaces kept")]
fn plain_text_renders_as_itself(#[case] input: &str) {
    let blocks = render(input);
    assert_eq!(
        paragraph_runs(&blocks),
        vec![InlineKind::Text(input.to_string())]
    );
    assert_eq!(blocks[0].plain_text(), input);
}

#[rstest]
#[case("hello\n")]
#[case("hello\r\n")]
fn terminal_newline_is_not_content(#[case] input: &str) {
    let blocks = render(input);
    assert_eq!(blocks, render("hello"));
    assert_eq!(blocks[0].plain_text(), "hello");
}

#[rstest]
#[case("a **b** *c* `d` $x+y$ e", "a b c d x+y e")]
#[case("**a*b*c**", "a*b*c")]
#[case("tail * star and ** pair", "tail * star and ** pair")]
#[case("$$x$$ then $y$", "x then y")]
fn only_recognized_delimiters_are_removed(#[case] input: &str, #[case] expected: &str) {
    let blocks = render(input);
    assert_eq!(blocks[0].plain_text(), expected);
}

#[test]
fn marker_lines_keep_trailing_whitespace() {
    let blocks = render("## Title 
- item  ");
    assert_eq!(blocks[0].plain_text(), "Title ");
    assert_eq!(blocks[1].plain_text(), "item  ");
}

#[test]
fn escaped_punctuation_in_equations_drops_the_backslash() {
    assert_eq!(
        paragraph_runs(&render(r"$50\%$")),
        vec![InlineKind::Equation {
            form: EquationForm::Inline,
            transcoded: "50%".into(),
        }]
    );
}

#[test]
fn fenced_lines_are_verbatim() {
    let interior = ["*a* $b$ # c", "- not a list", "", "---", "  **x**"];
    let input = format!("```md\n{}\n```", interior.join("\n"));
    let blocks = render(&input);
    assert_eq!(
        blocks,
        vec![BlockNode {
            id: NodeId(0),
            lines: LineSpan { first: 0, last: 6 },
            kind: BlockKind::CodeBlock {
                language: Some("md".into()),
                raw_lines: interior.iter().map(|s| s.to_string()).collect(),
            },
        }]
    );
}

#[test]
fn blocks_keep_input_order() {
    let blocks = render("p\n# h\np2\n---\np3\n\np4");
    let firsts: Vec<_> = blocks.iter().map(|b| b.lines.first).collect();
    assert_eq!(firsts, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(
        leaf_texts(&blocks),
        vec!["p", "h", "p2", "p3", "p4"]
    );
}

#[test]
fn bold_wins_over_inner_italic() {
    assert_eq!(
        paragraph_runs(&render("**a*b*c**")),
        vec![InlineKind::Bold("a*b*c".into())]
    );
}

#[test]
fn equation_content_is_not_formatted() {
    assert_eq!(
        paragraph_runs(&render("$x*y$ and *z*")),
        vec![
            InlineKind::Equation {
                form: EquationForm::Inline,
                transcoded: "x*y".into(),
            },
            InlineKind::Text(" and ".into()),
            InlineKind::Italic("z".into()),
        ]
    );
}

#[test]
fn list_folds_split_on_orderedness() {
    let text = |id, s: &str| InlineRun {
        id: NodeId(id),
        kind: InlineKind::Text(s.into()),
    };
    assert_eq!(
        render("- one\n- two\n1. three"),
        vec![
            BlockNode {
                id: NodeId(0),
                lines: LineSpan { first: 0, last: 1 },
                kind: BlockKind::List {
                    ordered: false,
                    items: vec![
                        ListItem {
                            id: NodeId(1),
                            line: 0,
                            label: None,
                            content: vec![text(2, "one")],
                        },
                        ListItem {
                            id: NodeId(3),
                            line: 1,
                            label: None,
                            content: vec![text(4, "two")],
                        },
                    ],
                },
            },
            BlockNode {
                id: NodeId(5),
                lines: LineSpan::single(2),
                kind: BlockKind::List {
                    ordered: true,
                    items: vec![ListItem {
                        id: NodeId(6),
                        line: 2,
                        label: Some("1".into()),
                        content: vec![text(7, "three")],
                    }],
                },
            },
        ]
    );
}

#[test]
fn unterminated_fence_is_one_code_block() {
    let blocks = render("```js\nconsole.log(1)");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].kind,
        BlockKind::CodeBlock {
            language: Some("js".into()),
            raw_lines: vec!["console.log(1)".into()],
        }
    );
}

#[test]
fn unknown_macro_keeps_its_name() {
    assert_eq!(
        paragraph_runs(&render(r"$\frac{1}{2} + \widehat{x}$")),
        vec![InlineKind::Equation {
            form: EquationForm::Inline,
            transcoded: "(1)/(2) + widehat{x}".into(),
        }]
    );
}

#[test]
fn markup_in_input_stays_literal_text() {
    let runs = paragraph_runs(&render("<script>alert(1)</script> *hi*"));
    assert_eq!(
        runs,
        vec![
            InlineKind::Text("<script>alert(1)</script> ".into()),
            InlineKind::Italic("hi".into()),
        ]
    );
}

#[test]
fn engine_never_introduces_markup() {
    let input = "# T\n**b** *i* `c` $\\alpha \\leq \\beta$\n- x\n1. y\n---\n```\nz\n```";
    for leaf in leaf_texts(&render(input)) {
        assert!(!leaf.contains('<') && !leaf.contains('>'), "{leaf:?}");
    }
}

#[test]
fn identical_input_yields_identical_ids() {
    let input = "# a\n- *b*\n\n$c$ `d`";
    assert_eq!(render(input), render(input));
}

#[test]
fn tree_serializes_to_json() {
    let value = serde_json::to_value(render("# T")).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 0,
            "lines": { "first": 0, "last": 0 },
            "kind": {
                "Heading": {
                    "level": "H1",
                    "content": [{ "id": 1, "kind": { "Text": "T" } }]
                }
            }
        }])
    );
}

#[test]
fn unclosed_delimiters_never_pair_across_lines() {
    let input = (0..2_000)
        .map(|i| format!("line {i} has `one tick and **one pair"))
        .collect::<Vec<_>>()
        .join("\n");
    let blocks = render(&input);
    assert_eq!(blocks[0].plain_text(), input);
}
