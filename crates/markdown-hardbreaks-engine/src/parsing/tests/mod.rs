//! Parser tests over whole documents: outline snapshots plus the structural
//! invariants every parse must satisfy.

use insta::assert_snapshot;

use crate::{
    document::Document,
    parsing::{blocks::BlockKind, parse_document, snapshot},
};

fn outline(text: &str) -> String {
    let doc = Document::new(text);
    let parsed = parse_document(&doc);
    snapshot::invariants(&doc, &parsed.blocks);
    snapshot::outline(&doc, &parsed)
}

#[test]
fn simple_paragraphs() {
    assert_snapshot!(outline("Line one\nLine two\n\nSecond paragraph\n"), @r#"
    Paragraph 0..=1 "Line one\nLine two\n"
    Other 2..=2 "\n"
    Paragraph 3..=3 "Second paragraph\n"
    "#);
}

#[test]
fn fenced_code_between_paragraphs() {
    assert_snapshot!(outline("Text\n\n```\ncode\n```\n\nMore\n"), @r#"
    Paragraph 0..=0 "Text\n"
    Other 1..=1 "\n"
    CodeBlock(fenced) 2..=4 "```\ncode\n```\n"
    Other 5..=5 "\n"
    Paragraph 6..=6 "More\n"
    "#);
}

#[test]
fn nested_quote_with_fence() {
    assert_snapshot!(outline("> quoted\n> text\n>\n> ```\n> x\n> ```\n"), @r#"
    Blockquote 0..=5 "> quoted\n> text\n>\n> ```\n> x\n> ```\n"
      Paragraph 0..=1 "> quoted\n> text\n"
      Other 2..=2 ">\n"
      CodeBlock(fenced) 3..=5 "> ```\n> x\n> ```\n"
    "#);
}

#[test]
fn frontmatter_then_body() {
    assert_snapshot!(outline("---\ntitle: x\n---\nbody\ntext\n"), @r#"
    Frontmatter 0..=2 "---\ntitle: x\n---\n"
    Paragraph 3..=4 "body\ntext\n"
    "#);
}

#[test]
fn unterminated_frontmatter_is_opaque() {
    assert_snapshot!(outline("---\ntitle: x\nbody\n"), @r#"Other 0..=2 "---\ntitle: x\nbody\n""#);
}

#[test]
fn crlf_lines_align() {
    assert_snapshot!(outline("a\r\nb\r\n\r\nc"), @r#"
    Paragraph 0..=1 "a\r\nb\r\n"
    Other 2..=2 "\r\n"
    Paragraph 3..=3 "c"
    "#);
}

#[test]
fn lists_and_headings_are_structure() {
    let doc = Document::new("# Title\n- one\n- two\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
    let parsed = parse_document(&doc);
    snapshot::invariants(&doc, &parsed.blocks);
    assert!(parsed.paragraphs().next().is_none());
}

#[test]
fn innermost_node_by_line() {
    let doc = Document::new("intro\n\n> quoted\n> more\n");
    let parsed = parse_document(&doc);
    assert_eq!(
        parsed.innermost_at_line(0).map(|n| n.kind),
        Some(BlockKind::Paragraph)
    );
    assert_eq!(
        parsed.innermost_at_line(1).map(|n| n.kind),
        Some(BlockKind::Other)
    );
    let quoted = parsed.innermost_at_line(3);
    assert_eq!(quoted.map(|n| n.kind), Some(BlockKind::Paragraph));
    assert_eq!(quoted.map(|n| n.start_line), Some(2));
    assert!(parsed.innermost_at_line(9).is_none());
}

#[test]
fn iter_is_depth_first() {
    let doc = Document::new("> a\n\nb\n");
    let kinds: Vec<_> = parse_document(&doc).iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Blockquote,
            BlockKind::Paragraph,
            BlockKind::Other,
            BlockKind::Paragraph,
        ]
    );
}

#[test]
fn every_byte_is_covered() {
    let inputs = [
        "",
        "\n\n\n",
        "no newline at end",
        "    indented code\n\ntext\n",
        "```\nnever closed\n",
        "> > deep\n> > quote\n",
        "<div>\nhtml\n</div>\n",
        "***\n",
        "---\n\nnot frontmatter\n",
    ];
    for input in inputs {
        let doc = Document::new(input);
        let parsed = parse_document(&doc);
        snapshot::invariants(&doc, &parsed.blocks);
    }
}
