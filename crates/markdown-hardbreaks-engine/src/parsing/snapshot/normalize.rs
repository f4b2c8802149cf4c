use std::fmt::Write;

use crate::{
    document::Document,
    parsing::{
        ParsedDoc,
        blocks::{BlockKind, BlockNode},
        rope::slice::preview,
    },
};

const PREVIEW_LEN: usize = 40;

/// Renders the block forest as an outline, one node per line:
///
/// ```text
/// Blockquote 0..=1 "> a\n> b\n"
///   Paragraph 0..=1 "> a\n> b\n"
/// ```
pub fn normalize(doc: &Document, blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        write_node(&mut out, doc, b, 0);
    }
    out
}

/// Convenience wrapper over [`normalize`] for a whole parse.
pub fn outline(doc: &Document, parsed: &ParsedDoc) -> String {
    normalize(doc, &parsed.blocks)
}

fn write_node(out: &mut String, doc: &Document, b: &BlockNode, depth: usize) {
    let kind = match b.kind {
        BlockKind::Frontmatter => "Frontmatter",
        BlockKind::CodeBlock { fenced: true } => "CodeBlock(fenced)",
        BlockKind::CodeBlock { fenced: false } => "CodeBlock(indented)",
        BlockKind::Blockquote => "Blockquote",
        BlockKind::Paragraph => "Paragraph",
        BlockKind::Other => "Other",
    };
    let text = preview(doc.rope(), b.span, PREVIEW_LEN);
    let _ = writeln!(
        out,
        "{:indent$}{kind} {}..={} {text:?}",
        "",
        b.start_line,
        b.end_line,
        indent = depth * 2
    );
    for child in &b.children {
        write_node(out, doc, child, depth + 1);
    }
}
