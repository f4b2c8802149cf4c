use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Tag};

use crate::{document::Document, parsing::rope::span::Span};

use super::types::{BlockKind, BlockNode};

/// Options handed to pulldown-cmark. GFM constructs are enabled so that
/// tables, task lists and footnotes are never mistaken for paragraphs.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

#[derive(Debug)]
struct OpenBlock {
    kind: BlockKind,
    range: Range<usize>,
    children: Vec<BlockNode>,
}

/// Folds pulldown-cmark offset events into a line-aligned block forest.
///
/// Only blocks at the top level or directly inside blockquotes become nodes.
/// Anything opened inside a leaf (inline markup, list item contents, table
/// cells) is swallowed by that leaf.
pub struct BlockBuilder<'d> {
    doc: &'d Document,
    stack: Vec<OpenBlock>,
    /// Depth of tags opened inside the current leaf.
    nested: usize,
    out: Vec<BlockNode>,
}

impl<'d> BlockBuilder<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self {
            doc,
            stack: vec![],
            nested: 0,
            out: vec![],
        }
    }

    /// Records a frontmatter block covering lines `0..=end_line`.
    pub fn push_frontmatter(&mut self, end_line: usize) {
        let Some(last) = self.doc.line(end_line) else {
            return;
        };
        self.out.push(BlockNode::leaf(
            BlockKind::Frontmatter,
            Span::new(0, last.span.end),
            0,
            end_line,
        ));
    }

    /// Feeds one event with its absolute byte range.
    pub fn push(&mut self, event: &Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                if self.nested > 0 || self.in_leaf() {
                    self.nested += 1;
                    return;
                }
                self.stack.push(OpenBlock {
                    kind: kind_of(tag),
                    range,
                    children: vec![],
                });
            }
            Event::End(_) => {
                if self.nested > 0 {
                    self.nested -= 1;
                    return;
                }
                if let Some(open) = self.stack.pop() {
                    self.close(open);
                }
            }
            Event::Rule if self.nested == 0 && !self.in_leaf() => {
                if let Some(node) = self.node_for(BlockKind::Other, range) {
                    self.attach(node);
                }
            }
            _ => {}
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush for anything the event stream left open
        while let Some(open) = self.stack.pop() {
            log::debug!("closing unbalanced {:?} block at EOF", open.kind);
            self.close(open);
        }
        let whole = Span::new(0, self.doc.len());
        fill_gaps(self.doc, std::mem::take(&mut self.out), whole)
    }

    fn in_leaf(&self) -> bool {
        self.stack.last().is_some_and(|b| !b.kind.is_container())
    }

    fn close(&mut self, open: OpenBlock) {
        let Some(mut node) = self.node_for(open.kind, open.range) else {
            return;
        };
        if node.kind.is_container() {
            node.children = fill_gaps(self.doc, open.children, node.span);
        }
        self.attach(node);
    }

    fn attach(&mut self, mut node: BlockNode) {
        let siblings = match self.stack.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.out,
        };
        // Two blocks never share a line; clamp if the parser reports one that does.
        if let Some(prev) = siblings.last()
            && prev.span.end > node.span.start
        {
            if prev.span.end >= node.span.end {
                return;
            }
            node.span.start = prev.span.end;
            node.start_line = prev.end_line + 1;
        }
        siblings.push(node);
    }

    fn node_for(&self, kind: BlockKind, range: Range<usize>) -> Option<BlockNode> {
        line_aligned(self.doc, range).map(|(span, start_line, end_line)| {
            BlockNode::leaf(kind, span, start_line, end_line)
        })
    }
}

fn kind_of(tag: &Tag<'_>) -> BlockKind {
    match tag {
        Tag::Paragraph => BlockKind::Paragraph,
        Tag::BlockQuote(_) => BlockKind::Blockquote,
        Tag::CodeBlock(kind) => BlockKind::CodeBlock {
            fenced: matches!(kind, CodeBlockKind::Fenced(_)),
        },
        Tag::MetadataBlock(_) => BlockKind::Frontmatter,
        _ => BlockKind::Other,
    }
}

/// Widens a byte range to whole lines: from the start of the line holding
/// `range.start` to the end (terminator included) of the line holding its
/// last byte.
fn line_aligned(doc: &Document, range: Range<usize>) -> Option<(Span, usize, usize)> {
    if doc.lines().is_empty() {
        return None;
    }
    let start_line = doc.line_of(range.start);
    let last_byte = range.end.saturating_sub(1).max(range.start);
    let end_line = doc.line_of(last_byte).max(start_line);
    let span = Span::new(
        doc.lines()[start_line].span.start,
        doc.lines()[end_line].span.end,
    );
    Some((span, start_line, end_line))
}

/// Fills the holes between `children` (and before/after them) inside `outer`
/// with `Other` nodes so every byte belongs to exactly one node.
fn fill_gaps(doc: &Document, children: Vec<BlockNode>, outer: Span) -> Vec<BlockNode> {
    let mut filled = Vec::with_capacity(children.len() * 2 + 1);
    let mut cursor = outer.start;
    for child in children {
        if child.span.start > cursor {
            filled.extend(gap_node(doc, Span::new(cursor, child.span.start)));
        }
        cursor = cursor.max(child.span.end);
        filled.push(child);
    }
    if cursor < outer.end {
        filled.extend(gap_node(doc, Span::new(cursor, outer.end)));
    }
    filled
}

fn gap_node(doc: &Document, gap: Span) -> Option<BlockNode> {
    if gap.is_empty() {
        return None;
    }
    let start_line = doc.line_of(gap.start);
    let end_line = doc.line_of(gap.end - 1);
    Some(BlockNode::leaf(BlockKind::Other, gap, start_line, end_line))
}
