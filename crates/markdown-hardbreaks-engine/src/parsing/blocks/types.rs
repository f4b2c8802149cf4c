use crate::parsing::rope::span::Span;

/// The kind of a block node.
///
/// Only the distinctions that matter for line break eligibility are kept:
/// everything that is neither prose nor raw text collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Leading `---` delimited metadata.
    Frontmatter,
    /// A fenced (``` or ~~~) or indented code block.
    CodeBlock {
        /// Whether the block was fenced rather than indented.
        fenced: bool,
    },
    /// A blockquote container; its children are the quoted blocks.
    Blockquote,
    /// Running prose, at top level or inside a blockquote.
    Paragraph,
    /// Headings, lists, tables, thematic breaks, HTML, blank-line gaps.
    Other,
}

impl BlockKind {
    pub fn is_container(self) -> bool {
        matches!(self, BlockKind::Blockquote)
    }
}

/// A parsed block node with its line range and byte span.
///
/// Spans are line-aligned: `span.start` is the start of `start_line` and
/// `span.end` is the end of `end_line`, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters and prefixes.
    pub span: Span,
    /// First line of the block (zero-based).
    pub start_line: usize,
    /// Last line of the block, inclusive.
    pub end_line: usize,
    /// Child blocks. Only blockquotes have children; they cover the
    /// blockquote's span with no gaps.
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    pub fn leaf(kind: BlockKind, span: Span, start_line: usize, end_line: usize) -> Self {
        Self {
            kind,
            span,
            start_line,
            end_line,
            children: vec![],
        }
    }

    pub fn line_count(&self) -> usize {
        self.end_line + 1 - self.start_line
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}
