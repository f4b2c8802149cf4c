pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use pulldown_cmark::Parser;

use crate::document::Document;
use blocks::{
    BlockBuilder, BlockKind, BlockNode, markdown_options,
    kinds::{Frontmatter, FrontmatterScan},
};

/// The block forest of one document, rebuilt on every parse.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// All nodes, depth first, in document order.
    pub fn iter(&self) -> Walk<'_> {
        Walk {
            stack: self.blocks.iter().rev().collect(),
        }
    }

    /// Paragraph nodes, top level and inside blockquotes.
    pub fn paragraphs(&self) -> impl Iterator<Item = &BlockNode> {
        self.iter().filter(|n| n.kind == BlockKind::Paragraph)
    }

    /// The innermost node containing `line`.
    pub fn innermost_at_line(&self, line: usize) -> Option<&BlockNode> {
        let mut nodes = &self.blocks;
        let mut found = None;
        while let Some(node) = nodes.iter().find(|n| n.contains_line(line)) {
            found = Some(node);
            nodes = &node.children;
        }
        found
    }
}

/// Depth-first iterator over a block forest.
pub struct Walk<'a> {
    stack: Vec<&'a BlockNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a BlockNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Parses a document into its block forest. Never fails: text that cannot be
/// classified ends up in `Other` nodes, which are never rewritten.
pub fn parse_document(doc: &Document) -> ParsedDoc {
    let mut builder = BlockBuilder::new(doc);

    let body_start = match Frontmatter::scan(doc.lines()) {
        FrontmatterScan::Absent => Some(0),
        FrontmatterScan::Closed { end_line } => {
            builder.push_frontmatter(end_line);
            doc.line(end_line).map(|l| l.span.end)
        }
        FrontmatterScan::Unterminated => {
            log::debug!("unterminated frontmatter; treating document as opaque");
            None
        }
    };

    if let Some(body_start) = body_start {
        let text = doc.text();
        let body = &text[body_start..];
        for (event, range) in Parser::new_ext(body, markdown_options()).into_offset_iter() {
            builder.push(&event, range.start + body_start..range.end + body_start);
        }
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
