use crate::{
    document::Document,
    format::HardBreakFormat,
    parsing::{
        ParsedDoc,
        blocks::{BlockKind, BlockNode, kinds::BlockQuote},
        inline::code_spans,
        rope::span::Span,
    },
};

use super::classify::{LineBreak, classify};

/// Why a range must be copied verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    Frontmatter,
    CodeBlock,
    CodeSpan,
    /// The configured marker at the start of a line that follows a hard break.
    LeadingMarker,
    /// Headings, lists, tables, HTML and other non-prose blocks.
    Structure,
}

/// A half-open byte interval that is never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedRange {
    pub span: Span,
    pub reason: Protection,
}

/// Computes the protected ranges of a parsed document.
///
/// The result is sorted by start offset and pairwise disjoint; overlapping
/// ranges (a leading marker inside a multi-line code span) are merged and keep
/// the reason of the earlier one.
pub fn resolve(doc: &Document, parsed: &ParsedDoc, format: HardBreakFormat) -> Vec<ProtectedRange> {
    let mut ranges = vec![];
    for node in parsed.iter() {
        let reason = match node.kind {
            BlockKind::Frontmatter => Protection::Frontmatter,
            BlockKind::CodeBlock { .. } => Protection::CodeBlock,
            BlockKind::Other => Protection::Structure,
            BlockKind::Paragraph => {
                protect_paragraph(doc, node, format, &mut ranges);
                continue;
            }
            BlockKind::Blockquote => continue,
        };
        ranges.push(ProtectedRange {
            span: node.span,
            reason,
        });
    }
    coalesce(ranges)
}

fn protect_paragraph(
    doc: &Document,
    node: &BlockNode,
    format: HardBreakFormat,
    out: &mut Vec<ProtectedRange>,
) {
    let text = doc.slice(node.span);
    out.extend(code_spans(node.span.start, &text).into_iter().map(|span| {
        ProtectedRange {
            span,
            reason: Protection::CodeSpan,
        }
    }));

    let literal = format.literal();
    for index in node.start_line + 1..=node.end_line {
        let (Some(prev), Some(line)) = (doc.line(index - 1), doc.line(index)) else {
            continue;
        };
        if !matches!(classify(&prev.text), LineBreak::AlreadyHard(_)) {
            continue;
        }
        let (_, prefix) = BlockQuote::strip_prefixes(&line.text);
        if line.text[prefix..].starts_with(literal) {
            let start = line.span.start + prefix;
            out.push(ProtectedRange {
                span: Span::new(start, start + literal.len()),
                reason: Protection::LeadingMarker,
            });
        }
    }
}

fn coalesce(mut ranges: Vec<ProtectedRange>) -> Vec<ProtectedRange> {
    ranges.retain(|r| !r.span.is_empty());
    ranges.sort_by_key(|r| (r.span.start, r.span.end));
    let mut out: Vec<ProtectedRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match out.last_mut() {
            Some(last) if last.span.end > r.span.start => {
                last.span.end = last.span.end.max(r.span.end);
            }
            _ => out.push(r),
        }
    }
    out
}

/// Whether `offset` falls inside any range.
pub fn protects_offset(ranges: &[ProtectedRange], offset: usize) -> bool {
    let idx = ranges.partition_point(|r| r.span.end <= offset);
    ranges.get(idx).is_some_and(|r| r.span.contains(offset))
}

/// Whether `span` shares a byte with any range. Empty spans never do.
pub fn protects_any(ranges: &[ProtectedRange], span: Span) -> bool {
    let idx = ranges.partition_point(|r| r.span.end <= span.start);
    ranges.get(idx).is_some_and(|r| r.span.overlaps(span))
}
