use crate::{
    convert::ProtectedRange,
    document::Document,
    parsing::{blocks::BlockNode, rope::span::Span},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Top-level nodes cover the whole document, in order, with no gaps
/// - Every node span is line-aligned and agrees with its line range
/// - Children of a container cover the container's span the same way
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document, blocks: &[BlockNode]) {
    check_cover(doc, blocks, Span::new(0, doc.len()));
}

fn check_cover(doc: &Document, nodes: &[BlockNode], outer: Span) {
    let mut cursor = outer.start;
    for b in nodes {
        assert_eq!(
            b.span.start, cursor,
            "gap or overlap before {:?} {:?} (expected start {cursor})",
            b.kind, b.span
        );
        assert!(
            b.start_line <= b.end_line,
            "inverted line range on {:?}: {}..={}",
            b.kind,
            b.start_line,
            b.end_line
        );
        let first = doc.line(b.start_line).expect("start line out of bounds");
        let last = doc.line(b.end_line).expect("end line out of bounds");
        assert_eq!(
            (b.span.start, b.span.end),
            (first.span.start, last.span.end),
            "span of {:?} is not aligned to lines {}..={}",
            b.kind,
            b.start_line,
            b.end_line
        );
        if !b.children.is_empty() {
            check_cover(doc, &b.children, b.span);
        }
        cursor = b.span.end;
    }
    assert_eq!(
        cursor, outer.end,
        "nodes stop at {cursor}, parent ends at {}",
        outer.end
    );
}

/// Asserts protected ranges are non-empty, in bounds, sorted and disjoint.
pub fn check_protected(doc: &Document, ranges: &[ProtectedRange]) {
    let mut prev_end = 0usize;
    for r in ranges {
        assert!(!r.span.is_empty(), "empty protected range {r:?}");
        assert!(r.span.end <= doc.len(), "protected range out of bounds {r:?}");
        assert!(
            r.span.start >= prev_end,
            "protected ranges overlap or are unsorted at {r:?}"
        );
        prev_end = r.span.end;
    }
}
