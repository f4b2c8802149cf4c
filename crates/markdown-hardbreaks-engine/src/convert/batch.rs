use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::{
    document::Document,
    format::HardBreakFormat,
    parsing::{ParsedDoc, parse_document, rope::span::Span},
};

use super::{
    protect::{ProtectedRange, protects_any, protects_offset, resolve},
    rewrite::plan_line,
};

/// A soft break that will be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakCandidate {
    /// Zero-based line index.
    pub line: usize,
    /// Byte offset immediately before the line terminator.
    pub offset: usize,
}

/// One planned edit: `replaced` (the old marker, possibly empty) becomes `marker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub candidate: BreakCandidate,
    pub replaced: Span,
    pub marker: &'static str,
}

/// Result of a batch conversion.
pub struct Conversion {
    pub format: HardBreakFormat,
    /// The converted document.
    pub document: Document,
    /// Edits in document order.
    pub rewrites: Vec<Rewrite>,
    /// The whole conversion as a single edit against the input buffer.
    pub delta: Delta<RopeInfo>,
}

impl Conversion {
    pub fn changed(&self) -> bool {
        !self.rewrites.is_empty()
    }

    pub fn text(&self) -> String {
        self.document.text()
    }
}

/// Plans the rewrites for every soft break inside multi-line paragraphs.
///
/// The last line of each paragraph is its natural paragraph break and is never
/// touched. Boundaries whose offset or old marker touch a protected range are
/// skipped.
pub fn plan(
    doc: &Document,
    parsed: &ParsedDoc,
    protected: &[ProtectedRange],
    format: HardBreakFormat,
) -> Vec<Rewrite> {
    let mut out = vec![];
    for node in parsed.paragraphs() {
        for index in node.start_line..node.end_line {
            let Some(line) = doc.line(index) else {
                continue;
            };
            let Some(rw) = plan_line(&line.text, format) else {
                continue;
            };
            let offset = line.content_end();
            let replaced = Span::new(line.span.start + rw.keep, offset);
            if protects_offset(protected, offset) || protects_any(protected, replaced) {
                log::trace!("line {index}: boundary is protected");
                continue;
            }
            out.push(Rewrite {
                candidate: BreakCandidate {
                    line: index,
                    offset,
                },
                replaced,
                marker: rw.marker,
            });
        }
    }
    out
}

/// The soft breaks a conversion would rewrite, without rewriting anything.
pub fn find_candidates(doc: &Document, format: HardBreakFormat) -> Vec<BreakCandidate> {
    let parsed = parse_document(doc);
    let protected = resolve(doc, &parsed, format);
    plan(doc, &parsed, &protected, format)
        .into_iter()
        .map(|rw| rw.candidate)
        .collect()
}

/// Converts every qualifying soft break in `doc` to a hard break in `format`.
///
/// Bytes outside the rewritten line endings are copied verbatim, and the
/// edits are compiled into one delta so a host can apply (and undo) the whole
/// conversion as a single replacement.
pub fn convert_document(doc: &Document, format: HardBreakFormat) -> Conversion {
    convert_within(doc, None, format)
}

/// Converts only the boundaries whose terminator starts inside `range`.
///
/// The whole document is still parsed, so a range that begins mid-paragraph
/// or inside a code fence sees the same structure a full conversion would.
/// A range ending right before a line terminator leaves that line alone.
pub fn convert_range(doc: &Document, range: Span, format: HardBreakFormat) -> Conversion {
    convert_within(doc, Some(range), format)
}

fn convert_within(doc: &Document, range: Option<Span>, format: HardBreakFormat) -> Conversion {
    let parsed = parse_document(doc);
    let protected = resolve(doc, &parsed, format);
    let mut rewrites = plan(doc, &parsed, &protected, format);
    if let Some(range) = range {
        rewrites.retain(|rw| range.contains(rw.candidate.offset));
        log::trace!("{} rewrites inside {range:?}", rewrites.len());
    }

    let mut builder = Builder::new(doc.len());
    for rw in &rewrites {
        builder.replace(rw.replaced.start..rw.replaced.end, Rope::from(rw.marker));
    }
    let delta = builder.build();
    let document = Document::from_rope(delta.apply(doc.rope()));

    log::debug!(
        "converted {} soft breaks to {format} ({} protected ranges)",
        rewrites.len(),
        protected.len()
    );

    Conversion {
        format,
        document,
        rewrites,
        delta,
    }
}

/// Text-in, text-out convenience over [`convert_document`].
pub fn convert_text(text: &str, format: HardBreakFormat) -> String {
    convert_document(&Document::new(text), format).text()
}
