use thiserror::Error;
use xi_rope::Rope;

use crate::parsing::rope::{Line, Span, lines_with_spans, slice_to_string};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// An immutable snapshot of a Markdown buffer.
///
/// The rope is the single source of truth; `lines` is derived once on
/// construction so parsing, range resolution and rewriting all see the same
/// offsets. Converting never mutates a `Document`: it produces a new one.
#[derive(Clone)]
pub struct Document {
    rope: Rope,
    lines: Vec<Line>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self::from_rope(Rope::from(text))
    }

    /// Create a document from raw bytes, rejecting invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(text))
    }

    pub fn from_rope(rope: Rope) -> Self {
        let lines = lines_with_spans(&rope).collect();
        Self { rope, lines }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Index of the line containing byte `offset`.
    ///
    /// Offsets at or past the end of the document map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.lines
            .partition_point(|l| l.span.end <= offset)
            .min(self.lines.len().saturating_sub(1))
    }

    /// Byte offset of `column` on line `line`, clamped to the line's content.
    /// Lines past the end map to the end of the document.
    pub fn offset_at(&self, line: usize, column: usize) -> usize {
        match self.lines.get(line) {
            Some(l) => l.span.start + column.min(l.text.len()),
            None => self.len(),
        }
    }

    /// Span of lines `first..=last`, terminator of `last` included. Indices
    /// past the end are clamped.
    pub fn lines_span(&self, first: usize, last: usize) -> Span {
        let start = self.lines.get(first).map_or(self.len(), |l| l.span.start);
        let end = self.lines.get(last).map_or(self.len(), |l| l.span.end);
        Span::new(start, end.max(start))
    }

    pub fn slice(&self, sp: Span) -> String {
        slice_to_string(&self.rope, sp)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.len())
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_rejects_invalid_utf8() {
        let err = Document::from_bytes(&[0x66, 0xff, 0x0a]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidUtf8(_)));
    }

    #[test]
    fn round_trips_text() {
        let text = "# Title\r\n\r\nbody\n";
        assert_eq!(Document::new(text).text(), text);
    }

    #[test]
    fn line_of_offsets() {
        let doc = Document::new("ab\ncd\nef");
        assert_eq!(doc.line_of(0), 0);
        assert_eq!(doc.line_of(2), 0);
        assert_eq!(doc.line_of(3), 1);
        assert_eq!(doc.line_of(7), 2);
        assert_eq!(doc.line_of(100), 2);
    }

    #[test]
    fn offsets_from_positions() {
        let doc = Document::new("ab\r\ncd\n");
        assert_eq!(doc.offset_at(0, 1), 1);
        assert_eq!(doc.offset_at(0, 10), 2);
        assert_eq!(doc.offset_at(1, 0), 4);
        assert_eq!(doc.offset_at(5, 0), 7);
    }

    #[test]
    fn spans_of_line_ranges() {
        let doc = Document::new("ab\ncd\nef");
        assert_eq!(doc.lines_span(0, 0), Span::new(0, 3));
        assert_eq!(doc.lines_span(1, 2), Span::new(3, 8));
        assert_eq!(doc.lines_span(1, 9), Span::new(3, 8));
        assert_eq!(doc.lines_span(7, 9), Span::new(8, 8));
    }

    #[test]
    fn empty_document_has_no_lines() {
        let doc = Document::new("");
        assert!(doc.is_empty());
        assert!(doc.lines().is_empty());
        assert_eq!(doc.line_of(0), 0);
    }
}
