use xi_rope::Rope;

use super::span::Span;

/// How a line is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Last line of a document without a trailing newline.
    None,
    Lf,
    CrLf,
}

impl LineEnding {
    pub const fn len(self) -> usize {
        match self {
            LineEnding::None => 0,
            LineEnding::Lf => 1,
            LineEnding::CrLf => 2,
        }
    }
}

/// A single physical line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based line index.
    pub index: usize,
    /// Byte span of the whole line, terminator included.
    pub span: Span,
    /// Line content with the terminator stripped.
    pub text: String,
    pub ending: LineEnding,
}

impl Line {
    /// Byte offset immediately before the terminator: the line's break boundary.
    pub fn content_end(&self) -> usize {
        self.span.end - self.ending.len()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during block parsing.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = Line> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(index, raw)| {
        let start = offset;
        offset += raw.len();
        let (text, ending) = if let Some(body) = raw.strip_suffix("\r\n") {
            (body, LineEnding::CrLf)
        } else if let Some(body) = raw.strip_suffix('\n') {
            (body, LineEnding::Lf)
        } else {
            (&raw[..], LineEnding::None)
        };
        Line {
            index,
            span: Span { start, end: offset },
            text: text.to_string(),
            ending,
        }
    })
}
