use crate::{
    convert::{convert_document, convert_range},
    document::Document,
    format::HardBreakFormat,
    parsing::rope::span::Span,
};

/// A cursor location: zero-based line and byte column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The editor-facing surface the controllers drive.
///
/// Line indices must agree with the line structure of [`EditorHost::text`].
/// Lines are handed out without their terminators.
pub trait EditorHost {
    fn cursor(&self) -> Position;
    fn line_count(&self) -> usize;
    fn line(&self, index: usize) -> Option<String>;
    fn set_line(&mut self, index: usize, content: &str);
    fn text(&self) -> String;
    /// Replaces the whole buffer in one edit.
    fn replace_all(&mut self, text: &str);

    /// The selected region as (anchor, head), in either order.
    fn selection(&self) -> Option<(Position, Position)> {
        None
    }
}

/// Runs a batch conversion over the host's buffer, replacing it once if
/// anything changed. Returns the number of rewritten line endings.
///
/// A non-empty selection limits the rewrites to the line breaks inside it;
/// otherwise the whole buffer is converted.
pub fn convert_host<H: EditorHost + ?Sized>(host: &mut H, format: HardBreakFormat) -> usize {
    let doc = Document::new(&host.text());
    let conversion = match selected_span(&doc, host.selection()) {
        Some(range) => convert_range(&doc, range, format),
        None => convert_document(&doc, format),
    };
    if conversion.changed() {
        host.replace_all(&conversion.text());
    }
    conversion.rewrites.len()
}

fn selected_span(doc: &Document, selection: Option<(Position, Position)>) -> Option<Span> {
    let (a, b) = selection?;
    let (from, to) = if (a.line, a.column) <= (b.line, b.column) {
        (a, b)
    } else {
        (b, a)
    };
    let span = Span::new(
        doc.offset_at(from.line, from.column),
        doc.offset_at(to.line, to.column),
    );
    (!span.is_empty()).then_some(span)
}

/// In-memory host with `\n` terminators.
///
/// Every mutation queues one change notification, mirroring an editor that
/// reports its own edits back to listeners. Drain them with
/// [`LineBuffer::take_notification`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: Position,
    selection: Option<(Position, Position)>,
    pending: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
            selection: None,
            pending: 0,
        }
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text`, with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.load(text);
        buffer
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Moves the cursor, clamping it into the buffer and back onto a char
    /// boundary.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = self.clamp(cursor);
    }

    /// Selects from `anchor` to `head` and moves the cursor to `head`.
    pub fn select(&mut self, anchor: Position, head: Position) {
        let anchor = self.clamp(anchor);
        self.cursor = self.clamp(head);
        self.selection = Some((anchor, self.cursor));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        Position::new(line, floor_char_boundary(&self.lines[line], pos.column))
    }

    /// Inserts `s` at the cursor. Newlines are not interpreted; use
    /// [`LineBuffer::press_enter`].
    pub fn type_str(&mut self, s: &str) {
        let Position { line, column } = self.cursor;
        self.lines[line].insert_str(column, s);
        self.cursor.column += s.len();
        self.pending += 1;
    }

    /// Splits the current line at the cursor and moves to the start of the
    /// new line.
    pub fn press_enter(&mut self) {
        let Position { line, column } = self.cursor;
        let rest = self.lines[line].split_off(column);
        self.lines.insert(line + 1, rest);
        self.cursor = Position::new(line + 1, 0);
        self.pending += 1;
    }

    /// Pops one queued change notification.
    pub fn take_notification(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    fn load(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        let last = self.lines.len() - 1;
        self.cursor = Position::new(last, self.lines[last].len());
        self.selection = None;
    }
}

/// The largest char boundary of `s` at or before `column`.
fn floor_char_boundary(s: &str, column: usize) -> usize {
    let mut cut = column.min(s.len());
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}

impl EditorHost for LineBuffer {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<String> {
        self.lines.get(index).cloned()
    }

    fn set_line(&mut self, index: usize, content: &str) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.clear();
        line.push_str(content);
        if self.cursor.line == index {
            self.cursor.column = floor_char_boundary(line, self.cursor.column);
        }
        self.pending += 1;
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn selection(&self) -> Option<(Position, Position)> {
        self.selection
    }

    fn replace_all(&mut self, text: &str) {
        let cursor = self.cursor;
        self.load(text);
        self.set_cursor(cursor);
        self.pending += 1;
    }
}
