//! # Incremental conversion
//!
//! Converts the line the user just finished as they type. The host reports
//! every buffer change to [`IncrementalController::on_edit`]; when the change
//! leaves the cursor at the start of a fresh line, the previous line's ending
//! is normalized in place.
//!
//! The controller's own write-back is itself a buffer change, so the host
//! reports it too. A one-shot suppression flag swallows exactly that next
//! event. If the user manages to edit before the host reports the write-back,
//! that user edit is the one ignored.

pub mod host;

pub use host::{EditorHost, LineBuffer, Position, convert_host};

use crate::{
    convert::{normalize_line, protect},
    document::Document,
    format::HardBreakFormat,
    parsing::{blocks::BlockKind, parse_document},
};

/// What [`IncrementalController::on_edit`] did with one change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The event was the echo of our own previous write.
    Suppressed,
    Disabled,
    /// The cursor is not at column 0 of a line after the first.
    NotLineStart,
    EmptyLine,
    /// The previous line is not running prose (code, list, heading, ...).
    NotProse,
    /// The previous line already ends the way it should.
    Unchanged,
    Rewrote { line: usize },
}

#[derive(Debug, Clone)]
pub struct IncrementalController {
    format: HardBreakFormat,
    enabled: bool,
    suppress_next: bool,
}

impl IncrementalController {
    pub fn new(format: HardBreakFormat) -> Self {
        Self {
            format,
            enabled: true,
            suppress_next: false,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn format(&self) -> HardBreakFormat {
        self.format
    }

    pub fn set_format(&mut self, format: HardBreakFormat) {
        self.format = format;
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppress_next
    }

    /// Handles one buffer-change notification.
    pub fn on_edit<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> EditOutcome {
        if std::mem::take(&mut self.suppress_next) {
            log::trace!("ignoring echo of our own edit");
            return EditOutcome::Suppressed;
        }
        if !self.enabled {
            return EditOutcome::Disabled;
        }

        let cursor = host.cursor();
        if cursor.column != 0 || cursor.line == 0 {
            return EditOutcome::NotLineStart;
        }
        let index = cursor.line - 1;
        let Some(previous) = host.line(index) else {
            return EditOutcome::NotLineStart;
        };
        if previous.is_empty() {
            return EditOutcome::EmptyLine;
        }
        if !is_prose_line(&host.text(), index, self.format) {
            log::trace!("line {index}: not inside a paragraph, leaving it");
            return EditOutcome::NotProse;
        }

        let normalized = normalize_line(&previous, self.format);
        if normalized == previous.as_str() {
            return EditOutcome::Unchanged;
        }
        log::trace!("line {index}: {previous:?} -> {normalized:?}");
        self.suppress_next = true;
        host.set_line(index, &normalized);
        EditOutcome::Rewrote { line: index }
    }
}

/// Whether line `index` of `text` sits in a paragraph with an unprotected
/// trailing boundary.
fn is_prose_line(text: &str, index: usize, format: HardBreakFormat) -> bool {
    let doc = Document::new(text);
    let parsed = parse_document(&doc);
    let in_paragraph = parsed
        .innermost_at_line(index)
        .is_some_and(|node| node.kind == BlockKind::Paragraph);
    if !in_paragraph {
        return false;
    }
    let Some(line) = doc.line(index) else {
        return false;
    };
    let protected = protect::resolve(&doc, &parsed, format);
    !protect::protects_offset(&protected, line.content_end())
}
