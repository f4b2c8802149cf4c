use crate::parsing::rope::Line;

/// Result of looking for a frontmatter block at the top of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterScan {
    /// The document does not open with frontmatter.
    Absent,
    /// Frontmatter spans lines `0..=end_line`, closing delimiter included.
    Closed { end_line: usize },
    /// An opening delimiter followed by content that never closes.
    Unterminated,
}

/// Frontmatter block syntax: `---` on the first line, metadata, `---`.
pub struct Frontmatter;

impl Frontmatter {
    pub const DELIMITER: &'static str = "---";

    pub fn is_delimiter(line: &str) -> bool {
        line.trim_end() == Self::DELIMITER
    }

    /// Scans the leading lines of a document.
    ///
    /// A `---` first line followed by a blank line (or nothing) is a thematic
    /// break, not frontmatter.
    pub fn scan(lines: &[Line]) -> FrontmatterScan {
        let Some(first) = lines.first() else {
            return FrontmatterScan::Absent;
        };
        if !Self::is_delimiter(&first.text) {
            return FrontmatterScan::Absent;
        }
        match lines.get(1) {
            None => return FrontmatterScan::Absent,
            Some(l) if l.text.trim().is_empty() => return FrontmatterScan::Absent,
            Some(_) => {}
        }
        lines[1..]
            .iter()
            .find(|l| Self::is_delimiter(&l.text))
            .map_or(FrontmatterScan::Unterminated, |l| FrontmatterScan::Closed {
                end_line: l.index,
            })
    }
}
