use crate::format::HardBreakFormat;

/// What a line's trailing boundary currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// Empty or whitespace-only.
    Blank,
    /// Already ends in a hard-break marker of the given notation.
    AlreadyHard(HardBreakFormat),
    /// Ends in an even run of backslashes: literal backslashes, no break.
    Escaped,
    /// A plain soft break.
    Candidate,
}

impl LineBreak {
    /// Whether the line already carries a break in `format`.
    pub fn is_hard_in(self, format: HardBreakFormat) -> bool {
        self == LineBreak::AlreadyHard(format)
    }
}

/// Classifies the trailing boundary of one line (terminator excluded).
///
/// Pure and context free: it never looks at neighbouring lines or at the
/// block the line belongs to.
pub fn classify(line: &str) -> LineBreak {
    if line.trim().is_empty() {
        return LineBreak::Blank;
    }
    if trailing_whitespace(line) >= 2 {
        return LineBreak::AlreadyHard(HardBreakFormat::DoubleSpace);
    }
    match trailing_backslashes(line) {
        0 => LineBreak::Candidate,
        n if n % 2 == 1 => LineBreak::AlreadyHard(HardBreakFormat::Backslash),
        _ => LineBreak::Escaped,
    }
}

/// Length of the maximal run of spaces and tabs ending the line.
pub fn trailing_whitespace(line: &str) -> usize {
    line.len() - line.trim_end_matches([' ', '\t']).len()
}

/// Length of the maximal run of backslashes ending the line.
pub fn trailing_backslashes(line: &str) -> usize {
    line.bytes().rev().take_while(|&b| b == b'\\').count()
}
