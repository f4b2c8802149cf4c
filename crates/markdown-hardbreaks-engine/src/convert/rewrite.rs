use std::borrow::Cow;

use crate::{format::HardBreakFormat, parsing::blocks::kinds::BlockQuote};

use super::classify::{LineBreak, classify, trailing_backslashes};

/// How one line's ending changes: keep `keep` bytes of content, then append
/// `marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRewrite {
    pub keep: usize,
    pub marker: &'static str,
}

/// Removes an existing break marker: a trailing whitespace run, or one
/// unescaped trailing backslash together with the whitespace before it.
///
/// Escaped backslash pairs are content and are kept.
pub fn strip_marker(line: &str) -> &str {
    let trimmed = line.trim_end_matches([' ', '\t']);
    if trimmed.len() != line.len() {
        return trimmed;
    }
    if trailing_backslashes(line) % 2 == 1 {
        return line[..line.len() - 1].trim_end_matches([' ', '\t']);
    }
    line
}

/// The marker to append after `body` for `format`.
///
/// A body ending in an odd run of literal backslashes would swallow a bare
/// backslash marker into an escape pair, so that case gets a separating space.
fn marker_for(body: &str, format: HardBreakFormat) -> &'static str {
    match format {
        HardBreakFormat::DoubleSpace => "  ",
        HardBreakFormat::Backslash if trailing_backslashes(body) % 2 == 1 => " \\",
        HardBreakFormat::Backslash => "\\",
    }
}

/// Decides whether and how to rewrite a line's ending.
///
/// Returns `None` when the line is blank, already ends in `format`, or would
/// become blank once its old marker is stripped (a line holding nothing but a
/// marker, optionally behind blockquote prefixes). Rewriting that last case
/// would turn one paragraph into two.
pub fn plan_line(line: &str, format: HardBreakFormat) -> Option<LineRewrite> {
    match classify(line) {
        LineBreak::Blank => return None,
        c if c.is_hard_in(format) => return None,
        LineBreak::AlreadyHard(_) | LineBreak::Escaped | LineBreak::Candidate => {}
    }
    let body = strip_marker(line);
    if BlockQuote::body(body).trim().is_empty() {
        return None;
    }
    Some(LineRewrite {
        keep: body.len(),
        marker: marker_for(body, format),
    })
}

/// Normalizes a single line in isolation, with no structural context.
///
/// Returns the input borrowed when nothing changes; an owned result always
/// differs from the input.
pub fn normalize_line(line: &str, format: HardBreakFormat) -> Cow<'_, str> {
    match plan_line(line, format) {
        None => Cow::Borrowed(line),
        Some(rw) => {
            let mut out = String::with_capacity(rw.keep + rw.marker.len());
            out.push_str(&line[..rw.keep]);
            out.push_str(rw.marker);
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::format::HardBreakFormat::{Backslash, DoubleSpace};

    #[rstest]
    #[case("text", "text")]
    #[case("text ", "text")]
    #[case("text   ", "text")]
    #[case(r"text\", "text")]
    #[case(r"text \", "text")]
    #[case(r"text\\", r"text\\")]
    #[case(r"text\\\", r"text\\")]
    #[case(r"text\  ", r"text\")]
    fn strips_existing_markers(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(strip_marker(line), expected);
    }

    #[rstest]
    #[case("Hello there", DoubleSpace, "Hello there  ")]
    #[case("Hello there", Backslash, r"Hello there\")]
    #[case("trailing ", DoubleSpace, "trailing  ")]
    #[case(r"was slash\", DoubleSpace, "was slash  ")]
    #[case("was spaces  ", Backslash, r"was spaces\")]
    #[case(r"escaped\\", DoubleSpace, r"escaped\\  ")]
    #[case(r"escaped\\", Backslash, r"escaped\\\")]
    #[case(r"literal\  ", Backslash, r"literal\ \")]
    #[case(r"literal\ ", Backslash, r"literal\ \")]
    #[case("> quoted", DoubleSpace, "> quoted  ")]
    fn rewrites_to_configured_format(
        #[case] line: &str,
        #[case] format: HardBreakFormat,
        #[case] expected: &str,
    ) {
        let out = normalize_line(line, format);
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(out, expected);
    }

    #[rstest]
    #[case("", DoubleSpace)]
    #[case("   ", Backslash)]
    #[case("already  ", DoubleSpace)]
    #[case(r"already\", Backslash)]
    #[case(r"\", DoubleSpace)]
    #[case(r"> \", DoubleSpace)]
    #[case(">", Backslash)]
    fn leaves_line_unchanged(#[case] line: &str, #[case] format: HardBreakFormat) {
        assert!(matches!(normalize_line(line, format), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("plain")]
    #[case(r"one\")]
    #[case(r"two\\")]
    #[case(r"three\\\")]
    #[case(r"slash space\ ")]
    #[case("spaces  ")]
    fn normalizing_twice_changes_nothing(#[case] line: &str) {
        for format in [DoubleSpace, Backslash] {
            let once = normalize_line(line, format).into_owned();
            assert_eq!(normalize_line(&once, format), once.as_str());
            assert_eq!(classify(&once), LineBreak::AlreadyHard(format));
        }
    }
}
