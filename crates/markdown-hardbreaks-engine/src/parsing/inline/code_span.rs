use crate::parsing::rope::span::Span;

use super::cursor::Cursor;

/// Code span syntax: a run of N backticks closed by the next run of exactly N.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const ESCAPE: u8 = b'\\';
}

/// Finds every code span in `s`, returning absolute spans (backticks included).
///
/// # Arguments
/// - `base`: Byte offset in the document where `s` begins
/// - `s`: Inline content, typically a paragraph's full span
///
/// A backslash-escaped backtick cannot open a span. An opening run with no
/// closing run of the same length is literal text, and scanning resumes after
/// it. Backslashes inside a span are literal.
pub fn code_spans(base: usize, s: &str) -> Vec<Span> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];

    while !cur.eof() {
        match cur.peek() {
            Some(CodeSpan::ESCAPE) => {
                cur.bump();
                if !cur.eof() {
                    cur.bump();
                }
            }
            Some(CodeSpan::TICK) => {
                if let Some(span) = try_code_span(&mut cur) {
                    out.push(span);
                }
            }
            _ => {
                cur.bump();
            }
        }
    }
    out
}

/// Attempts to close the backtick run at the cursor.
///
/// On success the cursor sits after the closing run; on failure it sits after
/// the (literal) opening run.
fn try_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    let start = cur.pos();
    let open = cur.eat_run(CodeSpan::TICK);
    let after_open = cur.clone();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            if cur.eat_run(CodeSpan::TICK) == open {
                return Some(Span {
                    start,
                    end: cur.pos(),
                });
            }
        } else {
            cur.bump();
        }
    }

    *cur = after_open;
    None
}
