/// Blockquote prefix syntax.
///
/// The structural parser delegates blockquote recognition to pulldown-cmark;
/// this only looks past `>` markers on single lines (blank-body checks and
/// leading break markers).
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            // Leading spaces only belong to the prefix when a marker follows.
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// The line with all leading quote markers removed. Lines outside a
    /// blockquote come back untouched, leading whitespace included.
    pub fn body(s: &str) -> &str {
        let (_, idx) = Self::strip_prefixes(s);
        &s[idx..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
    }

    #[test]
    fn strip_double_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, 4));
    }

    #[test]
    fn strip_keeps_indentation_after_marker_space() {
        assert_eq!(BlockQuote::strip_prefixes(">   two"), (1, 2));
        assert_eq!(BlockQuote::strip_prefixes("   indented"), (0, 0));
    }

    #[test]
    fn strip_nested_quote_no_space() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, 3));
    }

    #[test]
    fn body_of_marker_only_line_is_blank() {
        assert!(BlockQuote::body(">  ").trim().is_empty());
        assert_eq!(BlockQuote::body("> > "), "");
        assert_eq!(BlockQuote::body(">"), "");
    }

    #[test]
    fn body_keeps_indentation_outside_quotes() {
        assert_eq!(BlockQuote::body("  plain"), "  plain");
        assert_eq!(BlockQuote::body("> quoted"), "quoted");
    }
}
