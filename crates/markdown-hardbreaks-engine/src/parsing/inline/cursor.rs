/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the document (via `base` offset). Only ASCII delimiters are inspected,
/// so stepping through multi-byte characters a byte at a time is safe.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the document (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes a maximal run of `b`, returning its length.
    pub fn eat_run(&mut self, b: u8) -> usize {
        let start = self.i;
        while self.peek() == Some(b) {
            self.i += 1;
        }
        self.i - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x", 0);
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
    }

    #[test]
    fn eat_run_counts_maximal_run() {
        let mut cur = Cursor::new("```a``", 0);
        assert_eq!(cur.eat_run(b'`'), 3);
        assert_eq!(cur.peek(), Some(b'a'));
        assert_eq!(cur.eat_run(b'`'), 0);
        cur.bump();
        assert_eq!(cur.eat_run(b'`'), 2);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 6);
    }

    #[test]
    fn multibyte_text_is_stepped_bytewise() {
        let mut cur = Cursor::new("é`", 0);
        cur.bump();
        cur.bump();
        assert_eq!(cur.peek(), Some(b'`'));
    }
}
