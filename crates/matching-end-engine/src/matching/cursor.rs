/// A forward-only scan position over the text being matched.
///
/// The position is a byte offset that is kept on a `char` boundary at all
/// times, so `s[i..]` is always a valid slice.
#[derive(Debug, Clone, Copy)]
pub struct ScanCursor<'a> {
    /// The full text being scanned.
    pub s: &'a str,
    /// Current byte offset into `s`.
    i: usize,
}

impl<'a> ScanCursor<'a> {
    /// Creates a cursor at byte offset `at`.
    ///
    /// Returns `None` if `at` lies past the end of `s`. An offset inside a
    /// multi-byte char is moved forward to the next char boundary.
    pub fn new(s: &'a str, at: usize) -> Option<Self> {
        if at > s.len() {
            return None;
        }
        Some(Self {
            s,
            i: ceil_char_boundary(s, at),
        })
    }

    /// Returns the current byte offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of text.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Byte offset of the next occurrence of `needle` at or after the cursor.
    pub fn find_next(&self, needle: &str) -> Option<usize> {
        self.s[self.i..].find(needle).map(|off| self.i + off)
    }

    /// Moves the cursor to `at`, clamped to the end of text and snapped
    /// forward to a char boundary.
    pub fn seek(&mut self, at: usize) {
        self.i = ceil_char_boundary(self.s, at.min(self.s.len()));
    }
}

/// Smallest char boundary of `s` that is `>= at` (or `s.len()`).
pub(crate) fn ceil_char_boundary(s: &str, mut at: usize) -> usize {
    while at < s.len() && !s.is_char_boundary(at) {
        at += 1;
    }
    at.min(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let cur = ScanCursor::new("hello", 1).unwrap();
        assert_eq!(cur.pos(), 1);
        assert!(!cur.eof());
        assert_eq!(cur.find_next("l"), Some(2));
        assert_eq!(cur.find_next("h"), None);
    }

    #[test]
    fn cursor_at_end_is_eof() {
        let cur = ScanCursor::new("ab", 2).unwrap();
        assert!(cur.eof());
        assert_eq!(cur.find_next("a"), None);
    }

    #[test]
    fn cursor_past_end_is_rejected() {
        assert!(ScanCursor::new("ab", 3).is_none());
        assert!(ScanCursor::new("", 1).is_none());
    }

    #[test]
    fn empty_string_input() {
        let cur = ScanCursor::new("", 0).unwrap();
        assert!(cur.eof());
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn mid_char_offset_snaps_forward() {
        // 'é' is two bytes: offsets 1..3
        let cur = ScanCursor::new("aéb", 2).unwrap();
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn seek_clamps_to_end() {
        let mut cur = ScanCursor::new("abc", 0).unwrap();
        cur.seek(10);
        assert_eq!(cur.pos(), 3);
        assert!(cur.eof());
    }

    #[test]
    fn find_next_only_looks_forward() {
        let mut cur = ScanCursor::new("}}a}}", 0).unwrap();
        assert_eq!(cur.find_next("}}"), Some(0));
        cur.seek(1);
        assert_eq!(cur.find_next("}}"), Some(3));
    }
}
