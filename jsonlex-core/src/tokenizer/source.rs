use memchr::memchr;

///
/// A cursor over input text, read one rune at a time, with room for a single
/// rune of pushback.
///
/// # Methods
/// ## Reading
/// - `read() -> Option<char>`: Consumes and returns the next rune, `None` at end of input.
/// - `unread()`: Steps back over the rune returned by the last `read`. At most one rune
///   may be pending; a second `unread` without a `read` in between is a logic error.
/// - `peek() -> Option<char>`: Returns the next rune without consuming it.
///
/// ## Positions and slices
/// - `offset() -> usize`: Byte offset of the cursor.
/// - `slice(start, end) -> &str`: Input text between two byte offsets.
/// - `skip_to_byte(needle) -> Option<usize>`: Moves the cursor onto the next occurrence of
///   an ASCII byte and returns its offset, or moves to the end and returns `None`.
pub trait Source<'input> {
    fn read(&mut self) -> Option<char>;

    fn unread(&mut self);

    #[must_use]
    fn peek(&self) -> Option<char>;

    #[must_use]
    fn offset(&self) -> usize;

    #[must_use]
    fn slice(&self, start: usize, end: usize) -> &'input str;

    fn skip_to_byte(&mut self, needle: u8) -> Option<usize>;

    #[must_use]
    fn is_empty(&self) -> bool;

    /// Reads runes for as long as `pred` holds, pushing the first rejected rune back.
    fn read_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(chr) = self.read() {
            if !pred(chr) {
                self.unread();
                break;
            }
        }
    }
}

pub struct StrSource<'input> {
    input: &'input str,
    pos: usize,
    /// Byte width of the last rune read, cleared once it's pushed back.
    pending: Option<usize>,
}

impl<'input> StrSource<'input> {
    pub fn new(input: &'input str) -> StrSource<'input> {
        StrSource {
            input,
            pos: 0,
            pending: None,
        }
    }
}

impl<'input> From<&'input str> for StrSource<'input> {
    fn from(value: &'input str) -> Self {
        StrSource::new(value)
    }
}

impl<'input> Source<'input> for StrSource<'input> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn read(&mut self) -> Option<char> {
        let chr = self.peek();
        self.pending = chr.map(char::len_utf8);
        if let Some(width) = self.pending {
            self.pos += width;
        }
        chr
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn unread(&mut self) {
        debug_assert!(self.pending.is_some(), "unread without a preceding read");
        if let Some(width) = self.pending.take() {
            self.pos -= width;
        }
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn offset(&self) -> usize {
        self.pos
    }

    fn slice(&self, start: usize, end: usize) -> &'input str {
        &self.input[start..end]
    }

    fn skip_to_byte(&mut self, needle: u8) -> Option<usize> {
        debug_assert!(needle.is_ascii());
        self.pending = None;
        match memchr(needle, &self.input.as_bytes()[self.pos..]) {
            Some(found) => {
                self.pos += found;
                Some(self.pos)
            }
            None => {
                self.pos = self.input.len();
                None
            }
        }
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Source, StrSource};

    #[test]
    fn test_read_unread() {
        let mut source = StrSource::new("ab");
        assert_eq!(source.read(), Some('a'));
        source.unread();
        assert_eq!(source.offset(), 0);
        assert_eq!(source.read(), Some('a'));
        assert_eq!(source.read(), Some('b'));
        assert_eq!(source.read(), None);
        assert!(source.is_empty());
    }

    #[test]
    fn test_multibyte() {
        let mut source = StrSource::new("é1");
        assert_eq!(source.read(), Some('é'));
        assert_eq!(source.offset(), 2);
        source.unread();
        assert_eq!(source.peek(), Some('é'));
        assert_eq!(source.offset(), 0);
    }

    #[test]
    fn test_skip_to_byte() {
        let mut source = StrSource::new("key\" tail");
        assert_eq!(source.skip_to_byte(b'"'), Some(3));
        assert_eq!(source.slice(0, 3), "key");
        assert_eq!(source.skip_to_byte(b'#'), None);
        assert!(source.is_empty());
    }

    #[test]
    fn test_read_while() {
        let mut source = StrSource::new("   x");
        source.read_while(|c| c == ' ');
        assert_eq!(source.offset(), 3);
        assert_eq!(source.peek(), Some('x'));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unread without a preceding read")]
    fn test_double_unread() {
        let mut source = StrSource::new("ab");
        assert_eq!(source.read(), Some('a'));
        source.unread();
        source.unread();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unread without a preceding read")]
    fn test_unread_after_skip() {
        let mut source = StrSource::new("a\"b");
        assert_eq!(source.read(), Some('a'));
        assert_eq!(source.skip_to_byte(b'"'), Some(1));
        source.unread();
    }
}
