use core::iter::FusedIterator;
use core::marker::PhantomData;

use log::{debug, trace};

use crate::tokenizer::char_utils::{is_run_char, is_whitespace, structural_kind};
use crate::tokenizer::source::Source;
use crate::tokenizer::{Token, TokenKind};

/// Produces one [`Token`] per call to [`Scanner::fetch_token`] until the input runs out.
///
/// The scanner never fails. Malformed input (an unterminated string, a stray `}`,
/// `12ab` where a number should be) still comes out as tokens, and it's up to the
/// caller to decide whether they make sense.
pub struct Scanner<'input, S> {
    src: S,
    phantom: PhantomData<&'input str>,
}

impl<'input, S: Source<'input>> Scanner<'input, S> {
    pub fn new(src: S) -> Scanner<'input, S> {
        Scanner {
            src,
            phantom: PhantomData,
        }
    }

    /// Byte offset of the next unread rune.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.src.offset()
    }

    /// Scans the longest token starting at the cursor, or returns `None` once the
    /// input is exhausted.
    pub fn fetch_token(&mut self) -> Option<Token<'input>> {
        let start = self.src.offset();
        let chr = self.src.read()?;

        let token = if let Some(kind) = structural_kind(chr) {
            Token::new(kind, self.src.slice(start, self.src.offset()))
        } else if chr == '"' {
            self.scan_string()
        } else if is_whitespace(chr) {
            self.src.unread();
            self.scan_whitespace()
        } else {
            self.src.unread();
            self.scan_contiguous()
        };
        trace!("{:?} {:?} at {start}", token.kind, token.text);
        Some(token)
    }

    /// Cursor sits right after the opening quote.
    fn scan_string(&mut self) -> Token<'input> {
        let start = self.src.offset();
        let text = match self.src.skip_to_byte(b'"') {
            Some(end) => {
                let text = self.src.slice(start, end);
                // step over the closing quote
                self.src.read();
                text
            }
            None => {
                debug!("unterminated string starting at {}", start - 1);
                self.src.slice(start, self.src.offset())
            }
        };
        Token::new(TokenKind::String, text)
    }

    fn scan_whitespace(&mut self) -> Token<'input> {
        let start = self.src.offset();
        self.src.read();
        self.src.read_while(is_whitespace);
        Token::new(TokenKind::WhiteSpace, self.src.slice(start, self.src.offset()))
    }

    fn scan_contiguous(&mut self) -> Token<'input> {
        let start = self.src.offset();
        // The first rune is taken whatever it is, so that `-1` or `.5` stay in one piece.
        self.src.read();
        self.src.read_while(is_run_char);
        classify(self.src.slice(start, self.src.offset()))
    }
}

/// Resolves a contiguous run into a literal, or leaves it as [`TokenKind::Numeric`].
#[must_use]
pub(crate) fn classify(run: &str) -> Token<'_> {
    if run.eq_ignore_ascii_case("null") {
        Token::new(TokenKind::Null, "null")
    } else if run.eq_ignore_ascii_case("true") {
        Token::new(TokenKind::Boolean, "true")
    } else if run.eq_ignore_ascii_case("false") {
        Token::new(TokenKind::Boolean, "false")
    } else {
        Token::new(TokenKind::Numeric, run)
    }
}

impl<'input, S: Source<'input>> Iterator for Scanner<'input, S> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        self.fetch_token()
    }
}

impl<'input, S: Source<'input>> FusedIterator for Scanner<'input, S> {}

#[cfg(test)]
mod tests {
    use super::{classify, Scanner};
    use crate::tokenizer::TokenKind::*;
    use crate::tokenizer::{StrSource, Token};

    fn scanner(input: &str) -> Scanner<'_, StrSource<'_>> {
        Scanner::new(StrSource::new(input))
    }

    #[test]
    fn test_structural_no_lookahead() {
        let mut scan = scanner("{}");
        assert_eq!(scan.fetch_token(), Some(Token::new(LeftBrace, "{")));
        assert_eq!(scan.offset(), 1);
        assert_eq!(scan.fetch_token(), Some(Token::new(RightBrace, "}")));
        assert_eq!(scan.fetch_token(), None);
    }

    #[test]
    fn test_pushback_between_tokens() {
        let mut scan = scanner(" 12,");
        assert_eq!(scan.fetch_token(), Some(Token::new(WhiteSpace, " ")));
        assert_eq!(scan.offset(), 1);
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "12")));
        assert_eq!(scan.offset(), 3);
        assert_eq!(scan.fetch_token(), Some(Token::new(Comma, ",")));
        assert_eq!(scan.fetch_token(), None);
    }

    #[test]
    fn test_string_consumes_closing_quote() {
        let mut scan = scanner("\"a\"b");
        assert_eq!(scan.fetch_token(), Some(Token::new(String, "a")));
        assert_eq!(scan.offset(), 3);
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "b")));
    }

    #[test]
    fn test_empty_string() {
        let mut scan = scanner("\"\"");
        assert_eq!(scan.fetch_token(), Some(Token::new(String, "")));
        assert_eq!(scan.fetch_token(), None);
    }

    #[test]
    fn test_lone_quote() {
        let mut scan = scanner("\"");
        assert_eq!(scan.fetch_token(), Some(Token::new(String, "")));
        assert_eq!(scan.fetch_token(), None);
    }

    #[test]
    fn test_carriage_return_is_not_whitespace() {
        let mut scan = scanner("\r\n");
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "\r")));
        assert_eq!(scan.fetch_token(), Some(Token::new(WhiteSpace, "\n")));
    }

    #[test]
    fn test_first_rune_always_taken() {
        let mut scan = scanner("-1.5e3");
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "-1")));
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, ".5e3")));
        assert_eq!(scan.fetch_token(), None);
    }

    #[test]
    fn test_non_ascii_run() {
        let mut scan = scanner("ü9ö");
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "ü9")));
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "ö")));
    }

    #[test]
    fn test_nul_is_ordinary() {
        let mut scan = scanner("\0{");
        assert_eq!(scan.fetch_token(), Some(Token::new(Numeric, "\0")));
        assert_eq!(scan.fetch_token(), Some(Token::new(LeftBrace, "{")));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("NuLl"), Token::new(Null, "null"));
        assert_eq!(classify("TRUE"), Token::new(Boolean, "true"));
        assert_eq!(classify("False"), Token::new(Boolean, "false"));
        assert_eq!(classify("nulls"), Token::new(Numeric, "nulls"));
        assert_eq!(classify("abc123"), Token::new(Numeric, "abc123"));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut scan = scanner("1");
        assert_eq!(scan.next(), Some(Token::new(Numeric, "1")));
        assert_eq!(scan.next(), None);
        assert_eq!(scan.next(), None);
    }

    #[test]
    fn test_fetch_token_with_iterator_in_scope() {
        let mut scan = scanner("[1]");
        let by_ref = &mut scan;
        assert_eq!(by_ref.fetch_token(), Some(Token::new(LeftBracket, "[")));
        assert_eq!(by_ref.next(), Some(Token::new(Numeric, "1")));
        assert_eq!(scan.fetch_token(), Some(Token::new(RightBracket, "]")));
        assert_eq!(scan.next(), None);
    }
}
