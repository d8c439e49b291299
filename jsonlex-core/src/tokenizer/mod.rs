use log::debug;

pub use scanner::Scanner;
pub use source::{Source, StrSource};
pub use token::{Token, TokenKind, Tokens};

use crate::error::LexResult;

mod char_utils;
mod scanner;
mod source;
mod token;

/// Splits `input` into tokens, left to right, until the input is used up.
///
/// Never fails: text that isn't valid JSON still comes back as tokens. An empty
/// input gives an empty [`Tokens`].
///
/// ```
/// use jsonlex_core::{analyze, Token, TokenKind};
///
/// let tokens = analyze("[TRUE]");
/// assert_eq!(
///     &tokens[..],
///     &[
///         Token::new(TokenKind::LeftBracket, "["),
///         Token::new(TokenKind::Boolean, "true"),
///         Token::new(TokenKind::RightBracket, "]"),
///     ]
/// );
/// ```
#[must_use]
pub fn analyze(input: &str) -> Tokens<'_> {
    let mut output = Tokens::new();
    let mut scanner = Scanner::new(StrSource::new(input));
    while let Some(token) = scanner.fetch_token() {
        output.push(token);
    }
    debug!("analyzed {} bytes into {} tokens", input.len(), output.len());
    output
}

/// Same as [`analyze`], for input that has yet to be checked for UTF-8.
///
/// # Errors
///
/// Returns [`crate::LexError::NonDecodable`] when `input` is not valid UTF-8. Nothing is
/// scanned in that case.
pub fn analyze_bytes(input: &[u8]) -> LexResult<Tokens<'_>> {
    let text = simdutf8::compat::from_utf8(input)?;
    Ok(analyze(text))
}
