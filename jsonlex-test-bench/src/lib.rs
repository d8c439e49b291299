pub mod consts;

use std::fmt::Write;

use jsonlex_core::{analyze, Token, TokenKind};

///
/// Assert that for given input, the scanner generates expected set of tokens
///
/// # Panics
///
///    Function panics if there is a difference between expected tokens string and one generated
///    from the input.
pub fn assert_eq_tokens(input: &str, tokens: &str) {
    let mut line = String::with_capacity(tokens.len());
    write_str_from_tokens(&mut line, analyze(input).iter());
    assert_eq!(line, tokens, "Error in case: {input:?}");
}

/// Writes one line per token, each preceded by a newline.
///
/// Structural tokens are written as is, everything else as `=KIND text` with
/// control characters escaped. Spaces inside whitespace runs are shown as `\s` so
/// that trailing space survives in test fixtures.
pub fn write_str_from_tokens<'a, 'input: 'a>(
    line: &mut String,
    tokens: impl Iterator<Item = &'a Token<'input>>,
) {
    for token in tokens {
        let _ = match token.kind {
            TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Colon
            | TokenKind::Comma => write!(line, "\n{}", token.text),
            TokenKind::WhiteSpace => write!(line, "\n=WS {}", escape_text(token.text, true)),
            TokenKind::Numeric => write!(line, "\n=NUM {}", escape_text(token.text, false)),
            TokenKind::String => write!(line, "\n=STR {}", escape_text(token.text, false)),
            TokenKind::Boolean => write!(line, "\n=BOOL {}", token.text),
            TokenKind::Null => write!(line, "\n=NULL"),
        };
    }
}

pub fn escape_text(text: &str, escape_space: bool) -> String {
    let mut output = String::with_capacity(text.len());
    for chr in text.chars() {
        match chr {
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\0' => output.push_str("\\0"),
            ' ' if escape_space => output.push_str("\\s"),
            _ => output.push(chr),
        }
    }
    output
}
