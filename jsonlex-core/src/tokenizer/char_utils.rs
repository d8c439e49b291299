#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn is_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn structural_kind(c: char) -> Option<super::TokenKind> {
    use super::TokenKind::*;

    match c {
        '{' => Some(LeftBrace),
        '}' => Some(RightBrace),
        '[' => Some(LeftBracket),
        ']' => Some(RightBracket),
        ':' => Some(Colon),
        ',' => Some(Comma),
        _ => None,
    }
}
