use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use core::ops::Deref;

/// Kind of a lexical token. Ordinals follow declaration order and show up in the
/// [`Display`] output of [`Token`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// Unbroken run of spaces, tabs and newlines.
    WhiteSpace,
    /// Any contiguous run that isn't a literal. Numbers land here, but so does
    /// `abc123` or a lone `-`; no number grammar is checked.
    Numeric,
    /// Double quoted string, quotes stripped, escapes left as written.
    String,
    /// `true` or `false`, in any casing.
    Boolean,
    /// `null`, in any casing.
    Null,
}

impl TokenKind {
    #[must_use]
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::Colon
                | TokenKind::Comma
        )
    }

    #[must_use]
    pub fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::Numeric | TokenKind::String | TokenKind::Boolean | TokenKind::Null
        )
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::Numeric => "Numeric",
            TokenKind::String => "String",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub text: &'input str,
}

impl<'input> Token<'input> {
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'input str) -> Token<'input> {
        Token { kind, text }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{ Type: {}, Value: \"{}\" }}", self.kind as u8, self.text)
    }
}

/// Tokens in the order they were scanned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens<'input>(Vec<Token<'input>>);

impl<'input> Tokens<'input> {
    #[must_use]
    pub fn new() -> Tokens<'input> {
        Tokens(Vec::new())
    }

    pub(crate) fn push(&mut self, token: Token<'input>) {
        self.0.push(token);
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Token<'input>> {
        self.0
    }

    /// Tokens other than [`TokenKind::WhiteSpace`].
    pub fn significant(&self) -> impl Iterator<Item = &Token<'input>> {
        self.0
            .iter()
            .filter(|token| token.kind != TokenKind::WhiteSpace)
    }

    /// Joins token texts back together, putting quotes around strings.
    ///
    /// Matches the input whenever it had no unterminated string and no literal
    /// written in non-canonical casing.
    #[must_use]
    pub fn to_source(&self) -> String {
        let cap: usize = self.0.iter().map(|token| token.text.len() + 2).sum();
        let mut out = String::with_capacity(cap);
        for token in &self.0 {
            if token.kind == TokenKind::String {
                out.push('"');
                out.push_str(token.text);
                out.push('"');
            } else {
                out.push_str(token.text);
            }
        }
        out
    }
}

impl<'input> Deref for Tokens<'input> {
    type Target = [Token<'input>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'input> From<Vec<Token<'input>>> for Tokens<'input> {
    fn from(value: Vec<Token<'input>>) -> Self {
        Tokens(value)
    }
}

impl<'input> FromIterator<Token<'input>> for Tokens<'input> {
    fn from_iter<T: IntoIterator<Item = Token<'input>>>(iter: T) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl<'input> IntoIterator for Tokens<'input> {
    type Item = Token<'input>;
    type IntoIter = alloc::vec::IntoIter<Token<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'input> IntoIterator for &'a Tokens<'input> {
    type Item = &'a Token<'input>;
    type IntoIter = core::slice::Iter<'a, Token<'input>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Tokens<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("[ ")?;
        for token in &self.0 {
            write!(f, "{token}, ")?;
        }
        f.write_str("]")
    }
}
