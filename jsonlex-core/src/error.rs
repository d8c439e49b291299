use core::fmt::{Display, Formatter};

/// A specialized `Result` type where the error is hard-wired to [`LexError`].
///
/// [`LexError`]: enum.LexError.html
pub type LexResult<T> = Result<T, LexError>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LexError {
    /// Input bytes are not valid UTF-8. `valid_up_to` is the length of the longest
    /// valid prefix.
    NonDecodable { valid_up_to: usize },
}

impl From<simdutf8::compat::Utf8Error> for LexError {
    /// Creates a new `LexError::NonDecodable` from the given error
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn from(error: simdutf8::compat::Utf8Error) -> LexError {
        LexError::NonDecodable {
            valid_up_to: error.valid_up_to(),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LexError::NonDecodable { valid_up_to } => {
                write!(f, "input is not valid UTF-8 after byte {valid_up_to}")
            }
        }
    }
}

impl core::error::Error for LexError {}
