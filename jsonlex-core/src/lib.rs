#![no_std]
extern crate alloc;
extern crate core;

pub use error::{LexError, LexResult};
pub use tokenizer::{analyze, analyze_bytes};
pub use tokenizer::{Scanner, Source, StrSource, Token, TokenKind, Tokens};

pub mod error;
pub mod tokenizer;
