//! HTML tokenizer module.
//!
//! Turns a complete document into a flat, ordered list of [`Token`]s in one
//! left-to-right pass. There is no tree: the order of the tokens is the
//! structure.

/// Scratch buffer for the lexeme being assembled.
pub mod buffer;
mod helpers;
/// Tokenizer state machine implementation.
pub mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use buffer::LexemeBuffer;
pub use scanner::{ScanEvent, ScanState, TokenizeIssue, Tokenizer};
pub use token::{Token, TokenKind};

/// Tokenize a complete document.
///
/// Pure: the same input always yields the same tokens, and nothing survives
/// the call. Malformed markup is tokenized on a best-effort basis; use
/// [`Tokenizer`] directly to see the issues that were recorded.
#[must_use]
pub fn tokenize(input: &[u8]) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}
