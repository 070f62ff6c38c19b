//! HTML lexer for parseme.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: a single pass over the document bytes producing a flat,
//!   ordered list of tokens (`<`, `</`, `>`, `/>`, tag names, property names,
//!   property values, content). Control characters are stripped; malformed
//!   markup is tokenized on a best-effort basis and never aborts.
//! - **Property model**: validated attribute names and values, with quote
//!   stripping and boolean attributes.
//!
//! # Not Implemented
//!
//! - Character reference (entity) decoding
//! - Comments, CDATA, and script/style raw text
//! - Encoding detection
//! - Streaming input
//! - Tree construction

use std::path::Path;

use parseme_common::{FileError, fetch_file_contents};

/// Identifier grammars and quote helpers.
pub mod identifier;
/// Typed attribute values.
pub mod property;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use property::{Properties, Property, PropertyError, PropertyKind, properties};
pub use tokenizer::{
    LexemeBuffer, ScanState, Token, TokenKind, TokenizeIssue, Tokenizer, tokenize,
};

/// Read the file at `path` and tokenize it.
///
/// # Errors
///
/// Returns the [`FileError`] from reading the file unchanged. Nothing is
/// tokenized unless the whole file was read.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>, FileError> {
    let bytes = fetch_file_contents(path)?;
    Ok(tokenize(&bytes))
}
