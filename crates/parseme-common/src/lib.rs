//! Common utilities for the parseme lexer.
//!
//! This crate provides shared infrastructure used around the tokenizer:
//! - **Warning System** - deduplicated, colored terminal output for issues
//! - **File Acquisition** - reading a whole document from disk with typed errors

pub mod file;
pub mod warning;

pub use file::{FileError, fetch_file_contents};
pub use warning::Warnings;
