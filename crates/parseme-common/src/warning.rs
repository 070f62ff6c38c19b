//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! A [`Warnings`] value is owned by whoever drives a run (usually the CLI) and
//! handed to the code that reports, so there is no process-wide state.

use std::collections::HashSet;
use std::io::{self, Write};

use owo_colors::OwoColorize;

/// A deduplicating sink for warnings.
#[derive(Debug, Default)]
pub struct Warnings {
    /// Set of warnings we've already printed, keyed by `[component] message`.
    seen: HashSet<String>,
    /// When set, warnings are recorded but never printed.
    quiet: bool,
}

impl Warnings {
    /// Create an empty sink that prints to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink that records warnings without printing them.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            seen: HashSet::new(),
            quiet: true,
        }
    }

    /// Warn about something odd in the input (prints once per unique message).
    ///
    /// Returns `true` if this was the first time the message was seen.
    ///
    /// # Example
    /// ```ignore
    /// warnings.warn_once("Tokenizer", "unterminated tag at offset 12");
    /// ```
    pub fn warn_once(&mut self, component: &str, message: &str) -> bool {
        let key = format!("[{component}] {message}");
        let first = self.seen.insert(key);

        if first && !self.quiet {
            let line = format!("[parseme {component}] ⚠ {message}");
            // Nothing sensible to do if stderr is gone.
            let _ = writeln!(io::stderr(), "{}", line.yellow());
        }
        first
    }

    /// Number of distinct warnings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if no warning has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Clear all recorded warnings (call when loading a new document).
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
