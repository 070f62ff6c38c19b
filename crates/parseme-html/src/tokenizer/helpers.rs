//! Helper functions for the tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions
//! - Input handling (current byte, control-character skipping, lookahead)
//! - Token emission
//! - Issue logging

use super::scanner::{ScanEvent, TokenizeIssue, Tokenizer};
use super::token::{Token, TokenKind};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// Move to the state that follows `event`.
    pub(super) const fn apply(&mut self, event: ScanEvent) {
        self.state = self.state.next(event);
    }
}

// =============================================================================
// Input Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// The byte at the scan position, `None` at end of input.
    pub(super) fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Length of the control character starting at `at`, or 0 if there is none.
    ///
    /// C0 controls and DEL are single bytes. C1 controls (U+0080..U+009F) are
    /// the two-byte UTF-8 sequences `C2 80`..`C2 9F` and are skipped whole so
    /// the surrounding text stays valid UTF-8.
    pub(super) fn control_len(&self, at: usize) -> usize {
        match self.input.get(at).copied() {
            Some(b) if b < 0x20 || b == 0x7F => 1,
            Some(0xC2) => match self.input.get(at + 1).copied() {
                Some(0x80..=0x9F) => 2,
                _ => 0,
            },
            _ => 0,
        }
    }

    /// Step over a control character at the scan position.
    ///
    /// Returns true if one was skipped.
    pub(super) fn skip_control(&mut self) -> bool {
        let len = self.control_len(self.pos);
        self.pos += len;
        len > 0
    }

    /// The first non-control byte at or after `from`.
    pub(super) fn next_significant(&self, from: usize) -> Option<u8> {
        let mut at = from;
        loop {
            match self.control_len(at) {
                0 => return self.input.get(at).copied(),
                len => at += len,
            }
        }
    }
}

// =============================================================================
// Emission Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// Append a token to the output and remember its kind.
    pub(super) fn emit(&mut self, token: Token) {
        self.last_kind = Some(token.kind());
        self.tokens.push(token);
    }

    /// Turn the buffered lexeme into a token of `kind` and clear the buffer.
    pub(super) fn emit_lexeme(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.buffer.to_text());
        self.buffer.clear();
        self.emit(token);
    }

    /// Reclassify the most recent token.
    pub(super) fn replace_last(&mut self, token: Token) {
        self.last_kind = Some(token.kind());
        if let Some(last) = self.tokens.last_mut() {
            *last = token;
        }
    }
}

// =============================================================================
// Issue Helpers
// =============================================================================

impl Tokenizer<'_> {
    /// Record a recoverable oddity at byte `offset`.
    pub(super) fn log_issue(&mut self, offset: usize, message: &str) {
        self.issues.push(TokenizeIssue {
            message: message.to_string(),
            offset,
        });
    }
}
