use strum_macros::Display;

use super::buffer::LexemeBuffer;
use super::token::{Token, TokenKind};
use crate::identifier::is_valid_identifier;

/// Where the scan position is relative to tag markup.
///
/// Replaces a pair of "inside tag" / "expecting value" flags; an
/// "expecting value outside a tag" combination cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScanState {
    /// Between tags: `<` opens a tag, anything else is content.
    Outside,
    /// Inside `<...>`, reading names.
    InTag,
    /// Inside `<...>` right after an `=`; the next lexeme is a value.
    InTagExpectingValue,
}

/// Events that move the scanner between [`ScanState`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// A `<` was read outside a tag.
    TagOpened,
    /// A `>` was read inside a tag.
    TagClosed,
    /// An `=` following a property name was read.
    EqualsSign,
    /// A property value lexeme was emitted.
    ValueTaken,
}

impl ScanState {
    /// The state after `event`. Events that make no sense in the current
    /// state leave it unchanged.
    #[must_use]
    pub const fn next(self, event: ScanEvent) -> Self {
        match (self, event) {
            (Self::Outside, ScanEvent::TagOpened) => Self::InTag,
            (Self::InTag | Self::InTagExpectingValue, ScanEvent::TagClosed) => Self::Outside,
            (Self::InTag | Self::InTagExpectingValue, ScanEvent::EqualsSign) => {
                Self::InTagExpectingValue
            }
            (Self::InTagExpectingValue, ScanEvent::ValueTaken) => Self::InTag,
            (state, _) => state,
        }
    }

    /// Returns true while inside `<...>`.
    #[must_use]
    pub const fn in_tag(self) -> bool {
        matches!(self, Self::InTag | Self::InTagExpectingValue)
    }
}

/// A recoverable oddity noticed while tokenizing.
///
/// Malformed markup never aborts a run; the tokenizer records what it
/// skipped or reinterpreted here and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeIssue {
    /// What happened.
    pub message: String,
    /// Byte offset into the input where it happened.
    pub offset: usize,
}

/// Single-pass HTML tokenizer.
///
/// ```
/// use parseme_html::{Tokenizer, TokenKind};
///
/// let mut tokenizer = Tokenizer::new(b"<br/>");
/// tokenizer.run();
/// let kinds: Vec<_> = tokenizer.tokens().iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::TagStart, TokenKind::TagName, TokenKind::SlashTagEnd]
/// );
/// ```
pub struct Tokenizer<'a> {
    pub(super) input: &'a [u8],
    pub(super) pos: usize,
    pub(super) state: ScanState,
    /// Kind of the most recently emitted token. Drives lexeme classification.
    pub(super) last_kind: Option<TokenKind>,
    /// A `/` was seen inside the current tag and may turn `>` into `/>`.
    pub(super) pending_self_close: bool,
    pub(super) buffer: LexemeBuffer,
    pub(super) tokens: Vec<Token>,
    pub(super) issues: Vec<TokenizeIssue>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a complete document.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            state: ScanState::Outside,
            last_kind: None,
            pending_self_close: false,
            buffer: LexemeBuffer::new(),
            tokens: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Tokens emitted so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[TokenizeIssue] {
        &self.issues
    }

    /// Current scan state.
    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after [`Tokenizer::run`].
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Consume the tokenizer and return tokens and issues.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<TokenizeIssue>) {
        (self.tokens, self.issues)
    }

    /// Scan the whole input once, left to right.
    pub fn run(&mut self) {
        while let Some(byte) = self.current() {
            if self.skip_control() {
                continue;
            }

            if self.state.in_tag() {
                self.handle_in_tag(byte);
            } else {
                self.handle_outside(byte);
            }
        }

        if self.state.in_tag() {
            self.log_issue(self.input.len(), "unterminated tag at end of input");
        }
    }

    /// Between tags.
    fn handle_outside(&mut self, byte: u8) {
        match byte {
            b'<' => {
                self.pos += 1;
                self.emit(Token::tag_start());
                self.apply(ScanEvent::TagOpened);
            }
            // Spacing between tags carries no meaning.
            b' ' => self.pos += 1,
            _ => {
                self.scan_content();
                self.emit_lexeme(TokenKind::Content);
            }
        }
    }

    /// Inside `<...>`.
    fn handle_in_tag(&mut self, byte: u8) {
        match byte {
            // Right after `=`, a `/` not closing the tag starts the value.
            b'/' if self.state == ScanState::InTagExpectingValue
                && self.next_significant(self.pos + 1) != Some(b'>') =>
            {
                self.handle_tag_lexeme(byte);
            }
            b'/' => {
                self.pos += 1;
                if self.last_kind == Some(TokenKind::TagStart) {
                    // `<` followed by `/` is really `</`.
                    self.replace_last(Token::slash_tag_start());
                } else {
                    self.pending_self_close = true;
                }
            }
            b' ' => self.pos += 1,
            b'=' => {
                if self.last_kind == Some(TokenKind::PropertyName) {
                    self.apply(ScanEvent::EqualsSign);
                } else {
                    self.log_issue(self.pos, "'=' without a property name ignored");
                }
                self.pos += 1;
            }
            b'>' => {
                self.pos += 1;
                let token = if self.pending_self_close {
                    Token::slash_tag_end()
                } else {
                    Token::tag_end()
                };
                self.pending_self_close = false;
                self.emit(token);
                self.apply(ScanEvent::TagClosed);
            }
            _ => self.handle_tag_lexeme(byte),
        }
    }

    /// A name or value inside a tag. What it is depends on what came before.
    fn handle_tag_lexeme(&mut self, first: u8) {
        let start = self.pos;

        if self.pending_self_close {
            self.pending_self_close = false;
            self.log_issue(start, "'/' not followed by '>' ignored");
        }

        let kind = self.classify_lexeme();

        if kind == TokenKind::PropertyValue && matches!(first, b'"' | b'\'') {
            if !self.scan_quoted_value(first) {
                self.log_issue(start, "unterminated quoted value");
                self.scan_tag_string();
            }
        } else {
            self.scan_tag_string();
        }

        if kind == TokenKind::TagName && !is_valid_identifier(&self.buffer.to_text()) {
            self.log_issue(start, "invalid tag name");
        }

        self.emit_lexeme(kind);

        if kind == TokenKind::PropertyValue {
            self.apply(ScanEvent::ValueTaken);
        }
    }

    /// Classify the next lexeme inside a tag by the previous token.
    fn classify_lexeme(&self) -> TokenKind {
        match self.last_kind {
            Some(TokenKind::TagStart | TokenKind::SlashTagStart) => TokenKind::TagName,
            Some(TokenKind::PropertyName) if self.state == ScanState::InTagExpectingValue => {
                TokenKind::PropertyValue
            }
            // After a tag name, a value, or a bare (boolean) property name,
            // a new property begins.
            _ => TokenKind::PropertyName,
        }
    }

    /// Collect content up to, not including, the next `<`.
    fn scan_content(&mut self) {
        while let Some(byte) = self.current() {
            if self.skip_control() {
                continue;
            }
            if byte == b'<' {
                break;
            }
            self.buffer.append(byte);
            self.pos += 1;
        }
    }

    /// Collect a tag lexeme up to the next space, `>`, `=` or `/>`.
    fn scan_tag_string(&mut self) {
        while let Some(byte) = self.current() {
            if self.skip_control() {
                continue;
            }
            match byte {
                b' ' | b'>' | b'=' => break,
                b'/' if self.next_significant(self.pos + 1) == Some(b'>') => break,
                _ => {
                    self.buffer.append(byte);
                    self.pos += 1;
                }
            }
        }
    }

    /// Collect a quoted value including both quotes.
    ///
    /// Returns false without consuming anything if the quote is never closed.
    fn scan_quoted_value(&mut self, quote: u8) -> bool {
        let Some(close) = self.input[self.pos + 1..]
            .iter()
            .position(|&b| b == quote)
            .map(|offset| self.pos + 1 + offset)
        else {
            return false;
        };

        while self.pos <= close {
            if self.skip_control() {
                continue;
            }
            self.buffer.append(self.input[self.pos]);
            self.pos += 1;
        }
        true
    }
}
