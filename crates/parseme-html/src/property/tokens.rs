use std::iter::FusedIterator;

use super::{Property, PropertyError};
use crate::tokenizer::{Token, TokenKind};

/// Read the properties of the tag that `tokens` starts with.
///
/// `tokens` is usually a slice of the tokenizer output beginning at a
/// `TagStart`. Iteration stops at the first `TagEnd` or `SlashTagEnd`.
/// A `PropertyName` directly followed by a `PropertyValue` becomes a value
/// property; a `PropertyName` on its own becomes a boolean property set to
/// `true`.
#[must_use]
pub fn properties(tokens: &[Token]) -> Properties<'_> {
    Properties { tokens, pos: 0 }
}

/// Iterator returned by [`properties`]. Yields one result per attribute so
/// a bad attribute doesn't hide the ones after it.
#[derive(Debug, Clone)]
pub struct Properties<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Iterator for Properties<'_> {
    type Item = Result<Property, PropertyError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(token) = self.tokens.get(self.pos) {
            self.pos += 1;
            match token.kind() {
                TokenKind::TagEnd | TokenKind::SlashTagEnd => {
                    self.pos = self.tokens.len();
                    return None;
                }
                TokenKind::PropertyName => {
                    let value = self
                        .tokens
                        .get(self.pos)
                        .filter(|next| next.kind() == TokenKind::PropertyValue);

                    return Some(match value {
                        Some(value) => {
                            self.pos += 1;
                            Property::value_of(token.text(), value.text())
                        }
                        None => Property::flag(token.text()),
                    });
                }
                TokenKind::TagStart
                | TokenKind::SlashTagStart
                | TokenKind::TagName
                | TokenKind::PropertyValue
                | TokenKind::Content => {}
            }
        }
        None
    }
}

impl FusedIterator for Properties<'_> {}
