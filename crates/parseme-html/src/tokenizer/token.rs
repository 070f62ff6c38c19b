use std::fmt;

use strum_macros::{Display, EnumIter};

/// The lexical category of a [`Token`].
///
/// The order of tokens is the only structural signal the tokenizer produces,
/// so a downstream builder reads these kinds in sequence to recover tags and
/// their attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TokenKind {
    /// `<` opening a start tag.
    TagStart,
    /// `</` opening an end tag.
    SlashTagStart,
    /// `>` closing a tag.
    TagEnd,
    /// `/>` closing a self-closing tag.
    SlashTagEnd,
    /// The identifier right after `<` or `</`.
    TagName,
    /// An attribute name inside a tag.
    PropertyName,
    /// An attribute value inside a tag, quotes included.
    PropertyValue,
    /// Text outside of any tag.
    Content,
}

impl TokenKind {
    /// The fixed text of punctuation kinds, `None` for kinds carrying a lexeme.
    #[must_use]
    pub const fn fixed_text(self) -> Option<&'static str> {
        match self {
            Self::TagStart => Some("<"),
            Self::SlashTagStart => Some("</"),
            Self::TagEnd => Some(">"),
            Self::SlashTagEnd => Some("/>"),
            Self::TagName | Self::PropertyName | Self::PropertyValue | Self::Content => None,
        }
    }

    /// Returns true for `<` and `</`.
    #[must_use]
    pub const fn opens_tag(self) -> bool {
        matches!(self, Self::TagStart | Self::SlashTagStart)
    }

    /// Returns true for `>` and `/>`.
    #[must_use]
    pub const fn closes_tag(self) -> bool {
        matches!(self, Self::TagEnd | Self::SlashTagEnd)
    }
}

/// A classified lexeme: its kind plus the raw text it was built from.
///
/// The text is already stripped of control characters. Quoted attribute
/// values keep their quotes here; see [`crate::property::Property`] for the
/// unquoted form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Create a token of the given kind and text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a punctuation token, taking its text from the kind.
    ///
    /// Kinds without fixed text get an empty lexeme.
    #[must_use]
    pub fn punctuation(kind: TokenKind) -> Self {
        Self::new(kind, kind.fixed_text().unwrap_or_default())
    }

    /// `<`
    #[must_use]
    pub fn tag_start() -> Self {
        Self::punctuation(TokenKind::TagStart)
    }

    /// `</`
    #[must_use]
    pub fn slash_tag_start() -> Self {
        Self::punctuation(TokenKind::SlashTagStart)
    }

    /// `>`
    #[must_use]
    pub fn tag_end() -> Self {
        Self::punctuation(TokenKind::TagEnd)
    }

    /// `/>`
    #[must_use]
    pub fn slash_tag_end() -> Self {
        Self::punctuation(TokenKind::SlashTagEnd)
    }

    /// The token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the token and return its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
