//! Identifier grammars and quote handling shared by the tokenizer and the
//! property model.
//!
//! Tag names accept `[A-Za-z0-9:._-]`, attribute names the narrower
//! `[A-Za-z0-9_-]`. Neither may be empty or start with a digit.

/// Returns true if `value` is a valid tag identifier.
#[must_use]
pub fn is_valid_identifier(value: &str) -> bool {
    has_valid_chars(value, |b| matches!(b, b':' | b'.' | b'_' | b'-'))
        && !first_char_is_digit(value)
}

/// Returns true if `value` is a valid attribute (property) name.
#[must_use]
pub fn is_valid_property(value: &str) -> bool {
    has_valid_chars(value, |b| matches!(b, b'_' | b'-')) && !first_char_is_digit(value)
}

fn has_valid_chars(value: &str, extra: impl Fn(u8) -> bool) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric() || extra(b))
}

/// Returns true if the first character of `value` is an ASCII digit.
#[must_use]
pub fn first_char_is_digit(value: &str) -> bool {
    value.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

/// Returns true if `value` is wrapped in a pair of `"`.
#[must_use]
pub fn is_double_quoted(value: &str) -> bool {
    is_wrapped_in(value, b'"')
}

/// Returns true if `value` is wrapped in a pair of `'`.
#[must_use]
pub fn is_single_quoted(value: &str) -> bool {
    is_wrapped_in(value, b'\'')
}

fn is_wrapped_in(value: &str, quote: u8) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 2 && bytes[0] == quote && bytes[bytes.len() - 1] == quote
}

/// Strip one matching pair of wrapping quotes.
///
/// Unquoted values and values with mismatched quotes (`"x'`) come back as is.
#[must_use]
pub fn remove_quotes(value: &str) -> &str {
    if is_double_quoted(value) || is_single_quoted(value) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
