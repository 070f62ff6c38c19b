use thiserror::Error;

/// Validation failures of a [`super::Property`].
///
/// Each one is terminal for the single attribute it concerns; the caller
/// decides whether to skip the attribute, default it, or give up on the tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// `boolean_value` was asked of a value-bearing property.
    #[error("cannot get boolean value of a non-boolean property")]
    BooleanValue,

    /// The name contains characters outside `[A-Za-z0-9_-]` or starts with a digit.
    #[error("the property name '{name}' is not valid")]
    InvalidName {
        /// The trimmed name that was rejected.
        name: String,
    },

    /// The name is empty once surrounding whitespace is trimmed.
    #[error("property name must not be empty")]
    EmptyName,

    /// A boolean property was given something other than `true` or `false`.
    #[error("boolean property value must be either 'true' or 'false', got '{value}'")]
    InvalidBooleanValue {
        /// The rejected value.
        value: String,
    },
}
