//! Typed attribute values.
//!
//! The tokenizer hands out attribute names and values as raw text. A
//! [`Property`] is the validated form: a checked name, and either a value
//! with its quotes stripped or a boolean.

mod error;
mod tokens;

use std::fmt;

use strum_macros::Display;

pub use error::PropertyError;
pub use tokens::{Properties, properties};

use crate::identifier::{is_valid_property, remove_quotes};

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Whether a property carries a value or is a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PropertyKind {
    /// `name="value"`
    Value,
    /// `name` on its own, or `name="true"` / `name="false"`.
    Boolean,
}

/// A single validated attribute.
///
/// Built fresh per attribute. The setters re-validate on every change, so a
/// `Property` always satisfies:
/// - `name` is non-empty and a valid property identifier
/// - a boolean property's `value` is exactly `"true"` or `"false"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    kind: PropertyKind,
    name: String,
    value: String,
}

impl Property {
    /// Build a property by applying `set_kind`, `set_name` and `set_value`
    /// in that order.
    ///
    /// Because the kind is set first, a boolean property starts out as
    /// `"true"`; a value that is not a boolean literal then leaves it there
    /// instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::EmptyName`] or [`PropertyError::InvalidName`]
    /// if `name` is not a valid property name.
    pub fn new(kind: PropertyKind, name: &str, value: &str) -> Result<Self, PropertyError> {
        let mut property = Self {
            kind: PropertyKind::Value,
            name: String::new(),
            value: String::new(),
        };

        property.set_kind(kind);
        property.set_name(name)?;

        match property.set_value(value) {
            Ok(()) | Err(PropertyError::InvalidBooleanValue { .. }) => Ok(property),
            Err(err) => Err(err),
        }
    }

    /// Shorthand for a value-bearing property.
    ///
    /// # Errors
    ///
    /// Same as [`Property::new`].
    pub fn value_of(name: &str, value: &str) -> Result<Self, PropertyError> {
        Self::new(PropertyKind::Value, name, value)
    }

    /// Shorthand for a boolean property set to `true`.
    ///
    /// # Errors
    ///
    /// Same as [`Property::new`].
    pub fn flag(name: &str) -> Result<Self, PropertyError> {
        Self::new(PropertyKind::Boolean, name, TRUE)
    }

    /// The property's kind.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns true for boolean properties.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self.kind, PropertyKind::Boolean)
    }

    /// The validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored value, without quotes.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value of a boolean property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::BooleanValue`] if the property is not boolean.
    pub fn boolean_value(&self) -> Result<bool, PropertyError> {
        if !self.is_boolean() {
            return Err(PropertyError::BooleanValue);
        }
        Ok(self.value == TRUE)
    }

    /// Change the kind. Turning a value property into a boolean one coerces
    /// the value to `"true"` unless it already is a boolean literal.
    pub fn set_kind(&mut self, kind: PropertyKind) {
        if self.kind == PropertyKind::Value
            && kind == PropertyKind::Boolean
            && !is_boolean_literal(&self.value)
        {
            TRUE.clone_into(&mut self.value);
        }
        self.kind = kind;
    }

    /// Change the name. Surrounding whitespace is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::EmptyName`] if nothing is left after trimming,
    /// and [`PropertyError::InvalidName`] if the rest is not a valid
    /// property name. The old name is kept on error.
    pub fn set_name(&mut self, name: &str) -> Result<(), PropertyError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PropertyError::EmptyName);
        }
        if !is_valid_property(trimmed) {
            return Err(PropertyError::InvalidName {
                name: trimmed.to_string(),
            });
        }

        trimmed.clone_into(&mut self.name);
        Ok(())
    }

    /// Change the value. One matching pair of wrapping quotes is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidBooleanValue`] if the property is
    /// boolean and `value` is neither `"true"` nor `"false"`. The old value
    /// is kept on error.
    pub fn set_value(&mut self, value: &str) -> Result<(), PropertyError> {
        if self.is_boolean() && !is_boolean_literal(value) {
            return Err(PropertyError::InvalidBooleanValue {
                value: value.to_string(),
            });
        }

        remove_quotes(value).clone_into(&mut self.value);
        Ok(())
    }
}

fn is_boolean_literal(value: &str) -> bool {
    value == TRUE || value == FALSE
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PropertyKind::Boolean if self.value == TRUE => write!(f, "{}", self.name),
            _ => write!(f, "{}=\"{}\"", self.name, self.value),
        }
    }
}
