//! Property parameters (RFC 5545 §3.2).

/// A single-valued property parameter, e.g. `VALUE=DATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Uppercase parameter name.
    pub name: String,
    /// Unescaped value.
    pub value: String,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    /// `VALUE=<type>`, overriding a property's default value type.
    #[must_use]
    pub fn value_type(value_type: impl Into<String>) -> Self {
        Self::new("VALUE", value_type)
    }
}
