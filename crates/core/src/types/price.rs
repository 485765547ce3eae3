//! Price representation that preserves Shopify's decimal strings.
//!
//! Shopify's `Money` scalar is a decimal encoded as a string (e.g. `"19.90"`).
//! The value is carried verbatim so no precision or formatting is lost on the
//! way to the caller.

use serde::{Deserialize, Serialize};

/// A decimal amount exactly as the platform reported it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(String);

impl Money {
    /// Create a new amount from its decimal string.
    #[must_use]
    pub fn new(amount: impl Into<String>) -> Self {
        Self(amount.into())
    }

    /// Get the decimal string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Money {
    fn from(amount: String) -> Self {
        Self(amount)
    }
}
