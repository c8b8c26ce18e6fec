//! Product id (SKU) newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A stable string key identifying a purchasable catalog entry.
///
/// Cart lines and catalog entries reference products exclusively through this
/// type, so a raw string can never be confused with a SKU. The value itself is
/// opaque: the cart never inspects it beyond equality.
///
/// # Example
///
/// ```
/// use casekompass_core::ProductId;
///
/// let id = ProductId::new("startklar");
/// assert_eq!(id.as_str(), "startklar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
