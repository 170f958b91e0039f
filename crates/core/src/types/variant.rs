//! Cart variant key.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// The composite key identifying one cart line: a product in a specific
/// color and size.
///
/// The cart holds at most one line per key; adding a matching item
/// increments the existing line's quantity instead of duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    /// Product the line refers to.
    pub product: ProductId,
    /// Chosen color.
    pub color: String,
    /// Chosen size.
    pub size: String,
}

impl VariantKey {
    /// Create a variant key.
    #[must_use]
    pub fn new(product: ProductId, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            product,
            color: color.into(),
            size: size.into(),
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.product, self.color, self.size)
    }
}
