//! Wishlist entries (local variant).

use serde::{Deserialize, Serialize};

use linden_core::{Price, ProductId};

/// A saved product in the locally persisted wishlist.
///
/// Presence is binary - there is no quantity, and a product id appears at
/// most once in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Saved product.
    pub product: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Pre-discount price.
    pub original_price: Price,
    /// Image reference.
    pub image: String,
    /// Stock availability at the time of saving.
    pub in_stock: bool,
}
