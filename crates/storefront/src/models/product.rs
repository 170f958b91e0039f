//! Catalog products.

use serde::{Deserialize, Serialize};

use linden_core::{Price, ProductId};

use super::cart::CartItem;
use super::wishlist::WishlistItem;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Current price.
    pub price: Price,
    /// Pre-discount price.
    pub original_price: Price,
    /// Image reference.
    pub image: String,
    /// Colors the product is offered in.
    pub colors: Vec<String>,
    /// Sizes the product is offered in.
    pub sizes: Vec<String>,
    /// Stock availability.
    pub in_stock: bool,
}

impl Product {
    /// Build the cart item for a chosen color and size.
    ///
    /// Returns `None` when the product is not offered in that combination.
    #[must_use]
    pub fn cart_item(&self, color: &str, size: &str) -> Option<CartItem> {
        if !self.colors.iter().any(|c| c == color) || !self.sizes.iter().any(|s| s == size) {
            return None;
        }
        Some(CartItem {
            product: self.id,
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.clone(),
            color: color.to_string(),
            size: size.to_string(),
            in_stock: self.in_stock,
        })
    }

    /// Build the wishlist entry for this product.
    #[must_use]
    pub fn wishlist_item(&self) -> WishlistItem {
        WishlistItem {
            product: self.id,
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.clone(),
            in_stock: self.in_stock,
        }
    }
}
