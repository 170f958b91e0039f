//! Cart line items.

use serde::{Deserialize, Serialize};

use linden_core::{Price, ProductId, VariantKey};

/// A product variant as handed to the cart by a product page.
///
/// Carries everything a line needs except the quantity, which the cart
/// manages itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product being added.
    pub product: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Pre-discount price.
    pub original_price: Price,
    /// Image reference.
    pub image: String,
    /// Chosen color.
    pub color: String,
    /// Chosen size.
    pub size: String,
    /// Stock availability at the time of adding.
    pub in_stock: bool,
}

impl CartItem {
    /// The composite key this item resolves to in the cart.
    #[must_use]
    pub fn key(&self) -> VariantKey {
        VariantKey::new(self.product, self.color.clone(), self.size.clone())
    }
}

/// One line of the cart: a product variant and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The variant on this line.
    #[serde(flatten)]
    pub item: CartItem,
    /// Units of the variant. Always positive; a line at quantity zero is
    /// removed instead of kept.
    pub quantity: u32,
}

impl CartLine {
    /// The composite key identifying this line.
    #[must_use]
    pub fn key(&self) -> VariantKey {
        self.item.key()
    }

    /// Price of the whole line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}

impl From<CartItem> for CartLine {
    fn from(item: CartItem) -> Self {
        Self { item, quantity: 1 }
    }
}
