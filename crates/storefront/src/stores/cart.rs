//! Cart store.
//!
//! Lines are keyed by the composite (product, color, size) variant key:
//! adding a matching item increments the existing line instead of
//! duplicating it, and setting a quantity at or below zero collapses to
//! removal. Totals are derived on every read, never stored.

use tracing::instrument;

use linden_core::{Price, VariantKey};

use crate::models::{CartItem, CartLine};
use crate::persist::{SnapshotError, SnapshotStore, keys};

// =============================================================================
// Cart collection
// =============================================================================

/// The cart's line collection with its consistency rules.
///
/// Pure in-memory; [`CartStore`] layers persistence on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from previously stored lines.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Add one unit of a variant.
    ///
    /// If a line with the same (product, color, size) key exists its
    /// quantity is incremented; otherwise a new line is appended with
    /// quantity 1. Always succeeds.
    pub fn add(&mut self, item: CartItem) {
        let key = item.key();
        match self.lines.iter_mut().find(|line| line.key() == key) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from(item)),
        }
    }

    /// Remove the line with the given key. No-op if absent.
    pub fn remove(&mut self, key: &VariantKey) {
        self.lines.retain(|line| line.key() != *key);
    }

    /// Set the quantity of the line with the given key.
    ///
    /// A quantity at or below zero is equivalent to [`Cart::remove`]. No
    /// upper bound is enforced. No-op if the key is absent and `quantity`
    /// is positive.
    pub fn set_quantity(&mut self, key: &VariantKey, quantity: i64) {
        if quantity <= 0 {
            self.remove(key);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.key() == *key) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of unit price x quantity over all lines. Recomputed on every
    /// call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Remote source seam
// =============================================================================

/// Remote origin a server-backed cart replaces its lines from.
///
/// The concrete cart service is a collaborator outside this crate; tests
/// and callers provide implementations.
pub trait CartSource {
    /// Error the source can fail with.
    type Error: core::fmt::Display;

    /// Fetch the current server-side cart lines.
    fn fetch_cart(&self) -> impl Future<Output = Result<Vec<CartLine>, Self::Error>>;
}

// =============================================================================
// Persisted store
// =============================================================================

/// Cart store persisting a snapshot on every mutation.
///
/// Rehydrates from the snapshot on open, so a cart survives process
/// restarts.
#[derive(Debug)]
pub struct CartStore<S: SnapshotStore> {
    cart: Cart,
    snapshot: S,
    last_error: Option<String>,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Open the cart store, rehydrating any persisted lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    pub fn open(snapshot: S) -> Result<Self, SnapshotError> {
        let lines: Vec<CartLine> = snapshot.load(keys::CART)?.unwrap_or_default();
        Ok(Self {
            cart: Cart::from_lines(lines),
            snapshot,
            last_error: None,
        })
    }

    /// Add one unit of a variant and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails; the in-memory cart is
    /// updated regardless.
    pub fn add(&mut self, item: CartItem) -> Result<(), SnapshotError> {
        self.cart.add(item);
        self.persist()
    }

    /// Remove a line and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn remove(&mut self, key: &VariantKey) -> Result<(), SnapshotError> {
        self.cart.remove(key);
        self.persist()
    }

    /// Set a line's quantity (≤ 0 removes it) and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn set_quantity(&mut self, key: &VariantKey, quantity: i64) -> Result<(), SnapshotError> {
        self.cart.set_quantity(key, quantity);
        self.persist()
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn clear(&mut self) -> Result<(), SnapshotError> {
        self.cart.clear();
        self.persist()
    }

    /// Replace the collection with lines fetched from a remote source.
    ///
    /// On source failure the prior lines are left untouched and the error
    /// message is recorded on the store; on success any recorded message
    /// is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the fetched lines fails.
    #[instrument(skip(self, source))]
    pub async fn fetch<F: CartSource>(&mut self, source: &F) -> Result<(), SnapshotError> {
        match source.fetch_cart().await {
            Ok(lines) => {
                self.cart = Cart::from_lines(lines);
                self.last_error = None;
                self.persist()
            }
            Err(e) => {
                tracing::warn!(error = %e, "cart fetch failed, keeping prior lines");
                self.last_error = Some(e.to_string());
                Ok(())
            }
        }
    }

    /// The underlying cart collection.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Message from the last failed fetch, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        self.snapshot.save(keys::CART, &self.cart.lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use linden_core::{Price, ProductId};

    use super::*;
    use crate::persist::MemoryStore;

    fn item(product: i32, color: &str, size: &str) -> CartItem {
        CartItem {
            product: ProductId::new(product),
            name: format!("Product {product}"),
            price: Price::from_cents(4500),
            original_price: Price::from_cents(6000),
            image: format!("/img/{product}.jpg"),
            color: color.to_string(),
            size: size.to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_add_same_key_increments() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add(item(1, "Red", "M"));
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_add_distinct_sizes_make_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(item(1, "Red", "M"));
        cart.add(item(1, "Red", "M"));
        cart.add(item(1, "Red", "L"));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].item.size, "M");
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].item.size, "L");
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        for n in [0, -3] {
            let mut cart = Cart::new();
            cart.add(item(1, "Red", "M"));
            let key = cart.lines()[0].key();

            let mut removed = cart.clone();
            removed.remove(&key);

            cart.set_quantity(&key, n);
            assert_eq!(cart, removed);
            assert!(cart.is_empty());
        }
    }

    #[test]
    fn test_set_quantity_positive() {
        let mut cart = Cart::new();
        cart.add(item(1, "Red", "M"));
        let key = cart.lines()[0].key();
        cart.set_quantity(&key, 12);
        assert_eq!(cart.lines()[0].quantity, 12);
    }

    #[test]
    fn test_set_quantity_absent_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(item(1, "Red", "M"));
        cart.set_quantity(&VariantKey::new(ProductId::new(9), "Red", "M"), 2);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(item(1, "Red", "M"));
        cart.remove(&VariantKey::new(ProductId::new(2), "Red", "M"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_totals_are_derived() {
        let mut cart = Cart::new();
        cart.add(item(1, "Red", "M"));
        cart.add(item(1, "Red", "M"));
        cart.add(item(2, "Blue", "S"));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::from_cents(13500));

        let key = cart.lines()[0].key();
        cart.set_quantity(&key, 5);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.total(), Price::from_cents(27000));

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_store_rehydrates_from_snapshot() {
        let snapshot = MemoryStore::default();
        {
            let mut store = CartStore::open(&snapshot).unwrap();
            store.add(item(1, "Red", "M")).unwrap();
            store.add(item(1, "Red", "M")).unwrap();
        }

        let store = CartStore::open(&snapshot).unwrap();
        assert_eq!(store.cart().item_count(), 2);
        assert_eq!(store.cart().lines().len(), 1);
    }

    struct FailingSource;

    impl CartSource for FailingSource {
        type Error = String;

        async fn fetch_cart(&self) -> Result<Vec<CartLine>, Self::Error> {
            Err("cart service unavailable".to_string())
        }
    }

    struct FixedSource(Vec<CartLine>);

    impl CartSource for FixedSource {
        type Error = String;

        async fn fetch_cart(&self) -> Result<Vec<CartLine>, Self::Error> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_preserves_state_and_records_error() {
        let mut store = CartStore::open(MemoryStore::default()).unwrap();
        store.add(item(1, "Red", "M")).unwrap();

        store.fetch(&FailingSource).await.unwrap();

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.last_error(), Some("cart service unavailable"));
    }

    #[tokio::test]
    async fn test_fetch_success_replaces_lines_and_clears_error() {
        let mut store = CartStore::open(MemoryStore::default()).unwrap();
        store.add(item(1, "Red", "M")).unwrap();
        store.fetch(&FailingSource).await.unwrap();

        let server_lines = vec![CartLine {
            item: item(7, "Sage", "L"),
            quantity: 2,
        }];
        store.fetch(&FixedSource(server_lines.clone())).await.unwrap();

        assert_eq!(store.cart().lines(), server_lines.as_slice());
        assert!(store.last_error().is_none());
    }
}
