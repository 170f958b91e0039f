//! Wishlist stores.
//!
//! Two variants share the same contract - a product id appears at most
//! once, presence is binary:
//!
//! - [`WishlistStore`] keeps its items locally and persists the item list
//!   to the snapshot store on every mutation.
//! - [`RemoteWishlist`] proxies to the wishlist service: every mutation
//!   is a request/response cycle, and a successful write triggers a full
//!   re-fetch so local state mirrors the server's source of truth.

use tracing::instrument;

use linden_core::ProductId;

use crate::models::WishlistItem;
use crate::persist::{SnapshotError, SnapshotStore, keys};
use crate::wishlist_api::{RemoteWishlistItem, WishlistApiError, WishlistClient};

// =============================================================================
// Local variant
// =============================================================================

/// Locally persisted wishlist.
#[derive(Debug)]
pub struct WishlistStore<S: SnapshotStore> {
    items: Vec<WishlistItem>,
    snapshot: S,
}

impl<S: SnapshotStore> WishlistStore<S> {
    /// Open the wishlist, rehydrating any persisted items.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    pub fn open(snapshot: S) -> Result<Self, SnapshotError> {
        let items: Vec<WishlistItem> = snapshot.load(keys::WISHLIST)?.unwrap_or_default();
        Ok(Self { items, snapshot })
    }

    /// Save a product. Idempotent: a no-op if the product id is already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn add(&mut self, item: WishlistItem) -> Result<(), SnapshotError> {
        if self.contains(item.product) {
            return Ok(());
        }
        self.items.push(item);
        self.persist()
    }

    /// Remove a saved product. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn remove(&mut self, product: ProductId) -> Result<(), SnapshotError> {
        self.items.retain(|item| item.product != product);
        self.persist()
    }

    /// Whether a product is saved.
    #[must_use]
    pub fn contains(&self, product: ProductId) -> bool {
        self.items.iter().any(|item| item.product == product)
    }

    /// Remove every saved product.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot write fails.
    pub fn clear(&mut self) -> Result<(), SnapshotError> {
        self.items.clear();
        self.persist()
    }

    /// Saved items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        // Only the item list is persisted
        self.snapshot.save(keys::WISHLIST, &self.items)
    }
}

// =============================================================================
// Remote-backed variant
// =============================================================================

/// Wishlist mirroring the remote service.
///
/// Mutations are not coordinated: a second call issued before the first's
/// refresh completes may race, and completions apply in arrival order
/// (last write wins). The store promises nothing stronger than eventual
/// consistency with the last successful server write.
#[derive(Debug)]
pub struct RemoteWishlist {
    client: WishlistClient,
    items: Vec<RemoteWishlistItem>,
    last_error: Option<String>,
}

impl RemoteWishlist {
    /// Create a remote-backed wishlist. Empty until the first
    /// [`RemoteWishlist::refresh`].
    #[must_use]
    pub const fn new(client: WishlistClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            last_error: None,
        }
    }

    /// Replace local state with the server's current wishlist.
    ///
    /// On failure prior items are preserved and the error message is
    /// recorded on the store.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), WishlistApiError> {
        match self.client.fetch().await {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "wishlist refresh failed, keeping prior items");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Save a product on the server, then re-fetch to resynchronize.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error; local items are untouched on
    /// failure.
    #[instrument(skip(self))]
    pub async fn add(&mut self, product: ProductId) -> Result<(), WishlistApiError> {
        let result = self.client.add(product).await;
        self.apply(result).await
    }

    /// Remove a product on the server, then re-fetch to resynchronize.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error; local items are untouched on
    /// failure.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, product: ProductId) -> Result<(), WishlistApiError> {
        let result = self.client.remove(product).await;
        self.apply(result).await
    }

    /// Clear the server-side wishlist, then re-fetch to resynchronize.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error; local items are untouched on
    /// failure.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<(), WishlistApiError> {
        let result = self.client.clear().await;
        self.apply(result).await
    }

    /// Whether a product is in the last fetched server state.
    #[must_use]
    pub fn contains(&self, product: ProductId) -> bool {
        self.items.iter().any(|item| item.product == product)
    }

    /// Items from the last successful fetch, in server order.
    #[must_use]
    pub fn items(&self) -> &[RemoteWishlistItem] {
        &self.items
    }

    /// Message from the last failed operation, if any. Cleared by the
    /// next successful refresh.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one mutation outcome: re-fetch on success, record the error
    /// and preserve state on failure.
    async fn apply(
        &mut self,
        result: Result<(), WishlistApiError>,
    ) -> Result<(), WishlistApiError> {
        match result {
            Ok(()) => self.refresh().await,
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
