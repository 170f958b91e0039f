//! Wire types for the wishlist API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use linden_core::{Price, ProductId};

use super::WishlistApiError;

/// Success/failure wrapper every wishlist endpoint returns.
///
/// Carries either data or a human-readable error message; users never see
/// raw error codes.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload, present on success for endpoints that return data.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable message, present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns `WishlistApiError::Rejected` with the service's message
    /// when `success` is false.
    pub fn into_data(self) -> Result<Option<T>, WishlistApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(WishlistApiError::Rejected(
                self.error
                    .unwrap_or_else(|| "wishlist request failed".to_string()),
            ))
        }
    }
}

/// A wishlist entry as the server stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteWishlistItem {
    /// Saved product.
    #[serde(rename = "product_id")]
    pub product: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Image reference.
    pub image: String,
    /// URL slug.
    pub slug: String,
    /// Stock availability.
    pub in_stock: bool,
    /// When the product was saved.
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let envelope: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(envelope.into_data().unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let envelope: Envelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": false, "error": "not signed in"}"#).unwrap();
        match envelope.into_data() {
            Err(WishlistApiError::Rejected(msg)) => assert_eq!(msg, "not signed in"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_failure_without_message() {
        let envelope: Envelope<()> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(
            envelope.into_data(),
            Err(WishlistApiError::Rejected(_))
        ));
    }

    #[test]
    fn test_remote_item_decodes() {
        let item: RemoteWishlistItem = serde_json::from_str(
            r#"{
                "product_id": 7,
                "name": "Dune Overshirt",
                "price": "98.00",
                "image": "/img/dune-overshirt.jpg",
                "slug": "dune-overshirt",
                "in_stock": true,
                "added_at": "2026-07-14T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(item.product, ProductId::new(7));
        assert_eq!(item.price, Price::from_cents(9800));
    }
}
