//! Shared helpers for Linden integration tests.
//!
//! The wishlist service is mocked with `wiremock`, so these tests run
//! hermetically - no live service or credentials required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use linden_storefront::config::WishlistApiConfig;
use linden_storefront::wishlist_api::WishlistClient;

/// Test bearer token the mock server expects.
pub const TEST_TOKEN: &str = "wl_test_0b14";

/// Build a wishlist client pointed at a mock server.
///
/// # Panics
///
/// Panics if `base_url` does not parse; test URLs come from wiremock and
/// always do.
#[must_use]
pub fn test_client(base_url: &str) -> WishlistClient {
    let config = WishlistApiConfig {
        base_url: Url::parse(&format!("{base_url}/")).expect("mock server URL should parse"),
        api_token: SecretString::from(TEST_TOKEN),
        timeout: Duration::from_secs(5),
    };
    WishlistClient::new(&config).expect("client construction should not fail")
}

/// Envelope body for a wishlist fetch returning the given items.
#[must_use]
pub fn wishlist_body(items: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({ "success": true, "data": items })
}

/// A remote wishlist item body.
#[must_use]
pub fn remote_item(product: i32, name: &str) -> serde_json::Value {
    serde_json::json!({
        "product_id": product,
        "name": name,
        "price": "54.00",
        "image": format!("/img/products/{product}.jpg"),
        "slug": name.to_lowercase().replace(' ', "-"),
        "in_stock": true,
        "added_at": "2026-07-14T09:30:00Z"
    })
}
