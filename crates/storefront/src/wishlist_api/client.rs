//! HTTP client for the wishlist service.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use linden_core::ProductId;

use super::WishlistApiError;
use super::types::{Envelope, RemoteWishlistItem};
use crate::config::WishlistApiConfig;

/// Client for the remote wishlist API.
///
/// Cheap to clone; holds a pooled `reqwest` client configured with the
/// bearer token and request timeout from [`WishlistApiConfig`].
#[derive(Debug, Clone)]
pub struct WishlistClient {
    client: reqwest::Client,
    base_url: Url,
}

impl WishlistClient {
    /// Create a new wishlist API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(config: &WishlistApiConfig) -> Result<Self, WishlistApiError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_token.expose_secret());
        let mut auth_value = HeaderValue::from_str(&auth_value)
            .map_err(|e| WishlistApiError::Parse(format!("invalid API token format: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the current wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the envelope reports failure.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<RemoteWishlistItem>, WishlistApiError> {
        let url = self.endpoint("wishlist")?;
        let response = self.client.get(url).send().await?;
        let envelope: Envelope<Vec<RemoteWishlistItem>> = Self::decode(response).await?;
        Ok(envelope.into_data()?.unwrap_or_default())
    }

    /// Add a product to the wishlist.
    ///
    /// The server deduplicates by product id, so adding an already-saved
    /// product succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn add(&self, product: ProductId) -> Result<(), WishlistApiError> {
        let url = self.endpoint("wishlist/items")?;
        let body = serde_json::json!({ "product_id": product });
        let response = self.client.post(url).json(&body).send().await?;
        let envelope: Envelope<()> = Self::decode(response).await?;
        envelope.into_data()?;
        Ok(())
    }

    /// Remove a product from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn remove(&self, product: ProductId) -> Result<(), WishlistApiError> {
        let url = self.endpoint(&format!("wishlist/items/{product}"))?;
        let response = self.client.delete(url).send().await?;
        let envelope: Envelope<()> = Self::decode(response).await?;
        envelope.into_data()?;
        Ok(())
    }

    /// Clear the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), WishlistApiError> {
        let url = self.endpoint("wishlist")?;
        let response = self.client.delete(url).send().await?;
        let envelope: Envelope<()> = Self::decode(response).await?;
        envelope.into_data()?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, WishlistApiError> {
        self.base_url
            .join(path)
            .map_err(|e| WishlistApiError::Parse(format!("invalid endpoint path {path}: {e}")))
    }

    /// Read a response body as an envelope, surfacing non-success statuses
    /// with as much of the body as could be read.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, WishlistApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WishlistApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| WishlistApiError::Parse(e.to_string()))
    }
}
