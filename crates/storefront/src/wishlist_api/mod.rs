//! Remote wishlist API client.
//!
//! The wishlist service is a collaborator exposing four operations -
//! fetch, add by product id, remove by product id, clear - each returning
//! a success/failure envelope with an optional error message. The client
//! speaks plain JSON over HTTP with a bearer token and a request timeout.

mod client;
mod types;

pub use client::WishlistClient;
pub use types::{Envelope, RemoteWishlistItem};

use thiserror::Error;

/// Errors that can occur when calling the wishlist API.
#[derive(Debug, Error)]
pub enum WishlistApiError {
    /// HTTP request failed (connect, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The service answered 2xx but reported failure in the envelope.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not decode as an envelope.
    #[error("Parse error: {0}")]
    Parse(String),
}
