//! Product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use linden_core::{AuthorId, ProductId, Rating, ReviewId};

/// The person who wrote a review.
///
/// Carried by value on the review rather than referencing the auth store -
/// stores never share entities by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    /// Author's id.
    pub id: AuthorId,
    /// Display name.
    pub name: String,
    /// Avatar image reference.
    pub avatar: Option<String>,
}

/// A submitted product review.
///
/// Created with a generated id, the submission timestamp, and a helpful
/// count of zero; afterwards only the helpful count changes, and only
/// upward. Reviews are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Generated identifier.
    pub id: ReviewId,
    /// Product the review is for.
    pub product: ProductId,
    /// Who wrote it.
    pub author: ReviewAuthor,
    /// Star rating, 1-5.
    pub rating: Rating,
    /// Short headline.
    pub title: String,
    /// Free-text body.
    pub comment: String,
    /// When the review was submitted.
    pub submitted_at: DateTime<Utc>,
    /// Whether the author bought the product through the store.
    pub verified_purchase: bool,
    /// Helpful votes. Non-negative, monotonically increasing.
    pub helpful_count: u32,
    /// Optional photos attached to the review.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Size the author bought, if they shared it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Color the author bought, if they shared it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A review as submitted by the author, before the store assigns the
/// generated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Product the review is for.
    pub product: ProductId,
    /// Who wrote it.
    pub author: ReviewAuthor,
    /// Star rating, 1-5.
    pub rating: Rating,
    /// Short headline.
    pub title: String,
    /// Free-text body.
    pub comment: String,
    /// Whether the author bought the product through the store.
    pub verified_purchase: bool,
    /// Optional photos attached to the review.
    pub images: Vec<String>,
    /// Size the author bought, if they shared it.
    pub size: Option<String>,
    /// Color the author bought, if they shared it.
    pub color: Option<String>,
}
