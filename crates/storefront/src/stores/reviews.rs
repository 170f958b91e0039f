//! Reviews store.
//!
//! Reviews are append-only: created with a generated id, the submission
//! timestamp, and a helpful count of zero, then mutated only by helpful-
//! vote increments. Aggregates (average rating, histogram) are derived on
//! every read.

use chrono::Utc;

use linden_core::{ProductId, ReviewId};

use crate::models::{NewReview, Review};

/// In-memory review collection for all products.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reviews: Vec::new(),
        }
    }

    /// Create a store pre-populated with reviews, for seeding.
    #[must_use]
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Submit a review. Assigns a fresh id and the current time, starts
    /// the helpful count at zero, and appends.
    pub fn add(&mut self, new: NewReview) -> &Review {
        let review = Review {
            id: ReviewId::generate(),
            product: new.product,
            author: new.author,
            rating: new.rating,
            title: new.title,
            comment: new.comment,
            submitted_at: Utc::now(),
            verified_purchase: new.verified_purchase,
            helpful_count: 0,
            images: new.images,
            size: new.size,
            color: new.color,
        };
        self.reviews.push(review);
        // Just pushed, so the collection is non-empty
        self.reviews.last().expect("review just appended")
    }

    /// Reviews for a product, in insertion order.
    #[must_use]
    pub fn list_for(&self, product: ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.product == product)
            .collect()
    }

    /// Count one helpful vote for a review.
    ///
    /// Returns whether the review was found; a no-op on an absent id.
    pub fn mark_helpful(&mut self, id: ReviewId) -> bool {
        match self.reviews.iter_mut().find(|review| review.id == id) {
            Some(review) => {
                review.helpful_count += 1;
                true
            }
            None => false,
        }
    }

    /// Arithmetic mean of a product's ratings, rounded to one decimal
    /// place. Zero when the product has no reviews.
    #[must_use]
    pub fn average_rating(&self, product: ProductId) -> f64 {
        let ratings: Vec<u8> = self
            .reviews
            .iter()
            .filter(|review| review.product == product)
            .map(|review| review.rating.stars())
            .collect();

        if ratings.is_empty() {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = f64::from(ratings.iter().map(|&r| u32::from(r)).sum::<u32>())
            / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Review counts at each rating level for a product.
    ///
    /// Index 0 holds one-star counts, index 4 five-star counts; every
    /// level is present even when zero.
    #[must_use]
    pub fn rating_histogram(&self, product: ProductId) -> [u32; 5] {
        let mut histogram = [0u32; 5];
        for review in self.reviews.iter().filter(|r| r.product == product) {
            let level = usize::from(review.rating.stars() - 1);
            if let Some(count) = histogram.get_mut(level) {
                *count += 1;
            }
        }
        histogram
    }

    /// All reviews, across products, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Review] {
        &self.reviews
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use linden_core::{AuthorId, Rating};

    use super::*;
    use crate::models::ReviewAuthor;

    fn new_review(product: i32, rating: u8) -> NewReview {
        NewReview {
            product: ProductId::new(product),
            author: ReviewAuthor {
                id: AuthorId::new(11),
                name: "Riley Okafor".to_string(),
                avatar: None,
            },
            rating: Rating::new(rating).unwrap(),
            title: "Holds up well".to_string(),
            comment: "Wore it through a wet week in Portland.".to_string(),
            verified_purchase: true,
            images: Vec::new(),
            size: Some("M".to_string()),
            color: None,
        }
    }

    #[test]
    fn test_add_assigns_generated_fields() {
        let mut store = ReviewStore::new();
        let first = store.add(new_review(1, 4));
        assert_eq!(first.helpful_count, 0);
        assert_eq!(first.rating.stars(), 4);
        let first_id = first.id;

        let second_id = store.add(new_review(1, 5)).id;
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_list_for_preserves_insertion_order() {
        let mut store = ReviewStore::new();
        store.add(new_review(1, 5));
        store.add(new_review(2, 3));
        store.add(new_review(1, 4));

        let listed = store.list_for(ProductId::new(1));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].rating.stars(), 5);
        assert_eq!(listed[1].rating.stars(), 4);
    }

    #[test]
    fn test_mark_helpful_targets_one_review() {
        let mut store = ReviewStore::new();
        let first = store.add(new_review(1, 5)).id;
        store.add(new_review(1, 4));

        assert!(store.mark_helpful(first));
        assert!(store.mark_helpful(first));

        assert_eq!(store.all()[0].helpful_count, 2);
        assert_eq!(store.all()[1].helpful_count, 0);
    }

    #[test]
    fn test_mark_helpful_absent_id_is_noop() {
        let mut store = ReviewStore::new();
        store.add(new_review(1, 5));
        assert!(!store.mark_helpful(ReviewId::generate()));
        assert_eq!(store.all()[0].helpful_count, 0);
    }

    #[test]
    fn test_average_rating_empty_is_zero() {
        let store = ReviewStore::new();
        assert_eq!(store.average_rating(ProductId::new(1)), 0.0);
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        let mut store = ReviewStore::new();
        for rating in [5, 4, 5] {
            store.add(new_review(1, rating));
        }
        assert_eq!(store.average_rating(ProductId::new(1)), 4.7);
    }

    #[test]
    fn test_average_rating_ignores_other_products() {
        let mut store = ReviewStore::new();
        store.add(new_review(1, 5));
        store.add(new_review(2, 1));
        assert_eq!(store.average_rating(ProductId::new(1)), 5.0);
    }

    #[test]
    fn test_rating_histogram_has_all_levels() {
        let mut store = ReviewStore::new();
        for rating in [5, 5, 4, 2] {
            store.add(new_review(1, rating));
        }
        assert_eq!(store.rating_histogram(ProductId::new(1)), [0, 1, 0, 1, 2]);
        assert_eq!(store.rating_histogram(ProductId::new(9)), [0, 0, 0, 0, 0]);
    }
}
