//! Star rating for product reviews.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 1-5 range.
    #[error("rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// An integer star rating between 1 and 5 inclusive.
///
/// Out-of-range values are rejected at construction, so every stored
/// review carries a valid rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Minimum rating.
    pub const MIN: Self = Self(1);
    /// Maximum rating.
    pub const MAX: Self = Self(5);

    /// Create a rating, rejecting values outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::OutOfRange` for 0 or values above 5.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= 1 && value <= 5 {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }

    /// The underlying star count.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
