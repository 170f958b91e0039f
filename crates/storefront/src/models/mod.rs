//! Domain models owned by the storefront stores.
//!
//! Each store owns independent copies of these values - a cart line and a
//! wishlist entry for the same product never share an object.

pub mod cart;
pub mod product;
pub mod review;
pub mod user;
pub mod wishlist;

pub use cart::{CartItem, CartLine};
pub use product::Product;
pub use review::{NewReview, Review, ReviewAuthor};
pub use user::{Session, TokenPair, User};
pub use wishlist::WishlistItem;
