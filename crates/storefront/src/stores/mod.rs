//! State containers.
//!
//! Each store exclusively owns its collection and is mutated through
//! `&mut self` on the UI task - there is no cross-store orchestration and
//! no transaction spanning stores. Dependencies (snapshot store, API
//! client, auth backend) are injected at construction, so a store can
//! never be used "outside its provider".

pub mod auth;
pub mod cart;
pub mod reviews;
pub mod wishlist;

pub use auth::{AuthBackend, AuthError, AuthStore, InMemoryAuthBackend, Registration};
pub use cart::{Cart, CartSource, CartStore};
pub use reviews::ReviewStore;
pub use wishlist::{RemoteWishlist, WishlistStore};
