//! Linden Supply Co. storefront state engine.
//!
//! This crate holds the client-side state of the storefront as explicit,
//! constructor-injected context objects rather than process-wide
//! singletons:
//!
//! - [`stores::cart`] - cart line items with derived totals
//! - [`stores::wishlist`] - saved products, local and remote-backed
//! - [`stores::auth`] - session lifecycle over an async auth backend
//! - [`stores::reviews`] - product reviews with derived aggregates
//! - [`marketing`] - newsletter popup gate and search history
//!
//! Durable state is written through the [`persist::SnapshotStore`] seam;
//! the remote wishlist is reached through [`wishlist_api::WishlistClient`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod marketing;
pub mod models;
pub mod persist;
pub mod stores;
pub mod wishlist_api;
