//! Linden Core - Shared types library.
//!
//! This crate provides common types used across all Linden Supply Co.
//! components:
//! - `storefront` - Stores, persistence, and the wishlist API client
//! - `cli` - Command-line tools for seeding and store management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no persistence,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   ratings, and cart variant keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
