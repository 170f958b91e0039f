//! Seed the data directory with demo state.

#![allow(clippy::print_stdout)]

use linden_storefront::catalog;
use linden_storefront::marketing::SearchHistory;
use linden_storefront::stores::{CartStore, WishlistStore};

use super::open_store;

/// Write a demo cart, wishlist, and search history to the data directory.
///
/// Existing state is replaced, so a fresh checkout and a stale data
/// directory end up identical.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened or a snapshot
/// write fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = open_store()?;
    let products = catalog::demo_catalog();

    let mut cart = CartStore::open(&snapshot)?;
    cart.clear()?;
    for (slug, color, size, units) in [
        ("field-jacket", "Olive", "M", 1),
        ("harbor-tee", "Navy", "M", 2),
    ] {
        let product = products
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| format!("demo catalog is missing {slug}"))?;
        let item = product
            .cart_item(color, size)
            .ok_or_else(|| format!("{slug} is not offered in {color}/{size}"))?;
        for _ in 0..units {
            cart.add(item.clone())?;
        }
    }

    let mut wishlist = WishlistStore::open(&snapshot)?;
    wishlist.clear()?;
    for slug in ["dune-overshirt", "summit-fleece"] {
        let product = products
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| format!("demo catalog is missing {slug}"))?;
        wishlist.add(product.wishlist_item())?;
    }

    let mut history = SearchHistory::open(&snapshot)?;
    history.clear()?;
    for query in ["overshirt", "linen", "beanie"] {
        history.record(query)?;
    }

    println!(
        "Seeded {} cart item(s), {} wishlist item(s), {} search queries into {}.",
        cart.cart().item_count(),
        wishlist.len(),
        history.recent().len(),
        snapshot.data_dir().display()
    );
    Ok(())
}
