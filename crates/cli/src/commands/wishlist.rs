//! Wishlist commands, local and remote.

#![allow(clippy::print_stdout)]

use linden_core::ProductId;
use linden_storefront::catalog;
use linden_storefront::config::StorefrontConfig;
use linden_storefront::stores::{RemoteWishlist, WishlistStore};
use linden_storefront::wishlist_api::WishlistClient;

use super::open_store;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Save a catalog product to the local wishlist.
pub fn add(product: i32) -> Result<()> {
    let snapshot = open_store()?;
    let mut wishlist = WishlistStore::open(snapshot)?;

    let products = catalog::demo_catalog();
    let product = catalog::find(&products, ProductId::new(product))
        .ok_or_else(|| format!("no catalog product with id {product}"))?;

    wishlist.add(product.wishlist_item())?;
    println!("Saved {}. Wishlist holds {} item(s).", product.name, wishlist.len());
    Ok(())
}

/// Remove a saved product from the local wishlist.
pub fn remove(product: i32) -> Result<()> {
    let snapshot = open_store()?;
    let mut wishlist = WishlistStore::open(snapshot)?;
    wishlist.remove(ProductId::new(product))?;
    println!("Wishlist holds {} item(s).", wishlist.len());
    Ok(())
}

/// Print the local wishlist.
pub fn list() -> Result<()> {
    let snapshot = open_store()?;
    let wishlist = WishlistStore::open(snapshot)?;

    if wishlist.is_empty() {
        println!("Wishlist is empty.");
        return Ok(());
    }

    for item in wishlist.items() {
        let stock = if item.in_stock { "" } else { " (out of stock)" };
        println!("#{} {} @ {}{stock}", item.product, item.name, item.price);
    }
    Ok(())
}

/// Clear the local wishlist.
pub fn clear() -> Result<()> {
    let snapshot = open_store()?;
    let mut wishlist = WishlistStore::open(snapshot)?;
    wishlist.clear()?;
    println!("Wishlist cleared.");
    Ok(())
}

/// Fetch and print the remote wishlist.
pub async fn sync() -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let api_config = config
        .wishlist_api
        .ok_or("WISHLIST_API_URL is not configured")?;

    let client = WishlistClient::new(&api_config)?;
    let mut remote = RemoteWishlist::new(client);
    remote.refresh().await?;

    if remote.items().is_empty() {
        println!("Remote wishlist is empty.");
        return Ok(());
    }

    for item in remote.items() {
        println!(
            "#{} {} @ {} (added {})",
            item.product,
            item.name,
            item.price,
            item.added_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}
