//! Cart commands against the persisted cart store.

#![allow(clippy::print_stdout)]

use linden_core::{ProductId, VariantKey};
use linden_storefront::catalog;
use linden_storefront::stores::CartStore;

use super::open_store;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Add one unit of a catalog product variant to the cart.
pub fn add(product: i32, color: &str, size: &str) -> Result<()> {
    let snapshot = open_store()?;
    let mut cart = CartStore::open(snapshot)?;

    let products = catalog::demo_catalog();
    let product = catalog::find(&products, ProductId::new(product))
        .ok_or_else(|| format!("no catalog product with id {product}"))?;
    let item = product
        .cart_item(color, size)
        .ok_or_else(|| format!("{} is not offered in {color}/{size}", product.name))?;

    cart.add(item)?;
    println!(
        "Added {} ({color}/{size}). Cart now holds {} item(s), total {}.",
        product.name,
        cart.cart().item_count(),
        cart.cart().total()
    );
    Ok(())
}

/// Set a line's quantity; zero or below removes the line.
pub fn set_quantity(product: i32, color: &str, size: &str, quantity: i64) -> Result<()> {
    let snapshot = open_store()?;
    let mut cart = CartStore::open(snapshot)?;

    let key = VariantKey::new(ProductId::new(product), color, size);
    cart.set_quantity(&key, quantity)?;
    println!(
        "Cart now holds {} item(s), total {}.",
        cart.cart().item_count(),
        cart.cart().total()
    );
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(product: i32, color: &str, size: &str) -> Result<()> {
    let snapshot = open_store()?;
    let mut cart = CartStore::open(snapshot)?;

    let key = VariantKey::new(ProductId::new(product), color, size);
    cart.remove(&key)?;
    println!("Removed {key}. Cart now holds {} item(s).", cart.cart().item_count());
    Ok(())
}

/// Print the cart with derived totals.
pub fn list() -> Result<()> {
    let snapshot = open_store()?;
    let cart = CartStore::open(snapshot)?;

    if cart.cart().is_empty() {
        println!("Cart is empty.");
        return Ok(());
    }

    for line in cart.cart().lines() {
        println!(
            "{:>3} x {} ({}/{}) @ {} = {}",
            line.quantity,
            line.item.name,
            line.item.color,
            line.item.size,
            line.item.price,
            line.line_total()
        );
    }
    println!(
        "Total: {} ({} item(s))",
        cart.cart().total(),
        cart.cart().item_count()
    );
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<()> {
    let snapshot = open_store()?;
    let mut cart = CartStore::open(snapshot)?;
    cart.clear()?;
    println!("Cart cleared.");
    Ok(())
}
