//! Demo catalog.
//!
//! Mock product data backing the browsing surfaces, the CLI seed
//! command, and tests. Prices are the current sale price paired with the
//! pre-discount price; products at full price carry the same value in
//! both.

use linden_core::{Price, ProductId};

use crate::models::Product;

/// The built-in demo catalog.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Field Jacket",
            "field-jacket",
            12800,
            16000,
            &["Olive", "Charcoal"],
            &["S", "M", "L", "XL"],
            true,
        ),
        product(
            2,
            "Harbor Tee",
            "harbor-tee",
            3200,
            3200,
            &["White", "Navy", "Sage"],
            &["XS", "S", "M", "L", "XL"],
            true,
        ),
        product(
            3,
            "Dune Overshirt",
            "dune-overshirt",
            9800,
            9800,
            &["Sand", "Rust"],
            &["S", "M", "L"],
            true,
        ),
        product(
            4,
            "Coastline Chino",
            "coastline-chino",
            7400,
            8800,
            &["Khaki", "Stone", "Navy"],
            &["28", "30", "32", "34", "36"],
            true,
        ),
        product(
            5,
            "Summit Fleece",
            "summit-fleece",
            11200,
            11200,
            &["Heather Gray", "Pine"],
            &["S", "M", "L", "XL"],
            false,
        ),
        product(
            6,
            "Meridian Beanie",
            "meridian-beanie",
            2800,
            3600,
            &["Black", "Oat", "Rust"],
            &["One Size"],
            true,
        ),
    ]
}

/// Look up a catalog product by id.
#[must_use]
pub fn find(catalog: &[Product], id: ProductId) -> Option<&Product> {
    catalog.iter().find(|p| p.id == id)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i32,
    name: &str,
    slug: &str,
    price_cents: i64,
    original_cents: i64,
    colors: &[&str],
    sizes: &[&str],
    in_stock: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        slug: slug.to_string(),
        price: Price::from_cents(price_cents),
        original_price: Price::from_cents(original_cents),
        image: format!("/img/products/{slug}.jpg"),
        colors: colors.iter().map(ToString::to_string).collect(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
        in_stock,
    }
}
