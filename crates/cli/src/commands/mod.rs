//! CLI command implementations.

pub mod cart;
pub mod seed;
pub mod wishlist;

use linden_storefront::config::StorefrontConfig;
use linden_storefront::persist::FileStore;

/// Open the file snapshot store at the configured data directory.
fn open_store() -> Result<FileStore, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(FileStore::open(config.data_dir)?)
}
