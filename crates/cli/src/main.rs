//! Linden CLI - Store seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the data directory with demo cart and wishlist state
//! linden seed
//!
//! # Work with the persisted cart
//! linden cart add --product 1 --color Olive --size M
//! linden cart set-quantity --product 1 --color Olive --size M --quantity 3
//! linden cart list
//!
//! # Work with the persisted wishlist
//! linden wishlist add --product 2
//! linden wishlist list
//!
//! # Mirror the remote wishlist (requires WISHLIST_API_URL/_TOKEN)
//! linden wishlist sync
//! ```
//!
//! # Commands
//!
//! - `seed` - Write demo state to the data directory
//! - `cart` - Inspect and mutate the persisted cart
//! - `wishlist` - Inspect and mutate the wishlist, local or remote

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "linden")]
#[command(author, version, about = "Linden Supply Co. CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write demo state to the data directory
    Seed,
    /// Inspect and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect and mutate the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a catalog product variant
    Add {
        /// Catalog product id
        #[arg(short, long)]
        product: i32,
        /// Chosen color
        #[arg(short, long)]
        color: String,
        /// Chosen size
        #[arg(short, long)]
        size: String,
    },
    /// Set a line's quantity (0 or below removes the line)
    SetQuantity {
        /// Catalog product id
        #[arg(short, long)]
        product: i32,
        /// Chosen color
        #[arg(short, long)]
        color: String,
        /// Chosen size
        #[arg(short, long)]
        size: String,
        /// New quantity
        #[arg(short, long)]
        quantity: i64,
    },
    /// Remove a line
    Remove {
        /// Catalog product id
        #[arg(short, long)]
        product: i32,
        /// Chosen color
        #[arg(short, long)]
        color: String,
        /// Chosen size
        #[arg(short, long)]
        size: String,
    },
    /// Print the cart with derived totals
    List,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a catalog product
    Add {
        /// Catalog product id
        #[arg(short, long)]
        product: i32,
    },
    /// Remove a saved product
    Remove {
        /// Catalog product id
        #[arg(short, long)]
        product: i32,
    },
    /// Print the saved products
    List,
    /// Remove every saved product
    Clear,
    /// Fetch and print the remote wishlist
    Sync,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::Cart { action } => match action {
            CartAction::Add {
                product,
                color,
                size,
            } => commands::cart::add(product, &color, &size)?,
            CartAction::SetQuantity {
                product,
                color,
                size,
                quantity,
            } => commands::cart::set_quantity(product, &color, &size, quantity)?,
            CartAction::Remove {
                product,
                color,
                size,
            } => commands::cart::remove(product, &color, &size)?,
            CartAction::List => commands::cart::list()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { product } => commands::wishlist::add(product)?,
            WishlistAction::Remove { product } => commands::wishlist::remove(product)?,
            WishlistAction::List => commands::wishlist::list()?,
            WishlistAction::Clear => commands::wishlist::clear()?,
            WishlistAction::Sync => commands::wishlist::sync().await?,
        },
    }
    Ok(())
}
