//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products (in stock only unless --all).
    Products {
        /// Include out-of-stock products.
        #[arg(long)]
        all: bool,

        /// Only products in this category.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List offers (live only unless --all).
    Offers {
        /// Include inactive and out-of-window offers.
        #[arg(long)]
        all: bool,
    },
    /// List categories.
    Categories,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals.
    Show,
    /// Add a product by id.
    Add {
        /// Product id.
        id: String,
    },
    /// Add an offer by id.
    AddOffer {
        /// Offer id.
        id: String,
    },
    /// Remove a line by id.
    Remove {
        /// Product or offer id.
        id: String,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// How the order is received.
    #[arg(short, long, value_enum, default_value = "pickup")]
    pub method: FulfillmentMethod,

    /// Street name (delivery only).
    #[arg(long)]
    pub street: Option<String>,

    /// House number (delivery only).
    #[arg(long)]
    pub house_number: Option<String>,

    /// Postal code (delivery only).
    #[arg(long)]
    pub postal_code: Option<String>,

    /// City (delivery only).
    #[arg(long)]
    pub city: Option<String>,

    /// Print the link without clearing the cart.
    #[arg(long)]
    pub keep_cart: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FulfillmentMethod {
    /// Pick the order up at the store.
    Pickup,
    /// Have the order delivered.
    Delivery,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Set the admin password.
    SetPassword,
    /// Write a fresh minimart.toml next to the data file.
    InitConfig {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Add or update a product.
    AddProduct {
        /// Product id.
        id: String,
        /// Product name (English).
        name: String,
        /// Price, e.g. 2.50.
        #[arg(short, long)]
        price: f64,
        /// Dutch name.
        #[arg(long)]
        name_nl: Option<String>,
        /// Arabic name.
        #[arg(long)]
        name_ar: Option<String>,
        /// Category id.
        #[arg(short, long)]
        category: Option<String>,
        /// Image URL.
        #[arg(long)]
        image: Option<String>,
        /// Mark the product out of stock.
        #[arg(long)]
        out_of_stock: bool,
    },
    /// Remove a product.
    RemoveProduct {
        /// Product id.
        id: String,
    },
    /// Add or update an offer.
    AddOffer {
        /// Offer id.
        id: String,
        /// Offer title (English).
        title: String,
        /// Listed price, e.g. 10.00.
        #[arg(short, long)]
        price: f64,
        /// Pre-discount reference price.
        #[arg(long)]
        price_before: Option<f64>,
        /// Explicit discounted price.
        #[arg(long)]
        price_after: Option<f64>,
        /// Dutch title.
        #[arg(long)]
        title_nl: Option<String>,
        /// Arabic title.
        #[arg(long)]
        title_ar: Option<String>,
        /// Days the offer stays live, starting now.
        #[arg(short, long, default_value = "7")]
        days: i64,
        /// Image URL.
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove an offer.
    RemoveOffer {
        /// Offer id.
        id: String,
    },
    /// Add or update a category.
    AddCategory {
        /// Category id.
        id: String,
        /// Category name (English).
        name: String,
        /// Dutch name.
        #[arg(long)]
        name_nl: Option<String>,
        /// Arabic name.
        #[arg(long)]
        name_ar: Option<String>,
        /// Sort position.
        #[arg(short, long, default_value = "0")]
        position: i32,
    },
    /// Remove a category.
    RemoveCategory {
        /// Category id.
        id: String,
    },
}
