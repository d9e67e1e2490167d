//! Storefront domain types and logic for minimart.
//!
//! This crate provides the core of a small localized supermarket
//! storefront:
//!
//! - **Catalog**: Products, time-limited offers, categories
//! - **Cart**: Client-held shopping cart with line items and totals
//! - **Checkout**: Fulfillment choice and the WhatsApp order message
//! - **Stores** (feature `storage`): cart and catalog persistence over
//!   durable client-side storage
//!
//! # Example
//!
//! ```rust,ignore
//! use minimart_commerce::prelude::*;
//!
//! let bread = Product::new("p1", "Bread", Money::from_decimal(1.50, Currency::EUR));
//!
//! let mut cart = Cart::new();
//! cart.add_product(bread.clone());
//! cart.add_product(bread);
//! assert_eq!(cart.item_count(), 2);
//!
//! let url = checkout_url("31612345678", &cart.lines, Locale::En, &Fulfillment::Pickup)?;
//! println!("{url}");
//! ```

pub mod error;
pub mod ids;
pub mod locale;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

#[cfg(feature = "storage")]
pub mod store;

pub use error::CommerceError;
pub use ids::*;
pub use locale::Locale;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::locale::Locale;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Offer, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartLine, LineKind};

    // Checkout
    pub use crate::checkout::{
        build_message, checkout_url, DeliveryAddress, Fulfillment,
    };

    // Stores
    #[cfg(feature = "storage")]
    pub use crate::store::{CartStore, CatalogStore};
}
