//! Storage-backed stores for the cart and the catalog.
//!
//! Stores own their state and a durable storage handle, hydrate once
//! at construction, and write back synchronously after every mutation.
//! Storage failures are logged and swallowed: the in-memory state
//! stays authoritative for the session.

mod cart_store;
mod catalog_store;

pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use catalog_store::{
    CatalogStore, CATEGORIES_STORAGE_KEY, OFFERS_STORAGE_KEY, PRODUCTS_STORAGE_KEY,
};
