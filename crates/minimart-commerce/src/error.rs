//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Offer not found.
    #[error("Offer not found: {0}")]
    OfferNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The configured WhatsApp destination is not usable in a URL.
    #[error("Invalid WhatsApp number: {0}")]
    InvalidWhatsAppNumber(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Storage error.
    #[cfg(feature = "storage")]
    #[error("Storage error: {0}")]
    Storage(#[from] minimart_storage::StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
