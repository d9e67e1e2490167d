//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::locale::Locale;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Display names carry optional Dutch and Arabic translations; the
/// English name doubles as the fallback for missing translations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name (English, and the translation fallback).
    pub name: String,
    /// Dutch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_nl: Option<String>,
    /// Arabic name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    /// Product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shelf price.
    pub price: Money,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category this product belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new in-stock product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: id.into(),
            name: name.into(),
            name_nl: None,
            name_ar: None,
            description: None,
            price,
            in_stock: true,
            image: None,
            category_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolve the display name for a locale, falling back to the base name.
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name,
            Locale::Nl => self.name_nl.as_deref().unwrap_or(&self.name),
            Locale::Ar => self.name_ar.as_deref().unwrap_or(&self.name),
        }
    }

    /// Set the Dutch and Arabic names.
    pub fn with_translations(
        mut self,
        name_nl: impl Into<String>,
        name_ar: impl Into<String>,
    ) -> Self {
        self.name_nl = Some(name_nl.into());
        self.name_ar = Some(name_ar.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Mark the product out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
