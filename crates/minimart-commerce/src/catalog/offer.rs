//! Time-limited offer types.

use crate::catalog::product::current_timestamp;
use crate::ids::OfferId;
use crate::locale::Locale;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A time-bounded discounted offer, distinct from a catalog product.
///
/// Pricing carries up to three fields from the backend:
/// `price` (the listed amount), `price_before` (the pre-discount
/// reference) and `price_after` (an explicit discounted amount).
/// `charged_price` resolves them in the documented precedence order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Unique offer identifier.
    pub id: OfferId,
    /// Offer title (English, and the translation fallback).
    pub title: String,
    /// Dutch title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_nl: Option<String>,
    /// Arabic title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    /// Offer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listed price.
    pub price: Money,
    /// Pre-discount reference price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_before: Option<Money>,
    /// Explicit discounted price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_after: Option<Money>,
    /// Unix timestamp the offer starts.
    pub starts_at: i64,
    /// Unix timestamp the offer ends.
    pub ends_at: i64,
    /// Whether the offer is switched on at all.
    pub is_active: bool,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Offer {
    /// Create a new active offer for a time window.
    pub fn new(
        id: impl Into<OfferId>,
        title: impl Into<String>,
        price: Money,
        starts_at: i64,
        ends_at: i64,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: id.into(),
            title: title.into(),
            title_nl: None,
            title_ar: None,
            description: None,
            price,
            price_before: None,
            price_after: None,
            starts_at,
            ends_at,
            is_active: true,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolve the display title for a locale, falling back to the base title.
    pub fn display_title(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.title,
            Locale::Nl => self.title_nl.as_deref().unwrap_or(&self.title),
            Locale::Ar => self.title_ar.as_deref().unwrap_or(&self.title),
        }
    }

    /// The price actually charged per unit.
    ///
    /// Precedence: an explicit `price_after` wins; otherwise the listed
    /// `price` is used (when `price_before` is set, `price` already
    /// carries the discount; when it isn't, there is no discount).
    pub fn charged_price(&self) -> Money {
        match self.price_after {
            Some(after) => after,
            None => self.price,
        }
    }

    /// The pre-discount reference price, for displaying savings.
    ///
    /// Falls back to the charged price when no `price_before` is set.
    pub fn reference_price(&self) -> Money {
        self.price_before.unwrap_or_else(|| self.charged_price())
    }

    /// Whether the offer is live at the given time.
    pub fn is_live(&self, now: i64) -> bool {
        self.is_active && now >= self.starts_at && now <= self.ends_at
    }

    /// Set the Dutch and Arabic titles.
    pub fn with_translations(
        mut self,
        title_nl: impl Into<String>,
        title_ar: impl Into<String>,
    ) -> Self {
        self.title_nl = Some(title_nl.into());
        self.title_ar = Some(title_ar.into());
        self
    }

    /// Set the pre-discount reference price.
    pub fn with_price_before(mut self, price_before: Money) -> Self {
        self.price_before = Some(price_before);
        self
    }

    /// Set an explicit discounted price.
    pub fn with_price_after(mut self, price_after: Money) -> Self {
        self.price_after = Some(price_after);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}
