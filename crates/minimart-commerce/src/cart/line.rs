//! Cart line items.

use crate::catalog::{Offer, Product};
use crate::locale::Locale;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What kind of record a cart line points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A catalog product.
    Product,
    /// A time-limited offer.
    Offer,
}

impl LineKind {
    /// Get the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Product => "product",
            LineKind::Offer => "offer",
        }
    }
}

/// The record a cart line was created from, held by value.
///
/// The snapshot is taken at add-time and never re-fetched: later
/// catalog edits do not reach lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartItem {
    /// A product snapshot.
    Product(Product),
    /// An offer snapshot.
    Offer(Offer),
}

impl CartItem {
    /// The underlying record's identifier.
    pub fn id(&self) -> &str {
        match self {
            CartItem::Product(p) => p.id.as_str(),
            CartItem::Offer(o) => o.id.as_str(),
        }
    }

    /// The kind of the underlying record.
    pub fn kind(&self) -> LineKind {
        match self {
            CartItem::Product(_) => LineKind::Product,
            CartItem::Offer(_) => LineKind::Offer,
        }
    }

    /// Resolve the display name (product name or offer title) for a locale.
    pub fn display_name(&self, locale: Locale) -> &str {
        match self {
            CartItem::Product(p) => p.display_name(locale),
            CartItem::Offer(o) => o.display_title(locale),
        }
    }
}

/// One entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product or offer snapshot this line was created from.
    pub item: CartItem,
    /// Units of the item, always at least 1.
    pub quantity: i64,
    /// Price actually charged per unit (post-discount for offers),
    /// locked at first add.
    pub unit_price: Money,
    /// Pre-discount reference price, used only for displaying savings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_unit_price: Option<Money>,
}

impl CartLine {
    /// Create a line from a product snapshot.
    pub fn from_product(product: Product) -> Self {
        let unit_price = product.price;
        Self {
            item: CartItem::Product(product),
            quantity: 1,
            unit_price,
            original_unit_price: Some(unit_price),
        }
    }

    /// Create a line from an offer snapshot, resolving the offer's
    /// price fields in their documented precedence order.
    pub fn from_offer(offer: Offer) -> Self {
        let unit_price = offer.charged_price();
        let original_unit_price = Some(offer.reference_price());
        Self {
            item: CartItem::Offer(offer),
            quantity: 1,
            unit_price,
            original_unit_price,
        }
    }

    /// The underlying record's identifier.
    pub fn id(&self) -> &str {
        self.item.id()
    }

    /// The kind of the underlying record.
    pub fn kind(&self) -> LineKind {
        self.item.kind()
    }

    /// Resolve the display name for a locale.
    pub fn display_name(&self, locale: Locale) -> &str {
        self.item.display_name(locale)
    }

    /// Total for this line (`unit_price * quantity`).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Savings against the reference price across the whole line, if any.
    pub fn savings(&self) -> Option<Money> {
        let original = self.original_unit_price?;
        let per_unit = original.try_subtract(&self.unit_price)?;
        if per_unit.is_positive() {
            Some(per_unit.multiply(self.quantity))
        } else {
            None
        }
    }

    /// Check whether this line is for the given `(kind, id)` pair.
    pub fn matches(&self, kind: LineKind, id: &str) -> bool {
        self.kind() == kind && self.id() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        Product::new("p1", "Bread", Money::new(150, Currency::EUR))
    }

    fn offer() -> Offer {
        Offer::new("o1", "Family pack", Money::new(1000, Currency::EUR), 0, 100)
            .with_price_before(Money::new(1500, Currency::EUR))
    }

    #[test]
    fn test_product_line_prices() {
        let line = CartLine::from_product(product());
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price.amount_cents, 150);
        assert_eq!(line.original_unit_price.unwrap().amount_cents, 150);
        assert_eq!(line.kind(), LineKind::Product);
        assert_eq!(line.id(), "p1");
    }

    #[test]
    fn test_offer_line_prices() {
        let line = CartLine::from_offer(offer());
        assert_eq!(line.unit_price.amount_cents, 1000);
        assert_eq!(line.original_unit_price.unwrap().amount_cents, 1500);
        assert_eq!(line.kind(), LineKind::Offer);
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::from_product(product());
        line.quantity = 3;
        assert_eq!(line.line_total().amount_cents, 450);
    }

    #[test]
    fn test_savings() {
        let mut line = CartLine::from_offer(offer());
        line.quantity = 2;
        assert_eq!(line.savings().unwrap().amount_cents, 1000);

        // No savings when the reference equals the charged price.
        let line = CartLine::from_product(product());
        assert!(line.savings().is_none());
    }

    #[test]
    fn test_matches_is_keyed_on_kind_and_id() {
        let line = CartLine::from_product(product());
        assert!(line.matches(LineKind::Product, "p1"));
        assert!(!line.matches(LineKind::Offer, "p1"));
        assert!(!line.matches(LineKind::Product, "p2"));
    }

    #[test]
    fn test_line_roundtrips_through_json() {
        let line = CartLine::from_offer(offer());
        let json = serde_json::to_string(&line).unwrap();
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
