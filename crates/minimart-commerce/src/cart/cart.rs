//! The cart state machine.

use crate::cart::{CartLine, LineKind};
use crate::catalog::{Offer, Product};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The client-held shopping cart.
///
/// `lines` keeps insertion order, which is also display order. At most
/// one line exists per distinct `(kind, id)` pair; repeated adds bump
/// the quantity of the existing line. `is_open` is purely
/// presentational and never affects `lines`.
///
/// Mutations run to completion one at a time; persistence is layered
/// on top (see `CartStore`), not hidden in here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Line items, insertion order.
    pub lines: Vec<CartLine>,
    /// Whether the cart drawer is visible.
    #[serde(skip)]
    pub is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, bumping the quantity if it is already in the cart.
    ///
    /// Prices are locked at first add: a repeated add never refreshes
    /// the line's price fields, even if the catalog price changed in
    /// between. Out-of-stock or zero-priced products are accepted
    /// unchecked. Opens the cart so the user sees the result.
    pub fn add_product(&mut self, product: Product) {
        let id = product.id.as_str().to_string();
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(LineKind::Product, &id))
        {
            existing.quantity += 1;
        } else {
            self.lines.push(CartLine::from_product(product));
        }
        self.is_open = true;
    }

    /// Add an offer, bumping the quantity if it is already in the cart.
    ///
    /// New lines resolve the offer's price fields in their documented
    /// precedence order (`Offer::charged_price`). Opens the cart.
    pub fn add_offer(&mut self, offer: Offer) {
        let id = offer.id.as_str().to_string();
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(LineKind::Offer, &id))
        {
            existing.quantity += 1;
        } else {
            self.lines.push(CartLine::from_offer(offer));
        }
        self.is_open = true;
    }

    /// Remove the line with the given id, regardless of kind.
    ///
    /// Removal is keyed on the raw id alone: a product and an offer
    /// sharing an id are both removed. No-op when the id is absent.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id() != id);
    }

    /// Empty the cart. `is_open` is unaffected.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Flip the cart drawer visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Force the cart drawer closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Replace `lines` wholesale. Used once at startup to hydrate from
    /// storage; does not touch `is_open`.
    pub fn load(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
    }

    /// Look up a line by `(kind, id)`.
    pub fn line(&self, kind: LineKind, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(kind, id))
    }

    /// Total unit count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `quantity * unit_price` over all lines.
    pub fn subtotal(&self) -> Money {
        subtotal_of(&self.lines)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Sum of line totals for a slice of lines.
pub(crate) fn subtotal_of(lines: &[CartLine]) -> Money {
    let currency = lines
        .first()
        .map(|l| l.unit_price.currency)
        .unwrap_or(Currency::EUR);
    lines
        .iter()
        .fold(Money::zero(currency), |acc, l| acc + l.line_total())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(cents, Currency::EUR))
    }

    fn offer(id: &str, cents: i64) -> Offer {
        Offer::new(id, format!("Offer {id}"), Money::new(cents, Currency::EUR), 0, i64::MAX)
    }

    #[test]
    fn test_add_product_twice_merges_lines() {
        let mut cart = Cart::new();
        cart.add_product(product("p1", 250));
        cart.add_product(product("p1", 250));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_repeat_add_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add_product(product("p1", 250));
        // Price changed in the catalog between adds.
        cart.add_product(product("p1", 999));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].unit_price.amount_cents, 250);
    }

    #[test]
    fn test_adding_opens_the_cart() {
        let mut cart = Cart::new();
        assert!(!cart.is_open);
        cart.add_product(product("p1", 100));
        assert!(cart.is_open);

        cart.close();
        cart.add_offer(offer("o1", 100));
        assert!(cart.is_open);
    }

    #[test]
    fn test_product_and_offer_with_same_id_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_product(product("x", 100));
        cart.add_offer(offer("x", 200));

        assert_eq!(cart.lines.len(), 2);
        assert!(cart.line(LineKind::Product, "x").is_some());
        assert!(cart.line(LineKind::Offer, "x").is_some());
    }

    #[test]
    fn test_remove_is_keyed_on_id_alone() {
        // Removal intentionally ignores the kind: both lines go.
        let mut cart = Cart::new();
        cart.add_product(product("x", 100));
        cart.add_offer(offer("x", 200));

        cart.remove("x");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(product("p1", 100));
        cart.remove("nope");
        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn test_clear_leaves_is_open_alone() {
        let mut cart = Cart::new();
        cart.add_product(product("p1", 100));
        assert!(cart.is_open);
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.is_open);
    }

    #[test]
    fn test_clear_on_empty_cart_is_noop() {
        let mut cart = Cart::new();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_toggle_and_close() {
        let mut cart = Cart::new();
        cart.toggle();
        assert!(cart.is_open);
        cart.toggle();
        assert!(!cart.is_open);
        cart.toggle();
        cart.close();
        assert!(!cart.is_open);
    }

    #[test]
    fn test_subtotal_includes_zero_price_lines() {
        let mut cart = Cart::new();
        cart.add_product(product("free", 0));
        cart.add_product(product("p1", 199));
        cart.add_product(product("p1", 199));

        assert_eq!(cart.subtotal().amount_cents, 398);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_mixed_cart_totals() {
        let mut cart = Cart::new();
        cart.add_product(product("p1", 250));
        cart.add_product(product("p1", 250));
        cart.add_offer(
            offer("o1", 1000).with_price_before(Money::new(1500, Currency::EUR)),
        );

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].unit_price.amount_cents, 250);
        assert_eq!(cart.lines[1].quantity, 1);
        assert_eq!(cart.lines[1].unit_price.amount_cents, 1000);
        assert_eq!(cart.lines[1].original_unit_price.unwrap().amount_cents, 1500);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().amount_cents, 1500);
    }

    #[test]
    fn test_load_replaces_lines_but_not_visibility() {
        let mut cart = Cart::new();
        cart.add_product(product("old", 100));
        cart.close();

        let saved = vec![
            CartLine::from_product(product("a", 100)),
            CartLine::from_offer(offer("b", 200)),
        ];
        cart.load(saved.clone());

        assert_eq!(cart.lines, saved);
        assert!(!cart.is_open);
    }

    #[test]
    fn test_lines_roundtrip_through_json() {
        let mut cart = Cart::new();
        cart.add_product(product("p1", 250));
        cart.add_offer(offer("o1", 1000));

        let json = serde_json::to_string(&cart.lines).unwrap();
        let back: Vec<CartLine> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart.lines);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add_product(product("b", 100));
        cart.add_offer(offer("a", 100));
        cart.add_product(product("c", 100));
        cart.add_product(product("b", 100));

        let ids: Vec<&str> = cart.lines.iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
