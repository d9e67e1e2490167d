//! The persisted cart store.

use crate::cart::{Cart, CartLine, LineKind};
use crate::catalog::{Offer, Product};
use crate::money::Money;
use minimart_storage::Storage;

/// Storage key the cart lines are saved under.
pub const CART_STORAGE_KEY: &str = "minimart.cart";

/// The cart store: owns the [`Cart`] and a durable storage handle.
///
/// There is one owning root per application session; everything else
/// reads through [`cart`](Self::cart) or calls the mutation methods.
/// Every mutation that changes `lines` writes the full array back to
/// storage synchronously. Visibility changes (`toggle`, `close`) are
/// presentational and never persisted.
pub struct CartStore<S: Storage> {
    storage: S,
    cart: Cart,
}

impl<S: Storage> CartStore<S> {
    /// Open the store, hydrating the cart from storage.
    ///
    /// A missing or unparseable saved cart means starting empty; the
    /// failure is logged and never surfaced.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            cart: Cart::new(),
        };
        match store.storage.get::<Vec<CartLine>>(CART_STORAGE_KEY) {
            Ok(Some(lines)) => store.cart.load(lines),
            Ok(None) => {}
            Err(e) => tracing::warn!("discarding saved cart: {e}"),
        }
        store
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product and persist.
    pub fn add_product(&mut self, product: Product) {
        self.cart.add_product(product);
        self.persist();
    }

    /// Add an offer and persist.
    pub fn add_offer(&mut self, offer: Offer) {
        self.cart.add_offer(offer);
        self.persist();
    }

    /// Remove a line by id and persist.
    pub fn remove(&mut self, id: &str) {
        self.cart.remove(id);
        self.persist();
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Flip the cart drawer visibility. Not persisted.
    pub fn toggle(&mut self) {
        self.cart.toggle();
    }

    /// Force the cart drawer closed. Not persisted.
    pub fn close(&mut self) {
        self.cart.close();
    }

    /// Total unit count.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Cart subtotal.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Look up a line by `(kind, id)`.
    pub fn line(&self, kind: LineKind, id: &str) -> Option<&CartLine> {
        self.cart.line(kind, id)
    }

    /// Hand back the storage handle, dropping the cart state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &self.cart.lines) {
            tracing::warn!("failed to persist cart: {e}");
        }
    }
}
