//! The persisted catalog store: admin CRUD plus storefront read views.

use crate::catalog::{Category, Offer, Product};
use minimart_storage::Storage;

/// Storage key for products.
pub const PRODUCTS_STORAGE_KEY: &str = "minimart.products";
/// Storage key for offers.
pub const OFFERS_STORAGE_KEY: &str = "minimart.offers";
/// Storage key for categories.
pub const CATEGORIES_STORAGE_KEY: &str = "minimart.categories";

/// The catalog store: products, offers and categories over durable
/// storage.
///
/// Each collection hydrates once at open (an unreadable collection
/// starts empty, logged) and is written back in full after every
/// mutation, mirroring the cart's persistence contract.
pub struct CatalogStore<S: Storage> {
    storage: S,
    products: Vec<Product>,
    offers: Vec<Offer>,
    categories: Vec<Category>,
}

impl<S: Storage> CatalogStore<S> {
    /// Open the store, hydrating all collections from storage.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            products: Vec::new(),
            offers: Vec::new(),
            categories: Vec::new(),
        };
        store.products = store.hydrate(PRODUCTS_STORAGE_KEY);
        store.offers = store.hydrate(OFFERS_STORAGE_KEY);
        store.categories = store.hydrate(CATEGORIES_STORAGE_KEY);
        store
    }

    fn hydrate<T: serde::de::DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.storage.get::<Vec<T>>(key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("discarding saved collection {key}: {e}");
                Vec::new()
            }
        }
    }

    fn persist<T: serde::Serialize>(storage: &mut S, key: &str, items: &[T]) {
        if let Err(e) = storage.set(key, items) {
            tracing::warn!("failed to persist {key}: {e}");
        }
    }

    // --- products ---

    /// All products, insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products currently in stock.
    pub fn in_stock_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.in_stock).collect()
    }

    /// Products in a category.
    pub fn products_in_category(&self, category_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                p.category_id
                    .as_ref()
                    .is_some_and(|c| c.as_str() == category_id)
            })
            .collect()
    }

    /// Insert or replace a product, keyed by id.
    pub fn upsert_product(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
        Self::persist(&mut self.storage, PRODUCTS_STORAGE_KEY, &self.products);
    }

    /// Remove a product by id. Returns whether anything was removed.
    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id.as_str() != id);
        let removed = self.products.len() < before;
        if removed {
            Self::persist(&mut self.storage, PRODUCTS_STORAGE_KEY, &self.products);
        }
        removed
    }

    // --- offers ---

    /// All offers, insertion order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Look up an offer by id.
    pub fn offer(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id.as_str() == id)
    }

    /// Offers live at the given time.
    pub fn live_offers(&self, now: i64) -> Vec<&Offer> {
        self.offers.iter().filter(|o| o.is_live(now)).collect()
    }

    /// Insert or replace an offer, keyed by id.
    pub fn upsert_offer(&mut self, offer: Offer) {
        match self.offers.iter_mut().find(|o| o.id == offer.id) {
            Some(existing) => *existing = offer,
            None => self.offers.push(offer),
        }
        Self::persist(&mut self.storage, OFFERS_STORAGE_KEY, &self.offers);
    }

    /// Remove an offer by id. Returns whether anything was removed.
    pub fn remove_offer(&mut self, id: &str) -> bool {
        let before = self.offers.len();
        self.offers.retain(|o| o.id.as_str() != id);
        let removed = self.offers.len() < before;
        if removed {
            Self::persist(&mut self.storage, OFFERS_STORAGE_KEY, &self.offers);
        }
        removed
    }

    // --- categories ---

    /// All categories, sorted by position.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.position);
        categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    /// Insert or replace a category, keyed by id.
    pub fn upsert_category(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        Self::persist(&mut self.storage, CATEGORIES_STORAGE_KEY, &self.categories);
    }

    /// Remove a category by id. Returns whether anything was removed.
    ///
    /// Products keep their dangling `category_id`; the storefront
    /// simply stops resolving it.
    pub fn remove_category(&mut self, id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id.as_str() != id);
        let removed = self.categories.len() < before;
        if removed {
            Self::persist(&mut self.storage, CATEGORIES_STORAGE_KEY, &self.categories);
        }
        removed
    }

    /// Hand back the storage handle, dropping the catalog state.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use crate::money::{Currency, Money};
    use minimart_storage::MemoryStore;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(100, Currency::EUR))
    }

    #[test]
    fn test_upsert_and_get_roundtrip() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_product(product("p1"));

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.product("p1").unwrap().name, "Product p1");
        assert!(store.product("p2").is_none());
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_product(product("p1"));

        let mut updated = product("p1");
        updated.price = Money::new(175, Currency::EUR);
        store.upsert_product(updated);

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.product("p1").unwrap().price.amount_cents, 175);
    }

    #[test]
    fn test_collections_survive_reopen() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_product(product("p1"));
        store.upsert_offer(Offer::new(
            "o1",
            "Offer",
            Money::new(500, Currency::EUR),
            0,
            100,
        ));
        store.upsert_category(Category::new("c1", "Dairy"));

        let store = CatalogStore::open(store.into_storage());
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.offers().len(), 1);
        assert_eq!(store.categories().len(), 1);
    }

    #[test]
    fn test_remove_product() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_product(product("p1"));

        assert!(store.remove_product("p1"));
        assert!(!store.remove_product("p1"));
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_in_stock_filter() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_product(product("p1"));
        store.upsert_product(product("p2").out_of_stock());

        let in_stock = store.in_stock_products();
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].id.as_str(), "p1");
    }

    #[test]
    fn test_products_in_category() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_product(product("p1").with_category(CategoryId::new("c1")));
        store.upsert_product(product("p2"));

        assert_eq!(store.products_in_category("c1").len(), 1);
        assert!(store.products_in_category("c2").is_empty());
    }

    #[test]
    fn test_live_offer_window() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_offer(Offer::new("past", "Past", Money::new(100, Currency::EUR), 0, 10));
        store.upsert_offer(Offer::new("live", "Live", Money::new(100, Currency::EUR), 0, 100));
        let mut switched_off = Offer::new("off", "Off", Money::new(100, Currency::EUR), 0, 100);
        switched_off.is_active = false;
        store.upsert_offer(switched_off);

        let live = store.live_offers(50);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id.as_str(), "live");
    }

    #[test]
    fn test_categories_sorted_by_position() {
        let mut store = CatalogStore::open(MemoryStore::new());
        store.upsert_category(Category::new("c1", "Snacks").with_position(2));
        store.upsert_category(Category::new("c2", "Dairy").with_position(1));

        let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dairy", "Snacks"]);
    }

    #[test]
    fn test_corrupt_collection_starts_empty() {
        let mut storage = MemoryStore::new();
        storage.write(PRODUCTS_STORAGE_KEY, "[not json").unwrap();

        let store = CatalogStore::open(storage);
        assert!(store.products().is_empty());
    }
}
