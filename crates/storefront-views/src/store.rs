//! In-memory store snapshot.

use std::collections::HashMap;

use storefront_commerce::catalog::{Attribute, AttributeCatalog, MediaEntry, Product};
use storefront_commerce::Sku;

use crate::ports::CatalogStore;

/// A plain snapshot of store state, for hosts that keep their own
/// state container and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    media: HashMap<Sku, Vec<MediaEntry>>,
    attributes: AttributeCatalog,
    cart_products: HashMap<Sku, Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_media(&mut self, sku: impl Into<Sku>, entries: Vec<MediaEntry>) {
        self.media.insert(sku.into(), entries);
    }

    pub fn insert_attribute(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute);
    }

    pub fn insert_cart_product(&mut self, product: Product) {
        self.cart_products.insert(product.sku.clone(), product);
    }
}

impl CatalogStore for MemoryStore {
    fn product_media(&self, sku: &Sku) -> Option<&[MediaEntry]> {
        self.media.get(sku).map(Vec::as_slice)
    }

    fn attributes(&self) -> &AttributeCatalog {
        &self.attributes
    }

    fn cart_product(&self, sku: &Sku) -> Option<&Product> {
        self.cart_products.get(sku)
    }
}
