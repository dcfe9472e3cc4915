//! Collaborators the views talk to.
//!
//! The host application supplies these: a read-only view of the store, a
//! sink for actions, a confirmation dialog, and a translation lookup.

use storefront_commerce::catalog::{AttributeCatalog, MediaEntry, Product};
use storefront_commerce::{AttributeId, CartItem, CartItemId, Sku};

/// Read access to store state.
pub trait CatalogStore {
    /// Media gallery of a product, `None` while it has not been fetched.
    fn product_media(&self, sku: &Sku) -> Option<&[MediaEntry]>;

    /// Attribute catalog entries fetched so far.
    fn attributes(&self) -> &AttributeCatalog;

    /// Product detail fetched for a cart line.
    fn cart_product(&self, sku: &Sku) -> Option<&Product>;
}

/// Asynchronous store actions. Each call is fire-and-forget; results come
/// back through store state and the views' completion methods.
pub trait StoreActions {
    fn fetch_product_media(&mut self, sku: &Sku);

    fn fetch_configurable_options(&mut self, sku: &Sku);

    fn fetch_cart_item_product(&mut self, sku: &Sku);

    fn update_selection(&mut self, attribute_id: &AttributeId, value: &str);

    fn submit_add_to_cart(&mut self, cart_item: CartItem);

    fn remove_cart_item(&mut self, item_id: &CartItemId);
}

/// A yes/no question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Blocking-style confirmation dialog. Returning `false` means cancel.
pub trait ConfirmPrompt {
    fn confirm(&mut self, request: &ConfirmRequest) -> bool;
}

/// Localized string lookup.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}
