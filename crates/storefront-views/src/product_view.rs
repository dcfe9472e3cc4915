//! Product detail view state.
//!
//! A [`ProductView`] lives for as long as one product is on screen. It owns
//! the shopper's selections and walks the state machine
//!
//! ```text
//! Idle -> Loading -> Ready -> Submitting -> Ready
//!            \
//!             -> Error (sticky until the product is revisited)
//! ```
//!
//! Fetches are requested explicitly by [`ProductView::activate`] and their
//! outcomes are fed back through the completion methods.

use serde::Serialize;
use storefront_commerce::cart::{build_cart_item, supports_add_to_cart};
use storefront_commerce::catalog::{visible_media, ConfigurableOption, MediaEntry, Product};
use storefront_commerce::resolver::{resolve_options, ResolvedOption};
use storefront_commerce::selection::SelectionSet;
use storefront_commerce::{AttributeId, QuoteId};

use crate::config::StorefrontConfig;
use crate::error::{FetchResource, ViewError};
use crate::ports::{CatalogStore, StoreActions};

/// Lifecycle state of a product view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Created, not yet activated.
    Idle,
    /// Waiting for media and/or configurable options.
    Loading,
    /// Everything needed is present.
    Ready,
    /// An add-to-cart request is in flight.
    Submitting,
    /// An initial fetch failed.
    Error,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Ready => "ready",
            ViewState::Submitting => "submitting",
            ViewState::Error => "error",
        }
    }
}

/// What the options area of the view should show.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsPanel {
    /// The product has no configurable options.
    Hidden,
    /// Options are being fetched.
    Loading,
    /// Fetching options failed.
    Failed(String),
    /// Options in display order; individual entries may still be pending.
    Options(Vec<ResolvedOption>),
}

#[derive(Debug, Clone, Default)]
struct Fetches {
    media_requested: bool,
    media_pending: bool,
    options_requested: bool,
    options_pending: bool,
}

impl Fetches {
    fn outstanding(&self) -> bool {
        self.media_pending || self.options_pending
    }
}

/// State of the product detail screen.
#[derive(Debug, Clone)]
pub struct ProductView {
    product: Product,
    selections: SelectionSet,
    state: ViewState,
    fetches: Fetches,
    fetch_error: Option<ViewError>,
    submission_error: Option<String>,
}

impl ProductView {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            selections: SelectionSet::new(),
            state: ViewState::Idle,
            fetches: Fetches::default(),
            fetch_error: None,
            submission_error: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    /// The fetch failure that put the view in [`ViewState::Error`].
    pub fn fetch_error(&self) -> Option<&ViewError> {
        self.fetch_error.as_ref()
    }

    /// Message to show next to the add-to-cart control.
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// Request whatever the view is missing and settle the state.
    ///
    /// Safe to call on every render: each fetch is requested at most once
    /// per view, and not at all when the store already has the data.
    pub fn activate<S, A>(&mut self, store: &S, actions: &mut A) -> ViewState
    where
        S: CatalogStore + ?Sized,
        A: StoreActions + ?Sized,
    {
        if self.state == ViewState::Error {
            return self.state;
        }

        self.ensure_options(actions);
        self.ensure_media(store, actions);

        if matches!(self.state, ViewState::Idle | ViewState::Loading) {
            let next = if self.fetches.outstanding() {
                ViewState::Loading
            } else {
                ViewState::Ready
            };
            self.transition(next);
        }
        self.state
    }

    /// Request product media unless the store has it or a request was
    /// already made. Returns whether a request was issued.
    pub fn ensure_media<S, A>(&mut self, store: &S, actions: &mut A) -> bool
    where
        S: CatalogStore + ?Sized,
        A: StoreActions + ?Sized,
    {
        if self.fetches.media_requested || store.product_media(&self.product.sku).is_some() {
            return false;
        }
        self.fetches.media_requested = true;
        self.fetches.media_pending = true;
        tracing::debug!(sku = %self.product.sku, "requesting product media");
        actions.fetch_product_media(&self.product.sku);
        true
    }

    /// Request configurable options once for configurable products.
    /// Returns whether a request was issued.
    pub fn ensure_options<A>(&mut self, actions: &mut A) -> bool
    where
        A: StoreActions + ?Sized,
    {
        if !self.product.is_configurable() || self.fetches.options_requested {
            return false;
        }
        self.fetches.options_requested = true;
        self.fetches.options_pending = true;
        tracing::debug!(sku = %self.product.sku, "requesting configurable options");
        actions.fetch_configurable_options(&self.product.sku);
        true
    }

    pub fn media_loaded(&mut self) {
        if !self.fetches.media_pending {
            tracing::debug!(sku = %self.product.sku, "ignoring unrequested media result");
            return;
        }
        self.fetches.media_pending = false;
        self.settle();
    }

    pub fn media_failed(&mut self, message: impl Into<String>) {
        if !self.fetches.media_pending {
            return;
        }
        self.fetches.media_pending = false;
        self.fail(FetchResource::Media, message.into());
    }

    /// Configurable options arrived; they replace the product's options.
    pub fn options_loaded(&mut self, options: Vec<ConfigurableOption>) {
        if !self.fetches.options_pending {
            tracing::debug!(sku = %self.product.sku, "ignoring unrequested options result");
            return;
        }
        self.fetches.options_pending = false;
        self.product.options = options;
        self.settle();
    }

    pub fn options_failed(&mut self, message: impl Into<String>) {
        if !self.fetches.options_pending {
            return;
        }
        self.fetches.options_pending = false;
        self.fail(FetchResource::ConfigurableOptions, message.into());
    }

    /// Record a value for one attribute and tell the store about it.
    pub fn select<A>(
        &mut self,
        attribute_id: impl Into<AttributeId>,
        value: impl Into<String>,
        actions: &mut A,
    ) where
        A: StoreActions + ?Sized,
    {
        let attribute_id = attribute_id.into();
        let value = value.into();
        tracing::debug!(sku = %self.product.sku, %attribute_id, value = %value, "option selected");
        actions.update_selection(&attribute_id, &value);
        self.selections.select(attribute_id, value);
    }

    /// Whether the add-to-cart control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.state == ViewState::Ready && supports_add_to_cart(&self.product.type_id)
    }

    /// Build the cart request and hand it to the store.
    ///
    /// An unsupported product type is a hard stop: nothing is dispatched
    /// and the view stays `Ready`. A missing selection is reported through
    /// [`ProductView::submission_error`] as well as the returned error.
    pub fn add_to_cart<A>(&mut self, quote_id: &QuoteId, actions: &mut A) -> Result<(), ViewError>
    where
        A: StoreActions + ?Sized,
    {
        if self.state != ViewState::Ready {
            return Err(ViewError::InvalidTransition {
                from: self.state.as_str(),
                to: ViewState::Submitting.as_str(),
            });
        }
        self.submission_error = None;

        match build_cart_item(&self.product, &self.selections, quote_id) {
            Ok(item) => {
                tracing::debug!(
                    sku = %item.sku,
                    quote_id = %item.quote_id,
                    options = item.configurable_options().len(),
                    "submitting add to cart"
                );
                actions.submit_add_to_cart(item);
                self.transition(ViewState::Submitting);
                Ok(())
            }
            Err(e) => {
                if e.is_hard_stop() {
                    tracing::warn!(sku = %self.product.sku, error = %e, "add to cart not supported");
                } else {
                    self.submission_error = Some(e.to_string());
                }
                Err(e.into())
            }
        }
    }

    pub fn submission_succeeded(&mut self) -> Result<(), ViewError> {
        self.expect_submitting(ViewState::Ready)?;
        self.transition(ViewState::Ready);
        Ok(())
    }

    /// The backend rejected the submission. Selections are kept so the
    /// shopper can retry straight away.
    pub fn submission_failed(&mut self, message: impl Into<String>) -> Result<(), ViewError> {
        self.expect_submitting(ViewState::Ready)?;
        let error = ViewError::Submission(message.into());
        tracing::warn!(sku = %self.product.sku, %error, "add to cart failed");
        self.submission_error = Some(error.to_string());
        self.transition(ViewState::Ready);
        Ok(())
    }

    /// What the options area should show right now.
    pub fn options_panel<S>(&self, store: &S) -> OptionsPanel
    where
        S: CatalogStore + ?Sized,
    {
        if !self.product.is_configurable() {
            return OptionsPanel::Hidden;
        }
        if self.fetches.options_pending {
            return OptionsPanel::Loading;
        }
        if let Some(ViewError::Fetch {
            resource: FetchResource::ConfigurableOptions,
            message,
        }) = &self.fetch_error
        {
            return OptionsPanel::Failed(message.clone());
        }
        OptionsPanel::Options(resolve_options(
            &self.product.options,
            store.attributes(),
            &self.selections,
        ))
    }

    /// Enabled gallery entries in position order. The store's fetched
    /// gallery wins over whatever the product payload carried.
    pub fn gallery<'a, S>(&'a self, store: &'a S) -> Vec<&'a MediaEntry>
    where
        S: CatalogStore + ?Sized,
    {
        let entries = store
            .product_media(&self.product.sku)
            .unwrap_or(self.product.media_gallery_entries.as_slice());
        visible_media(entries)
    }

    /// Product description, or the configured placeholder.
    pub fn description<'a>(&'a self, config: &'a StorefrontConfig) -> &'a str {
        self.product
            .description()
            .unwrap_or(config.no_description_text.as_str())
    }

    pub fn price_text(&self, config: &StorefrontConfig) -> String {
        self.product.price_text(&config.currency_symbol)
    }

    fn expect_submitting(&self, to: ViewState) -> Result<(), ViewError> {
        if self.state == ViewState::Submitting {
            Ok(())
        } else {
            Err(ViewError::InvalidTransition {
                from: self.state.as_str(),
                to: to.as_str(),
            })
        }
    }

    fn settle(&mut self) {
        if self.state == ViewState::Loading && !self.fetches.outstanding() {
            self.transition(ViewState::Ready);
        }
    }

    fn fail(&mut self, resource: FetchResource, message: String) {
        let error = ViewError::Fetch { resource, message };
        tracing::warn!(sku = %self.product.sku, %error, "product view fetch failed");
        self.fetch_error = Some(error);
        self.transition(ViewState::Error);
    }

    fn transition(&mut self, next: ViewState) {
        if self.state != next {
            tracing::debug!(
                sku = %self.product.sku,
                from = self.state.as_str(),
                to = next.as_str(),
                "product view transition"
            );
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use storefront_commerce::{CartItem, CartItemId, Sku};

    #[derive(Default)]
    struct Counter {
        media: usize,
        options: usize,
        submitted: Vec<CartItem>,
    }

    impl StoreActions for Counter {
        fn fetch_product_media(&mut self, _sku: &Sku) {
            self.media += 1;
        }
        fn fetch_configurable_options(&mut self, _sku: &Sku) {
            self.options += 1;
        }
        fn fetch_cart_item_product(&mut self, _sku: &Sku) {}
        fn update_selection(&mut self, _attribute_id: &AttributeId, _value: &str) {}
        fn submit_add_to_cart(&mut self, cart_item: CartItem) {
            self.submitted.push(cart_item);
        }
        fn remove_cart_item(&mut self, _item_id: &CartItemId) {}
    }

    #[test]
    fn test_simple_with_media_is_ready_immediately() {
        let mut store = MemoryStore::new();
        store.insert_media("24-MB01", Vec::new());
        let mut actions = Counter::default();
        let mut view = ProductView::new(Product::new("24-MB01", "Bag", 34.0));

        assert_eq!(view.activate(&store, &mut actions), ViewState::Ready);
        assert_eq!(actions.media, 0);
        assert_eq!(actions.options, 0);
    }

    #[test]
    fn test_ensure_media_twice_with_media_present() {
        let mut store = MemoryStore::new();
        store.insert_media("24-MB01", Vec::new());
        let mut actions = Counter::default();
        let mut view = ProductView::new(Product::new("24-MB01", "Bag", 34.0));

        assert!(!view.ensure_media(&store, &mut actions));
        assert!(!view.ensure_media(&store, &mut actions));
        assert_eq!(actions.media, 0);
    }

    #[test]
    fn test_submit_requires_ready() {
        let mut actions = Counter::default();
        let mut view = ProductView::new(Product::new("24-MB01", "Bag", 34.0));

        let err = view.add_to_cart(&QuoteId::new("q"), &mut actions).unwrap_err();
        assert_eq!(
            err,
            ViewError::InvalidTransition {
                from: "idle",
                to: "submitting"
            }
        );
        assert!(actions.submitted.is_empty());
    }

    #[test]
    fn test_late_results_are_ignored() {
        let mut view = ProductView::new(Product::new("24-MB01", "Bag", 34.0));
        view.media_failed("timeout");
        assert_eq!(view.state(), ViewState::Idle);
        assert!(view.fetch_error().is_none());
    }

    #[test]
    fn test_description_falls_back() {
        let config = StorefrontConfig::default();
        let view = ProductView::new(Product::new("24-MB01", "Bag", 34.0));
        assert_eq!(view.description(&config), "No description available");
        assert_eq!(view.price_text(&config), "$34");
    }
}
