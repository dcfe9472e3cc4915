//! Cart line view.

use serde::Serialize;
use storefront_commerce::cart::CartLine;

use crate::config::StorefrontConfig;
use crate::error::{FetchResource, ViewError};
use crate::i18n::keys;
use crate::ports::{CatalogStore, ConfirmPrompt, ConfirmRequest, StoreActions, Translator};

/// Display text for one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineSummary {
    pub name: String,
    pub price_text: String,
    pub quantity_text: String,
    /// Empty until the product detail (or a backend thumbnail) is known.
    pub image_url: String,
}

/// State of one line on the cart screen.
#[derive(Debug, Clone)]
pub struct CartLineView {
    line: CartLine,
    detail_requested: bool,
    detail_error: Option<ViewError>,
}

impl CartLineView {
    pub fn new(line: CartLine) -> Self {
        Self {
            line,
            detail_requested: false,
            detail_error: None,
        }
    }

    pub fn line(&self) -> &CartLine {
        &self.line
    }

    pub fn detail_error(&self) -> Option<&ViewError> {
        self.detail_error.as_ref()
    }

    /// Fetch the product detail when the line cannot be displayed without
    /// it. Issued at most once per view; returns whether it was issued.
    pub fn activate<S, A>(&mut self, store: &S, actions: &mut A) -> bool
    where
        S: CatalogStore + ?Sized,
        A: StoreActions + ?Sized,
    {
        if self.detail_requested || !self.line.needs_detail(store.cart_product(&self.line.sku)) {
            return false;
        }
        self.detail_requested = true;
        tracing::debug!(sku = %self.line.sku, item_id = %self.line.item_id, "requesting cart item product");
        actions.fetch_cart_item_product(&self.line.sku);
        true
    }

    /// The product detail fetch failed. The line keeps showing its own
    /// price and no image.
    pub fn detail_failed(&mut self, message: impl Into<String>) {
        if !self.detail_requested {
            tracing::debug!(sku = %self.line.sku, "ignoring unrequested cart item product failure");
            return;
        }
        let error = ViewError::Fetch {
            resource: FetchResource::ProductDetail,
            message: message.into(),
        };
        tracing::warn!(sku = %self.line.sku, %error, "cart item product fetch failed");
        self.detail_error = Some(error);
    }

    /// Confirmation dialog shown before removing the line.
    pub fn removal_request<T>(&self, translator: &T) -> ConfirmRequest
    where
        T: Translator + ?Sized,
    {
        ConfirmRequest {
            title: translator.translate(keys::REMOVE_ITEM_DIALOG_TITLE),
            message: format!(
                "{}: {}",
                translator.translate(keys::REMOVE_ITEM_DIALOG_MESSAGE),
                self.line.name
            ),
            confirm_label: translator.translate(keys::OK),
            cancel_label: translator.translate(keys::CANCEL),
        }
    }

    /// Ask before removing; dispatches exactly one removal on confirm and
    /// nothing on cancel. Returns whether the removal was dispatched.
    pub fn request_removal<P, T, A>(&self, prompt: &mut P, translator: &T, actions: &mut A) -> bool
    where
        P: ConfirmPrompt + ?Sized,
        T: Translator + ?Sized,
        A: StoreActions + ?Sized,
    {
        let request = self.removal_request(translator);
        if !prompt.confirm(&request) {
            tracing::debug!(item_id = %self.line.item_id, "cart item removal cancelled");
            return false;
        }
        tracing::debug!(item_id = %self.line.item_id, "removing cart item");
        actions.remove_cart_item(&self.line.item_id);
        true
    }

    pub fn summary<S, T>(&self, store: &S, translator: &T, config: &StorefrontConfig) -> CartLineSummary
    where
        S: CatalogStore + ?Sized,
        T: Translator + ?Sized,
    {
        let detail = store.cart_product(&self.line.sku);
        CartLineSummary {
            name: self.line.name.clone(),
            price_text: format!(
                "{}: {}{}",
                translator.translate(keys::PRICE),
                config.currency_symbol,
                self.line.display_price(detail)
            ),
            quantity_text: format!("{} : {}", translator.translate(keys::QUANTITY), self.line.qty),
            image_url: self.line.image_url(detail, &config.media_base_url),
        }
    }
}
