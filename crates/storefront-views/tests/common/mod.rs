#![allow(dead_code)]

use storefront_views::commerce::{AttributeId, CartItem, CartItemId, Sku};
use storefront_views::ports::{ConfirmPrompt, ConfirmRequest, StoreActions};

/// Every action a view dispatched, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchProductMedia(Sku),
    FetchConfigurableOptions(Sku),
    FetchCartItemProduct(Sku),
    UpdateSelection(AttributeId, String),
    SubmitAddToCart(CartItem),
    RemoveCartItem(CartItemId),
}

#[derive(Debug, Default)]
pub struct RecordingActions {
    pub actions: Vec<Action>,
}

impl RecordingActions {
    pub fn count(&self, pred: impl Fn(&Action) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(a)).count()
    }

    pub fn submitted(&self) -> Vec<&CartItem> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::SubmitAddToCart(item) => Some(item),
                _ => None,
            })
            .collect()
    }
}

impl StoreActions for RecordingActions {
    fn fetch_product_media(&mut self, sku: &Sku) {
        self.actions.push(Action::FetchProductMedia(sku.clone()));
    }

    fn fetch_configurable_options(&mut self, sku: &Sku) {
        self.actions.push(Action::FetchConfigurableOptions(sku.clone()));
    }

    fn fetch_cart_item_product(&mut self, sku: &Sku) {
        self.actions.push(Action::FetchCartItemProduct(sku.clone()));
    }

    fn update_selection(&mut self, attribute_id: &AttributeId, value: &str) {
        self.actions
            .push(Action::UpdateSelection(attribute_id.clone(), value.to_string()));
    }

    fn submit_add_to_cart(&mut self, cart_item: CartItem) {
        self.actions.push(Action::SubmitAddToCart(cart_item));
    }

    fn remove_cart_item(&mut self, item_id: &CartItemId) {
        self.actions.push(Action::RemoveCartItem(item_id.clone()));
    }
}

/// Prompt that always gives the same answer and remembers what it was asked.
#[derive(Debug)]
pub struct ScriptedPrompt {
    pub answer: bool,
    pub asked: Vec<ConfirmRequest>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, request: &ConfirmRequest) -> bool {
        self.asked.push(request.clone());
        self.answer
    }
}
