//! Cart item request shapes.

use crate::error::CommerceError;
use crate::ids::{AttributeId, QuoteId, Sku};
use serde::{Deserialize, Serialize};

/// One `{option_id, option_value}` pair of a configurable cart item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurableItemOption {
    pub option_id: AttributeId,
    pub option_value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOptionExtension {
    #[serde(default)]
    pub configurable_item_options: Vec<ConfigurableItemOption>,
}

/// Product option block of a cart item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(default)]
    pub extension_attributes: ProductOptionExtension,
}

/// A request to add an item to a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub sku: Sku,
    pub qty: u32,
    pub quote_id: QuoteId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_option: Option<ProductOption>,
}

impl CartItem {
    /// A cart item without option payload.
    pub fn simple(sku: Sku, qty: u32, quote_id: QuoteId) -> Self {
        Self {
            sku,
            qty,
            quote_id,
            product_option: None,
        }
    }

    /// A cart item carrying configurable option selections.
    pub fn configurable(
        sku: Sku,
        qty: u32,
        quote_id: QuoteId,
        options: Vec<ConfigurableItemOption>,
    ) -> Self {
        Self {
            sku,
            qty,
            quote_id,
            product_option: Some(ProductOption {
                extension_attributes: ProductOptionExtension {
                    configurable_item_options: options,
                },
            }),
        }
    }

    /// Configurable options, empty for simple items.
    pub fn configurable_options(&self) -> &[ConfigurableItemOption] {
        self.product_option
            .as_ref()
            .map(|o| o.extension_attributes.configurable_item_options.as_slice())
            .unwrap_or(&[])
    }

    /// Request body for the add-to-cart endpoint.
    pub fn to_body(&self) -> AddToCartBody<'_> {
        AddToCartBody { cart_item: self }
    }
}

/// `{"cartItem": ...}` envelope the add-to-cart endpoint expects.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartBody<'a> {
    #[serde(rename = "cartItem")]
    pub cart_item: &'a CartItem,
}

impl AddToCartBody<'_> {
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_item_omits_product_option() {
        let item = CartItem::simple(Sku::new("24-MB01"), 1, QuoteId::new("q1"));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"sku": "24-MB01", "qty": 1, "quote_id": "q1"}));
        assert!(item.configurable_options().is_empty());
    }

    #[test]
    fn test_configurable_item_wire_shape() {
        let item = CartItem::configurable(
            Sku::new("MH01"),
            1,
            QuoteId::new("q1"),
            vec![ConfigurableItemOption {
                option_id: AttributeId::from(93u32),
                option_value: "49".to_string(),
            }],
        );
        let body = item.to_body().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "cartItem": {
                    "sku": "MH01",
                    "qty": 1,
                    "quote_id": "q1",
                    "product_option": {
                        "extension_attributes": {
                            "configurable_item_options": [
                                {"option_id": "93", "option_value": "49"}
                            ]
                        }
                    }
                }
            })
        );
    }
}
