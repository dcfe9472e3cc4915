//! Add-to-cart orchestration.
//!
//! Decides the shape of the cart request from the product type. Nothing
//! here performs I/O: the resulting [`CartItem`] is handed to whoever
//! submits it.

use crate::cart::{CartItem, ConfigurableItemOption};
use crate::catalog::{Product, ProductType};
use crate::error::CommerceError;
use crate::ids::QuoteId;
use crate::resolver::sorted_options;
use crate::selection::SelectionSet;

/// Quantity added per submission. The product view has no quantity
/// selector.
pub const ADD_TO_CART_QTY: u32 = 1;

/// Whether products of this type can be added from a product view.
pub fn supports_add_to_cart(product_type: &ProductType) -> bool {
    matches!(product_type, ProductType::Simple | ProductType::Configurable)
}

/// Build the cart request for `product` with the current selections.
///
/// Configurable payloads follow the selection set's insertion order and
/// carry exactly one entry per option the product defines. Selections for
/// attributes the product does not define are dropped; a selected value the
/// option does not offer is rejected.
pub fn build_cart_item(
    product: &Product,
    selections: &SelectionSet,
    quote_id: &QuoteId,
) -> Result<CartItem, CommerceError> {
    match product.type_id {
        ProductType::Simple => Ok(CartItem::simple(
            product.sku.clone(),
            ADD_TO_CART_QTY,
            quote_id.clone(),
        )),
        ProductType::Configurable => {
            if let Some(missing) = sorted_options(&product.options)
                .into_iter()
                .find(|o| !selections.contains(&o.attribute_id))
            {
                return Err(CommerceError::IncompleteSelection {
                    attribute_id: missing.attribute_id.clone(),
                    label: missing.label.clone(),
                });
            }

            for option in &product.options {
                if let Some(value) = selections.get(&option.attribute_id) {
                    if !option.allows(value) {
                        return Err(CommerceError::InvalidSelection {
                            attribute_id: option.attribute_id.clone(),
                            value: value.to_string(),
                        });
                    }
                }
            }

            let options = selections
                .iter()
                .filter(|(id, _)| product.options.iter().any(|o| &o.attribute_id == *id))
                .map(|(id, value)| ConfigurableItemOption {
                    option_id: id.clone(),
                    option_value: value.to_string(),
                })
                .collect();

            Ok(CartItem::configurable(
                product.sku.clone(),
                ADD_TO_CART_QTY,
                quote_id.clone(),
                options,
            ))
        }
        ref other => Err(CommerceError::UnsupportedProductType(
            other.as_str().to_string(),
        )),
    }
}
