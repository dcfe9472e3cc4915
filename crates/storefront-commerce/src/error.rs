//! Commerce error types.

use crate::ids::AttributeId;
use thiserror::Error;

/// Errors produced while turning a product and its selections into a
/// cart request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// The product type cannot be added to the cart from a product view.
    #[error("Unsupported product type: {0}")]
    UnsupportedProductType(String),

    /// A configurable option has no selected value.
    #[error("No value selected for option {label} (attribute {attribute_id})")]
    IncompleteSelection {
        attribute_id: AttributeId,
        label: String,
    },

    /// A selected value is not one the option offers.
    #[error("Value {value} is not offered for attribute {attribute_id}")]
    InvalidSelection {
        attribute_id: AttributeId,
        value: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CommerceError {
    /// Whether retrying with different input could ever succeed.
    ///
    /// An unsupported product type is a hard stop; callers disable the
    /// submission control instead of surfacing a transient message.
    pub fn is_hard_stop(&self) -> bool {
        matches!(self, CommerceError::UnsupportedProductType(_))
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
