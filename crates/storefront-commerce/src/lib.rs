//! Storefront domain types and decision logic.
//!
//! This crate holds the pure half of the mobile storefront:
//!
//! - **Catalog**: products, configurable options, the attribute catalog, media
//! - **Selection**: the shopper's in-progress attribute choices
//! - **Resolver**: which attribute values a configurable product offers
//! - **Cart**: add-to-cart request building and cart lines
//!
//! Nothing here performs I/O. The `storefront-views` crate owns the mutable
//! per-view state and talks to the store.
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let product = Product::configurable(
//!     "MH01",
//!     "Chaz Kangeroo Hoodie",
//!     52.0,
//!     vec![ConfigurableOption::new(93u32, "Color", 0, [49, 50])],
//! );
//!
//! let mut selections = SelectionSet::new();
//! selections.select(93u32, "49");
//!
//! let item = build_cart_item(&product, &selections, &QuoteId::new("4")).unwrap();
//! assert_eq!(item.configurable_options().len(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod resolver;
pub mod selection;

pub use cart::{CartItem, CartLine};
pub use catalog::Product;
pub use error::CommerceError;
pub use ids::*;
pub use selection::SelectionSet;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        description, Attribute, AttributeCatalog, AttributeValue, ConfigurableOption,
        CustomAttribute, MediaEntry, Product, ProductType,
    };

    // Selection and resolution
    pub use crate::resolver::{resolve_option, resolve_options, OptionState, ResolvedOption};
    pub use crate::selection::SelectionSet;

    // Cart
    pub use crate::cart::{
        build_cart_item, supports_add_to_cart, CartItem, CartLine, ConfigurableItemOption,
        ADD_TO_CART_QTY,
    };
}
