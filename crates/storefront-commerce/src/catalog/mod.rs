//! Product catalog module.
//!
//! Contains types for products, configurable options, the attribute
//! catalog, and media.

mod attribute;
mod media;
mod product;

pub use attribute::{Attribute, AttributeCatalog, AttributeValue, ConfigurableOption, OptionValue};
pub use media::{visible_media, MediaEntry};
pub use product::{
    description, CustomAttribute, Product, ProductType, DESCRIPTION_ATTRIBUTE, THUMBNAIL_ATTRIBUTE,
};
