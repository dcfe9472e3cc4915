//! Stateful views for the mobile storefront.
//!
//! This crate is the shell around `storefront-commerce`'s pure logic:
//! - `ProductView` - product detail state machine and add-to-cart flow
//! - `CartLineView` - cart line display and removal
//! - `ports` - store, action, confirmation and translation collaborators
//! - `StorefrontConfig` / `Translations` - configuration and i18n tables

mod cart_line;
mod config;
mod error;
mod i18n;
mod product_view;
mod store;

pub mod ports;

pub use cart_line::*;
pub use config::*;
pub use error::*;
pub use i18n::*;
pub use product_view::*;
pub use store::*;

pub use storefront_commerce as commerce;
