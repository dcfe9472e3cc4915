//! Shopping cart module.
//!
//! Contains the add-to-cart request shape, the orchestrator that builds it,
//! and lines already in the cart.

mod item;
mod line;
mod orchestrator;

pub use item::{AddToCartBody, CartItem, ConfigurableItemOption, ProductOption, ProductOptionExtension};
pub use line::CartLine;
pub use orchestrator::{build_cart_item, supports_add_to_cart, ADD_TO_CART_QTY};
