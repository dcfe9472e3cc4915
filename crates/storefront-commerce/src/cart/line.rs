//! Lines already in the cart.

use crate::catalog::Product;
use crate::ids::{CartItemId, Sku};
use serde::{Deserialize, Serialize};

/// A line of the current quote, as the cart endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: CartItemId,
    pub sku: Sku,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub qty: u32,
    /// Thumbnail URL when the backend already supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl CartLine {
    pub fn new(
        item_id: impl Into<CartItemId>,
        sku: impl Into<Sku>,
        name: impl Into<String>,
        price: f64,
        qty: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            sku: sku.into(),
            name: name.into(),
            price,
            qty,
            thumbnail: None,
        }
    }

    /// Whether the line needs its product detail fetched to be displayed.
    pub fn needs_detail(&self, detail: Option<&Product>) -> bool {
        self.thumbnail.is_none() && detail.is_none()
    }

    /// Unit price to display; the product detail wins once it is known.
    pub fn display_price(&self, detail: Option<&Product>) -> f64 {
        detail.map(|p| p.price).unwrap_or(self.price)
    }

    /// Image to display for this line, empty when unknown.
    pub fn image_url(&self, detail: Option<&Product>, media_base_url: &str) -> String {
        detail
            .and_then(|p| p.thumbnail_url(media_base_url))
            .or_else(|| self.thumbnail.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CustomAttribute;

    #[test]
    fn test_cart_line_from_json() {
        let json = r#"{"item_id": 7, "sku": "MH01-XS-Black", "qty": 2, "name": "Hoodie", "price": 52, "product_type": "simple", "quote_id": "4"}"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.item_id.as_str(), "7");
        assert_eq!(line.qty, 2);
        assert!(line.thumbnail.is_none());
    }

    #[test]
    fn test_needs_detail() {
        let mut line = CartLine::new(7u64, "MH01", "Hoodie", 52.0, 1);
        let detail = Product::new("MH01", "Hoodie", 48.0);

        assert!(line.needs_detail(None));
        assert!(!line.needs_detail(Some(&detail)));

        line.thumbnail = Some("https://shop.test/t.jpg".to_string());
        assert!(!line.needs_detail(None));
    }

    #[test]
    fn test_display_price_prefers_detail() {
        let line = CartLine::new(7u64, "MH01", "Hoodie", 52.0, 1);
        let detail = Product::new("MH01", "Hoodie", 48.0);
        assert_eq!(line.display_price(None), 52.0);
        assert_eq!(line.display_price(Some(&detail)), 48.0);
    }

    #[test]
    fn test_image_url() {
        let line = CartLine::new(7u64, "MH01", "Hoodie", 52.0, 1);
        assert_eq!(line.image_url(None, "https://shop.test/media"), "");

        let mut detail = Product::new("MH01", "Hoodie", 48.0);
        detail
            .custom_attributes
            .push(CustomAttribute::new("thumbnail", "/m/h/mh01.jpg"));
        assert_eq!(
            line.image_url(Some(&detail), "https://shop.test/media"),
            "https://shop.test/media/catalog/product/m/h/mh01.jpg"
        );
    }
}
