//! Product types as returned by the catalog API.

use crate::catalog::{ConfigurableOption, MediaEntry};
use crate::ids::Sku;
use serde::{Deserialize, Serialize};

/// Custom attribute holding the long product description (HTML).
pub const DESCRIPTION_ATTRIBUTE: &str = "description";

/// Custom attribute holding the thumbnail path relative to the product
/// media directory.
pub const THUMBNAIL_ATTRIBUTE: &str = "thumbnail";

/// Product type classification (`type_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    /// Product with no selectable options.
    #[default]
    Simple,
    /// Product whose purchasable variant depends on attribute selections.
    Configurable,
    Virtual,
    Bundle,
    Grouped,
    Downloadable,
    /// Any type this client does not know about.
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Configurable => "configurable",
            ProductType::Virtual => "virtual",
            ProductType::Bundle => "bundle",
            ProductType::Grouped => "grouped",
            ProductType::Downloadable => "downloadable",
            ProductType::Other(s) => s,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "simple" => ProductType::Simple,
            "configurable" => ProductType::Configurable,
            "virtual" => ProductType::Virtual,
            "bundle" => ProductType::Bundle,
            "grouped" => ProductType::Grouped,
            "downloadable" => ProductType::Downloadable,
            other => ProductType::Other(other.to_string()),
        }
    }
}

impl From<String> for ProductType {
    fn from(s: String) -> Self {
        ProductType::from_str(&s)
    }
}

impl From<ProductType> for String {
    fn from(t: ProductType) -> Self {
        t.as_str().to_string()
    }
}

/// A `{attribute_code, value}` pair attached to a product.
///
/// Values are left as raw JSON: most are strings, multiselect attributes
/// come back as arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomAttribute {
    pub attribute_code: String,
    pub value: serde_json::Value,
}

impl CustomAttribute {
    pub fn new(code: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            attribute_code: code.into(),
            value: value.into(),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stock keeping unit (unique).
    pub sku: Sku,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Type of product.
    #[serde(default)]
    pub type_id: ProductType,
    /// Base price, shown as-is next to the store currency symbol.
    #[serde(default)]
    pub price: f64,
    /// Ordered custom attributes.
    #[serde(default)]
    pub custom_attributes: Vec<CustomAttribute>,
    /// Configurable options, filled in once they have been fetched.
    #[serde(default)]
    pub options: Vec<ConfigurableOption>,
    /// Media gallery entries, when the endpoint includes them.
    #[serde(default)]
    pub media_gallery_entries: Vec<MediaEntry>,
}

impl Product {
    /// Create a new simple product.
    pub fn new(sku: impl Into<Sku>, name: impl Into<String>, price: f64) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            type_id: ProductType::Simple,
            price,
            custom_attributes: Vec::new(),
            options: Vec::new(),
            media_gallery_entries: Vec::new(),
        }
    }

    /// Create a new configurable product with the given options.
    pub fn configurable(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        price: f64,
        options: Vec<ConfigurableOption>,
    ) -> Self {
        let mut product = Self::new(sku, name, price);
        product.type_id = ProductType::Configurable;
        product.options = options;
        product
    }

    /// Check if this product needs option selections before purchase.
    pub fn is_configurable(&self) -> bool {
        self.type_id == ProductType::Configurable
    }

    /// Look up a custom attribute by code.
    pub fn custom_attribute(&self, code: &str) -> Option<&serde_json::Value> {
        self.custom_attributes
            .iter()
            .find(|a| a.attribute_code == code)
            .map(|a| &a.value)
    }

    /// Look up a string-valued custom attribute by code.
    pub fn custom_attribute_str(&self, code: &str) -> Option<&str> {
        self.custom_attribute(code).and_then(|v| v.as_str())
    }

    /// The product description, if one is set.
    pub fn description(&self) -> Option<&str> {
        description(&self.custom_attributes)
    }

    /// Absolute thumbnail URL, if the product has a thumbnail attribute.
    pub fn thumbnail_url(&self, media_base_url: &str) -> Option<String> {
        let path = self.custom_attribute_str(THUMBNAIL_ATTRIBUTE)?;
        if path.is_empty() {
            return None;
        }
        let base = media_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Some(format!("{}/catalog/product/{}", base, path))
    }

    /// Price prefixed with the store currency symbol.
    pub fn price_text(&self, currency_symbol: &str) -> String {
        format!("{}{}", currency_symbol, self.price)
    }
}

/// Extract the description from a list of custom attributes.
///
/// Returns `None` when the attribute is missing, empty, or not a string.
pub fn description(custom_attributes: &[CustomAttribute]) -> Option<&str> {
    custom_attributes
        .iter()
        .find(|a| a.attribute_code == DESCRIPTION_ATTRIBUTE)
        .and_then(|a| a.value.as_str())
        .filter(|s| !s.is_empty())
}
