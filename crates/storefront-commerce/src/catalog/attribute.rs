//! Configurable options and the global attribute catalog.

use crate::ids::AttributeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One value a configurable option allows, by reference into the
/// attribute catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OptionValue {
    pub value_index: u64,
}

/// A selectable option of a configurable product (e.g. "Size").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigurableOption {
    /// Backend row id of the option, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Attribute this option selects a value for.
    pub attribute_id: AttributeId,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Display and evaluation order, ascending.
    #[serde(default)]
    pub position: i32,
    /// Attribute values valid for this product.
    #[serde(default)]
    pub values: Vec<OptionValue>,
}

impl ConfigurableOption {
    pub fn new(
        attribute_id: impl Into<AttributeId>,
        label: impl Into<String>,
        position: i32,
        value_indexes: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            id: None,
            attribute_id: attribute_id.into(),
            label: label.into(),
            position,
            values: value_indexes
                .into_iter()
                .map(|value_index| OptionValue { value_index })
                .collect(),
        }
    }

    /// Whether a catalog value (as the backend spells it) is valid here.
    pub fn allows(&self, value: &str) -> bool {
        self.values
            .iter()
            .any(|v| v.value_index.to_string() == value)
    }
}

/// A `{label, value}` pair from the attribute catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttributeValue {
    pub label: String,
    pub value: String,
}

impl AttributeValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Every possible value of one attribute, across all products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub attribute_id: AttributeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_code: Option<String>,
    /// Values in catalog order.
    #[serde(default)]
    pub options: Vec<AttributeValue>,
}

impl Attribute {
    pub fn new(attribute_id: impl Into<AttributeId>, options: Vec<AttributeValue>) -> Self {
        Self {
            attribute_id: attribute_id.into(),
            attribute_code: None,
            options,
        }
    }
}

/// Attribute catalog entries fetched so far, keyed by attribute id.
///
/// A missing entry means the attribute has not arrived yet, not that it
/// does not exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeCatalog {
    entries: HashMap<AttributeId, Attribute>,
}

impl AttributeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, attribute: Attribute) {
        self.entries.insert(attribute.attribute_id.clone(), attribute);
    }

    pub fn get(&self, attribute_id: &AttributeId) -> Option<&Attribute> {
        self.entries.get(attribute_id)
    }

    pub fn contains(&self, attribute_id: &AttributeId) -> bool {
        self.entries.contains_key(attribute_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Attribute> for AttributeCatalog {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for attribute in iter {
            catalog.insert(attribute);
        }
        catalog
    }
}
