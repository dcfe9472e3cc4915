//! Translation tables.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ports::Translator;

/// Keys the views look up.
pub mod keys {
    pub const REMOVE_ITEM_DIALOG_TITLE: &str = "cartScreen.removeItemDialogTitle";
    pub const REMOVE_ITEM_DIALOG_MESSAGE: &str = "cartScreen.removeItemDialogMessage";
    pub const CANCEL: &str = "common.cancel";
    pub const OK: &str = "common.ok";
    pub const PRICE: &str = "common.price";
    pub const QUANTITY: &str = "common.quantity";
}

/// Flat key -> text table. Unknown keys translate to themselves.
///
/// Accepts both quoted dotted keys and nested tables when deserialized:
///
/// ```toml
/// "common.ok" = "OK"
///
/// [cartScreen]
/// removeItemDialogTitle = "Remove item"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// English defaults for every key in [`keys`].
    pub fn english() -> Self {
        [
            (keys::REMOVE_ITEM_DIALOG_TITLE, "Remove item"),
            (
                keys::REMOVE_ITEM_DIALOG_MESSAGE,
                "Do you want to remove this item from the cart",
            ),
            (keys::CANCEL, "Cancel"),
            (keys::OK, "OK"),
            (keys::PRICE, "Price"),
            (keys::QUANTITY, "Quantity"),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of this table.
    pub fn merge(&mut self, other: Translations) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flatten_into(&mut self, prefix: &str, value: &serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{}.{}", prefix, k)
                    };
                    self.flatten_into(&key, v);
                }
            }
            serde_json::Value::String(s) => self.insert(prefix, s.clone()),
            serde_json::Value::Null => {}
            other => self.insert(prefix, other.to_string()),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

impl<'de> Deserialize<'de> for Translations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let mut table = Self::new();
        table.flatten_into("", &value);
        Ok(table)
    }
}

impl Translator for Translations {
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
