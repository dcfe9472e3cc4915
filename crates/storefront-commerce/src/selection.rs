//! The shopper's in-progress attribute selections.

use crate::ids::AttributeId;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from attribute id to the chosen value.
///
/// Re-selecting an attribute replaces its value in place, so the entry
/// keeps the slot it was first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    entries: Vec<(AttributeId, String)>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `attribute_id`, leaving every other attribute
    /// untouched. Returns the previous value, if any.
    pub fn select(
        &mut self,
        attribute_id: impl Into<AttributeId>,
        value: impl Into<String>,
    ) -> Option<String> {
        let attribute_id = attribute_id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(id, _)| *id == attribute_id) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((attribute_id, value));
                None
            }
        }
    }

    pub fn get(&self, attribute_id: &AttributeId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == attribute_id)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, attribute_id: &AttributeId) -> bool {
        self.get(attribute_id).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeId, &str)> {
        self.entries.iter().map(|(id, v)| (id, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<AttributeId>, V: Into<String>> FromIterator<(K, V)> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.select(k, v);
        }
        set
    }
}
