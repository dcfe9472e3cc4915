//! Configurable option resolution.
//!
//! Works out which attribute values a configurable product actually offers
//! by intersecting each option's allowed value indexes with the global
//! attribute catalog. Options whose catalog entry has not arrived yet are
//! reported as [`OptionState::Pending`] so the caller can show a
//! placeholder and resolve again later.

use crate::catalog::{Attribute, AttributeCatalog, AttributeValue, ConfigurableOption};
use crate::ids::AttributeId;
use crate::selection::SelectionSet;
use serde::Serialize;

/// Resolution state of a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "values", rename_all = "lowercase")]
pub enum OptionState {
    /// The attribute catalog entry is not available yet.
    Pending,
    /// Selectable values, in catalog order.
    Ready(Vec<AttributeValue>),
}

impl OptionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, OptionState::Pending)
    }

    /// Selectable values, empty while pending.
    pub fn values(&self) -> &[AttributeValue] {
        match self {
            OptionState::Pending => &[],
            OptionState::Ready(values) => values,
        }
    }
}

/// An option ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOption {
    pub attribute_id: AttributeId,
    pub label: String,
    pub position: i32,
    pub state: OptionState,
    /// Value currently selected for this attribute.
    pub selected: Option<String>,
}

/// Resolve one option against its attribute catalog entry.
pub fn resolve_option(option: &ConfigurableOption, attribute: Option<&Attribute>) -> OptionState {
    match attribute {
        None => OptionState::Pending,
        Some(attribute) => OptionState::Ready(
            attribute
                .options
                .iter()
                .filter(|v| option.allows(&v.value))
                .cloned()
                .collect(),
        ),
    }
}

/// Options in ascending `position` order; equal positions keep their
/// declared order.
pub fn sorted_options(options: &[ConfigurableOption]) -> Vec<&ConfigurableOption> {
    let mut sorted: Vec<&ConfigurableOption> = options.iter().collect();
    sorted.sort_by_key(|o| o.position);
    sorted
}

/// Resolve every option of a product for display.
pub fn resolve_options(
    options: &[ConfigurableOption],
    catalog: &AttributeCatalog,
    selections: &SelectionSet,
) -> Vec<ResolvedOption> {
    sorted_options(options)
        .into_iter()
        .map(|option| ResolvedOption {
            attribute_id: option.attribute_id.clone(),
            label: option.label.clone(),
            position: option.position,
            state: resolve_option(option, catalog.get(&option.attribute_id)),
            selected: selections.get(&option.attribute_id).map(str::to_string),
        })
        .collect()
}

/// Whether every option has its catalog entry.
pub fn all_resolved(options: &[ConfigurableOption], catalog: &AttributeCatalog) -> bool {
    options.iter().all(|o| catalog.contains(&o.attribute_id))
}
