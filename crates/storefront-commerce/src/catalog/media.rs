//! Product media gallery entries.

use serde::{Deserialize, Serialize};

/// A media gallery entry (image or video) of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaEntry {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub disabled: bool,
    /// Path relative to the product media directory.
    #[serde(default)]
    pub file: String,
    /// Roles of this entry (`image`, `small_image`, `thumbnail`).
    #[serde(default)]
    pub types: Vec<String>,
}

impl MediaEntry {
    pub fn image(file: impl Into<String>) -> Self {
        Self {
            media_type: "image".to_string(),
            file: file.into(),
            ..Self::default()
        }
    }
}

/// Enabled entries in gallery order.
pub fn visible_media(entries: &[MediaEntry]) -> Vec<&MediaEntry> {
    let mut visible: Vec<&MediaEntry> = entries.iter().filter(|e| !e.disabled).collect();
    visible.sort_by_key(|e| e.position);
    visible
}
