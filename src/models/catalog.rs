//! Catalog entities as returned by the Rebrickable API.
//!
//! Field names stay snake_case to match the upstream wire format; these
//! values are embedded by copy into inventory items, so the stored shape
//! is a frozen snapshot of whatever the catalog returned at add time.

use serde::{Deserialize, Serialize};

/// A LEGO part from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub part_num: String,
    pub name: String,
    #[serde(default)]
    pub part_cat_id: i64,
    #[serde(default)]
    pub part_url: Option<String>,
    #[serde(default)]
    pub part_img_url: Option<String>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

/// Cross-references into other cataloging systems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "BrickLink", default, skip_serializing_if = "Option::is_none")]
    pub brick_link: Option<Vec<String>>,
    #[serde(rename = "BrickOwl", default, skip_serializing_if = "Option::is_none")]
    pub brick_owl: Option<Vec<String>>,
    #[serde(rename = "Brickset", default, skip_serializing_if = "Option::is_none")]
    pub brickset: Option<Vec<String>>,
    #[serde(rename = "LDraw", default, skip_serializing_if = "Option::is_none")]
    pub ldraw: Option<Vec<String>>,
    #[serde(rename = "LEGO", default, skip_serializing_if = "Option::is_none")]
    pub lego: Option<Vec<String>>,
}

/// A part color / finish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub name: String,
    pub rgb: String,
    pub is_trans: bool,
}

impl Color {
    /// Sentinel used whenever color information is unavailable.
    pub fn unknown() -> Self {
        Self {
            id: 0,
            name: "Unknown".to_string(),
            rgb: "000000".to_string(),
            is_trans: false,
        }
    }
}

/// LEGO set metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegoSet {
    pub set_num: String,
    pub name: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub theme_id: i64,
    #[serde(default)]
    pub num_parts: i64,
    #[serde(default)]
    pub set_img_url: Option<String>,
    #[serde(default)]
    pub set_url: Option<String>,
}

/// One line of a set's parts inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPart {
    pub id: i64,
    #[serde(default)]
    pub inv_part_id: i64,
    pub part: Part,
    pub color: Color,
    #[serde(default)]
    pub set_num: String,
    pub quantity: i64,
    #[serde(default)]
    pub is_spare: bool,
    #[serde(default)]
    pub element_id: Option<String>,
    #[serde(default)]
    pub num_sets: i64,
}

/// One page of a paginated Rebrickable listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}
