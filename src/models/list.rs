//! Brick list and line-item models matching the frontend interfaces.

use serde::{Deserialize, Serialize};

use super::{Color, Part};

/// A user-named collection of tracked parts for one set or project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickList {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_num: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds; overwritten on every save.
    pub updated_at: i64,
    pub items: Vec<BrickItem>,
}

impl BrickList {
    /// Total number of bricks needed across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total number of bricks found across all items.
    pub fn total_found(&self) -> i64 {
        self.items.iter().map(|i| i.found).sum()
    }
}

/// One (part, color) line entry within a list.
///
/// Within a list there is at most one item per distinct
/// (part_num, color id) pair; adds that hit an existing pair merge
/// by accumulating quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickItem {
    pub id: String,
    pub part: Part,
    pub color: Color,
    /// Number needed; positive.
    pub quantity: i64,
    /// Number located so far; kept within `0..=quantity`.
    pub found: i64,
}

/// Request body for creating a new list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub name: String,
    #[serde(default)]
    pub set_num: Option<String>,
}

/// Request body for adding a part to a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub part: Part,
    /// Defaults to the unknown sentinel when the caller has no color data.
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Request body for updating an item's found count.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoundRequest {
    pub found: i64,
}

/// Request body for importing a full set inventory into a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSetRequest {
    pub set_num: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, found: i64) -> BrickItem {
        BrickItem {
            id: "i1".to_string(),
            part: Part {
                part_num: "3001".to_string(),
                name: "Brick 2 x 4".to_string(),
                part_cat_id: 11,
                part_url: None,
                part_img_url: None,
                external_ids: None,
            },
            color: Color::unknown(),
            quantity,
            found,
        }
    }

    #[test]
    fn test_totals() {
        let list = BrickList {
            id: "l1".to_string(),
            name: "Test".to_string(),
            set_num: None,
            created_at: 0,
            updated_at: 0,
            items: vec![item(5, 2), item(3, 3)],
        };

        assert_eq!(list.total_quantity(), 8);
        assert_eq!(list.total_found(), 5);
    }

    #[test]
    fn test_list_serializes_camel_case() {
        let list = BrickList {
            id: "l1".to_string(),
            name: "Falcon".to_string(),
            set_num: Some("75192-1".to_string()),
            created_at: 1700000000000,
            updated_at: 1700000000000,
            items: vec![],
        };

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["setNum"], "75192-1");
        assert!(json["createdAt"].is_number());
        assert!(json["updatedAt"].is_number());
    }
}
