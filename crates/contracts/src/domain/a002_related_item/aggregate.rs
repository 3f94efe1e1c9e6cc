use serde::{Deserialize, Serialize};

/// Идентификатор связанного элемента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelatedItemId(pub i64);

crate::impl_integer_aggregate_id!(RelatedItemId, "related item id");

/// Secondary entity attached to a product, returned as a bare array by
/// `GET /product/:product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub id: RelatedItemId,

    #[serde(default)]
    pub title: Option<String>,

    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Source page the item was collected from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Server-side selection flag at load time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl RelatedItem {
    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or(false)
    }
}
