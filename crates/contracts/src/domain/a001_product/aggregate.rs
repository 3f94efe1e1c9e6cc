use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

crate::impl_integer_aggregate_id!(ProductId, "product id");

// ============================================================================
// Product summary
// ============================================================================

/// Product as returned by the listing endpoint.
///
/// The detail screen reuses the same shape: it asks the listing endpoint for
/// a single product with `filter: {product_id: N}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_id: ProductId,

    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub brand_name: Option<String>,

    #[serde(default)]
    pub category_name: Option<String>,

    #[serde(default)]
    pub subcategory_name: Option<String>,

    /// Absent when the backend does not track activity for the product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_preview_image: Option<String>,

    /// Внешняя страница товара (ссылка "View on Website")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProductSummary {
    /// Name shown on cards and image placeholders.
    pub fn display_name(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    #[test]
    fn test_deserialize_minimal_product() {
        let product: ProductSummary =
            serde_json::from_value(serde_json::json!({ "product_id": 7 })).unwrap();

        assert_eq!(product.product_id, ProductId(7));
        assert_eq!(product.product_name, None);
        assert_eq!(product.active, None);
        assert_eq!(product.display_name(), None);
    }

    #[test]
    fn test_deserialize_full_product() {
        let product: ProductSummary = serde_json::from_value(serde_json::json!({
            "product_id": 42,
            "product_name": "Desk lamp",
            "brand_name": "Lumo",
            "category_name": "Lighting",
            "subcategory_name": "Desk",
            "active": false,
            "selected": true,
            "url_preview_image": "https://cdn.example.com/42.png",
            "url": "https://shop.example.com/p/42"
        }))
        .unwrap();

        assert_eq!(product.display_name(), Some("Desk lamp"));
        assert_eq!(product.active, Some(false));
        assert_eq!(product.selected, Some(true));
        assert_eq!(product.url.as_deref(), Some("https://shop.example.com/p/42"));
    }

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string("42"), Ok(ProductId(42)));
        assert_eq!(ProductId::from_string(" 42 "), Ok(ProductId(42)));
        assert!(ProductId::from_string("abc").is_err());
        assert!(ProductId::from_string("").is_err());
        assert_eq!(ProductId(42).as_string(), "42");
    }
}
