use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page size used by the catalog browser
pub const DEFAULT_PAGE_SIZE: u32 = 25;

// ============================================================================
// Sorting
// ============================================================================

/// Поля, по которым бэкенд умеет сортировать список товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ProductId,
    ProductName,
    BrandName,
    CategoryName,
    SubcategoryName,
    Active,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::ProductId,
        SortField::ProductName,
        SortField::BrandName,
        SortField::CategoryName,
        SortField::SubcategoryName,
        SortField::Active,
    ];

    /// Wire name, also used as the `<option>` value in the sort panel
    pub fn code(&self) -> &'static str {
        match self {
            SortField::ProductId => "product_id",
            SortField::ProductName => "product_name",
            SortField::BrandName => "brand_name",
            SortField::CategoryName => "category_name",
            SortField::SubcategoryName => "subcategory_name",
            SortField::Active => "active",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::ProductId => "Product ID",
            SortField::ProductName => "Product Name",
            SortField::BrandName => "Brand",
            SortField::CategoryName => "Category",
            SortField::SubcategoryName => "Subcategory",
            SortField::Active => "Status",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.code() == code)
    }
}

/// Sort direction, `1` ascending and `-1` descending on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_i8(&self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match i8::deserialize(deserializer)? {
            1 => Ok(SortDirection::Ascending),
            -1 => Ok(SortDirection::Descending),
            other => Err(de::Error::custom(format!(
                "sort direction must be 1 or -1, got {}",
                other
            ))),
        }
    }
}

/// `{field: direction}`; the catalog browser always sends a single entry
pub type SortMap = BTreeMap<SortField, SortDirection>;

// ============================================================================
// Filtering
// ============================================================================

/// Product id filter value.
///
/// Numeric input is sent as an integer, anything else is passed through as
/// the raw string and left for the backend to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductIdFilter {
    Id(i64),
    Raw(String),
}

/// Partial predicate map over product summary fields.
/// Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductIdFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl ProductFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            product_id: Some(ProductIdFilter::Id(id)),
            ..Self::default()
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// Body of `POST /products`.
///
/// The list screen always sends every field. The detail screen sends only a
/// filter, so pagination and sort are optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sort: SortMap,

    #[serde(default)]
    pub filter: ProductFilter,
}

impl Default for ProductListRequest {
    fn default() -> Self {
        let mut sort = SortMap::new();
        sort.insert(SortField::ProductId, SortDirection::Descending);

        Self {
            page: Some(1),
            page_size: Some(DEFAULT_PAGE_SIZE),
            sort,
            filter: ProductFilter::default(),
        }
    }
}

impl ProductListRequest {
    /// Single product lookup used by the detail screen.
    pub fn single(id: i64) -> Self {
        Self {
            page: None,
            page_size: None,
            sort: SortMap::new(),
            filter: ProductFilter::by_id(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request_shape() {
        let body = serde_json::to_value(ProductListRequest::default()).unwrap();

        assert_eq!(
            body,
            json!({
                "page": 1,
                "pageSize": 25,
                "sort": { "product_id": -1 },
                "filter": {}
            })
        );
    }

    #[test]
    fn test_single_product_request_omits_pagination() {
        let body = serde_json::to_value(ProductListRequest::single(42)).unwrap();

        assert_eq!(body, json!({ "filter": { "product_id": 42 } }));
    }

    #[test]
    fn test_filter_serializes_only_present_fields() {
        let filter = ProductFilter {
            product_id: Some(ProductIdFilter::Raw("A-17".to_string())),
            brand_name: Some("Lumo".to_string()),
            active: Some(false),
            ..ProductFilter::default()
        };

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "product_id": "A-17", "brand_name": "Lumo", "active": false })
        );
    }

    #[test]
    fn test_sort_direction_wire_values() {
        let mut sort = SortMap::new();
        sort.insert(SortField::BrandName, SortDirection::Ascending);
        assert_eq!(serde_json::to_value(&sort).unwrap(), json!({ "brand_name": 1 }));

        let parsed: SortMap = serde_json::from_value(json!({ "active": -1 })).unwrap();
        assert_eq!(parsed.get(&SortField::Active), Some(&SortDirection::Descending));

        assert!(serde_json::from_value::<SortDirection>(json!(0)).is_err());
    }

    #[test]
    fn test_sort_field_codes_round_trip_through_options() {
        for field in SortField::ALL {
            assert_eq!(SortField::from_code(field.code()), Some(field));
        }
        assert_eq!(SortField::from_code("price"), None);
    }
}
