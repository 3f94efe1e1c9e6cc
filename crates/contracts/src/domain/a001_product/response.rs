use super::aggregate::ProductSummary;
use serde::{Deserialize, Serialize};

/// Pagination block of the listing response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default)]
    pub total_pages: Option<u32>,

    #[serde(default)]
    pub current_page: Option<u32>,
}

/// Envelope of `POST /products`.
///
/// Every field defaults so that a malformed body still parses; use
/// [`ProductListResponse::into_page`] to tell a usable page from garbage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub status: bool,

    #[serde(default)]
    pub data: Option<Vec<ProductSummary>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

impl ProductListResponse {
    /// Products and optional meta, or `None` when `status` is false or
    /// `data` is missing.
    pub fn into_page(self) -> Option<(Vec<ProductSummary>, Option<ListMeta>)> {
        match (self.status, self.data) {
            (true, Some(data)) => Some((data, self.meta)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_page() {
        let response: ProductListResponse = serde_json::from_value(json!({
            "status": true,
            "data": [{ "product_id": 1 }, { "product_id": 2 }],
            "meta": { "totalPages": 4, "currentPage": 2 }
        }))
        .unwrap();

        let (data, meta) = response.into_page().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(
            meta,
            Some(ListMeta {
                total_pages: Some(4),
                current_page: Some(2)
            })
        );
    }

    #[test]
    fn test_page_without_meta() {
        let response: ProductListResponse =
            serde_json::from_value(json!({ "status": true, "data": [] })).unwrap();

        assert_eq!(response.into_page(), Some((Vec::new(), None)));
    }

    #[test]
    fn test_malformed_responses_are_rejected() {
        let missing_status: ProductListResponse =
            serde_json::from_value(json!({ "data": [{ "product_id": 1 }] })).unwrap();
        assert_eq!(missing_status.into_page(), None);

        let missing_data: ProductListResponse =
            serde_json::from_value(json!({ "status": true })).unwrap();
        assert_eq!(missing_data.into_page(), None);

        let failed: ProductListResponse =
            serde_json::from_value(json!({ "status": false, "data": [] })).unwrap();
        assert_eq!(failed.into_page(), None);
    }
}
