//! Состояние списка товаров: черновики фильтра/сортировки и дескриптор запроса.
//!
//! Drafts are what the user is typing. The request descriptor is what was
//! applied, and it is the only thing that drives the listing fetch.

use contracts::domain::a001_product::{
    ListMeta, ProductFilter, ProductIdFilter, ProductListRequest, ProductListResponse,
    ProductSummary, SortDirection, SortField, SortMap,
};

// ============================================================================
// Filter draft
// ============================================================================

/// Fields of the filter form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDraftField {
    ProductId,
    ProductName,
    BrandName,
    CategoryName,
    SubcategoryName,
    Active,
    Selected,
}

impl FilterDraftField {
    pub fn label(&self) -> &'static str {
        match self {
            FilterDraftField::ProductId => "Product ID",
            FilterDraftField::ProductName => "Product Name",
            FilterDraftField::BrandName => "Brand",
            FilterDraftField::CategoryName => "Category",
            FilterDraftField::SubcategoryName => "Subcategory",
            FilterDraftField::Active => "Status",
            FilterDraftField::Selected => "Selected",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterDraftField::ProductId => "Enter ID",
            FilterDraftField::ProductName => "Enter name",
            FilterDraftField::BrandName => "Enter brand",
            FilterDraftField::CategoryName => "Enter category",
            FilterDraftField::SubcategoryName => "Enter subcategory",
            FilterDraftField::Active | FilterDraftField::Selected => "",
        }
    }

    /// `(value, caption)` pairs for the boolean selects
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            FilterDraftField::Active => vec![("", "All"), ("true", "Active"), ("false", "Inactive")],
            FilterDraftField::Selected => {
                vec![("", "All"), ("true", "Selected"), ("false", "Unselected")]
            }
            _ => Vec::new(),
        }
    }
}

/// Unapplied filter form values, kept as the raw strings the inputs produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub product_id: String,
    pub product_name: String,
    pub brand_name: String,
    pub category_name: String,
    pub subcategory_name: String,
    /// "" | "true" | "false"
    pub active: String,
    /// "" | "true" | "false"
    pub selected: String,
}

impl FilterDraft {
    pub fn get(&self, field: FilterDraftField) -> &str {
        match field {
            FilterDraftField::ProductId => &self.product_id,
            FilterDraftField::ProductName => &self.product_name,
            FilterDraftField::BrandName => &self.brand_name,
            FilterDraftField::CategoryName => &self.category_name,
            FilterDraftField::SubcategoryName => &self.subcategory_name,
            FilterDraftField::Active => &self.active,
            FilterDraftField::Selected => &self.selected,
        }
    }

    pub fn set(&mut self, field: FilterDraftField, value: String) {
        match field {
            FilterDraftField::ProductId => self.product_id = value,
            FilterDraftField::ProductName => self.product_name = value,
            FilterDraftField::BrandName => self.brand_name = value,
            FilterDraftField::CategoryName => self.category_name = value,
            FilterDraftField::SubcategoryName => self.subcategory_name = value,
            FilterDraftField::Active => self.active = value,
            FilterDraftField::Selected => self.selected = value,
        }
    }

    /// Translate the draft into the filter sent to the backend.
    ///
    /// Blank fields are omitted and other text is sent as typed. The status
    /// selects become booleans and a numeric product id becomes an integer.
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter {
            product_id: non_blank(&self.product_id).map(|raw| match raw.trim().parse::<i64>() {
                Ok(id) => ProductIdFilter::Id(id),
                Err(_) => ProductIdFilter::Raw(raw),
            }),
            product_name: non_blank(&self.product_name),
            brand_name: non_blank(&self.brand_name),
            category_name: non_blank(&self.category_name),
            subcategory_name: non_blank(&self.subcategory_name),
            active: parse_bool_choice(&self.active),
            selected: parse_bool_choice(&self.selected),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_bool_choice(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Sort draft
// ============================================================================

pub const DIRECTION_ASCENDING: &str = "ascending";
pub const DIRECTION_DESCENDING: &str = "descending";

/// Unapplied sort form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDraft {
    /// Wire code of a [`SortField`]
    pub field: String,
    /// "ascending" | "descending"
    pub direction: String,
}

impl Default for SortDraft {
    fn default() -> Self {
        Self {
            field: SortField::ProductId.code().to_string(),
            direction: DIRECTION_DESCENDING.to_string(),
        }
    }
}

impl SortDraft {
    pub fn direction_options() -> Vec<(&'static str, &'static str)> {
        vec![
            (DIRECTION_ASCENDING, "Ascending"),
            (DIRECTION_DESCENDING, "Descending"),
        ]
    }

    pub fn field_options() -> Vec<(&'static str, &'static str)> {
        SortField::ALL
            .into_iter()
            .map(|field| (field.code(), field.label()))
            .collect()
    }

    /// Single-entry sort map. Anything but "ascending" sorts descending;
    /// an unknown field falls back to the product id.
    pub fn to_sort(&self) -> SortMap {
        let field = SortField::from_code(&self.field).unwrap_or_else(|| {
            log::warn!("Unknown sort field '{}', sorting by product id", self.field);
            SortField::ProductId
        });
        let direction = if self.direction == DIRECTION_ASCENDING {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };

        let mut sort = SortMap::new();
        sort.insert(field, direction);
        sort
    }
}

// ============================================================================
// Reducer
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    ApplyFilter(FilterDraft),
    ApplySort(SortDraft),
    ChangePage(u32),
}

/// Next request descriptor, or `None` when the action leaves it unchanged.
///
/// `total_pages` is the page count last reported by the backend and bounds
/// page changes.
pub fn reduce(
    current: &ProductListRequest,
    action: QueryAction,
    total_pages: u32,
) -> Option<ProductListRequest> {
    let next = match action {
        QueryAction::ApplyFilter(draft) => ProductListRequest {
            page: Some(1),
            filter: draft.to_filter(),
            ..current.clone()
        },
        QueryAction::ApplySort(draft) => ProductListRequest {
            sort: draft.to_sort(),
            ..current.clone()
        },
        QueryAction::ChangePage(page) => {
            if page < 1 || page > total_pages {
                return None;
            }
            ProductListRequest {
                page: Some(page),
                ..current.clone()
            }
        }
    };

    if &next == current {
        None
    } else {
        Some(next)
    }
}

// ============================================================================
// Pagination state reported by the backend
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl PageInfo {
    /// Apply the `meta` block of a successful response; without meta the
    /// previous values are kept. The current page never exceeds the page
    /// count (or 1 when there are no pages).
    pub fn with_meta(self, meta: Option<&ListMeta>) -> Self {
        match meta {
            Some(meta) => {
                let total_pages = meta.total_pages.unwrap_or(0);
                let current_page = meta
                    .current_page
                    .unwrap_or(1)
                    .clamp(1, total_pages.max(1));
                Self {
                    current_page,
                    total_pages,
                }
            }
            None => self,
        }
    }
}

// ============================================================================
// Listing response handling
// ============================================================================

/// Products to show and the page info after a listing fetch.
///
/// A failed fetch or an envelope without `status: true` and `data` clears the
/// list and keeps the previous page info.
pub fn apply_listing_result(
    result: Result<ProductListResponse, String>,
    page_info: PageInfo,
) -> (Vec<ProductSummary>, PageInfo) {
    match result.map(ProductListResponse::into_page) {
        Ok(Some((data, meta))) => (data, page_info.with_meta(meta.as_ref())),
        Ok(None) => {
            log::error!("Unexpected API response format");
            (Vec::new(), page_info)
        }
        Err(e) => {
            log::error!("Error fetching products: {}", e);
            (Vec::new(), page_info)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_on_page(page: u32) -> ProductListRequest {
        ProductListRequest {
            page: Some(page),
            ..ProductListRequest::default()
        }
    }

    #[test]
    fn test_apply_filter_coerces_and_resets_page() {
        let draft = FilterDraft {
            active: "true".to_string(),
            product_id: "42".to_string(),
            product_name: String::new(),
            ..FilterDraft::default()
        };

        let next = reduce(&request_on_page(3), QueryAction::ApplyFilter(draft), 10).unwrap();

        assert_eq!(next.page, Some(1));
        assert_eq!(
            serde_json::to_value(&next.filter).unwrap(),
            json!({ "active": true, "product_id": 42 })
        );
    }

    #[test]
    fn test_filter_draft_translation() {
        let draft = FilterDraft {
            product_id: "SKU-9".to_string(),
            brand_name: "  Lumo ".to_string(),
            category_name: "   ".to_string(),
            active: "false".to_string(),
            selected: "maybe".to_string(),
            ..FilterDraft::default()
        };

        let filter = draft.to_filter();
        assert_eq!(filter.product_id, Some(ProductIdFilter::Raw("SKU-9".to_string())));
        assert_eq!(filter.brand_name.as_deref(), Some("  Lumo "));
        assert_eq!(filter.category_name, None);
        assert_eq!(filter.active, Some(false));
        assert_eq!(filter.selected, None);

        assert_eq!(FilterDraft::default().to_filter(), ProductFilter::default());
    }

    #[test]
    fn test_draft_field_access() {
        let mut draft = FilterDraft::default();
        draft.set(FilterDraftField::SubcategoryName, "Desk".to_string());
        draft.set(FilterDraftField::Selected, "true".to_string());

        assert_eq!(draft.get(FilterDraftField::SubcategoryName), "Desk");
        assert_eq!(draft.to_filter().selected, Some(true));
    }

    #[test]
    fn test_apply_sort_keeps_page() {
        let ascending = SortDraft {
            field: "brand_name".to_string(),
            direction: "ascending".to_string(),
        };
        let next = reduce(&request_on_page(4), QueryAction::ApplySort(ascending), 10).unwrap();
        assert_eq!(next.page, Some(4));
        assert_eq!(serde_json::to_value(&next.sort).unwrap(), json!({ "brand_name": 1 }));

        let descending = SortDraft {
            field: "brand_name".to_string(),
            direction: "descending".to_string(),
        };
        let next = reduce(&next, QueryAction::ApplySort(descending), 10).unwrap();
        assert_eq!(serde_json::to_value(&next.sort).unwrap(), json!({ "brand_name": -1 }));
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_product_id() {
        let draft = SortDraft {
            field: "price".to_string(),
            direction: "ascending".to_string(),
        };
        assert_eq!(
            serde_json::to_value(draft.to_sort()).unwrap(),
            json!({ "product_id": 1 })
        );
    }

    #[test]
    fn test_change_page_out_of_range_is_noop() {
        let current = request_on_page(2);

        assert_eq!(reduce(&current, QueryAction::ChangePage(0), 5), None);
        assert_eq!(reduce(&current, QueryAction::ChangePage(6), 5), None);
        assert_eq!(reduce(&current, QueryAction::ChangePage(2), 5), None);
        assert_eq!(current, request_on_page(2));

        let next = reduce(&current, QueryAction::ChangePage(5), 5).unwrap();
        assert_eq!(next.page, Some(5));
        assert_eq!(next.filter, current.filter);
        assert_eq!(next.sort, current.sort);
    }

    #[test]
    fn test_change_page_without_known_pages_is_noop() {
        assert_eq!(
            reduce(&ProductListRequest::default(), QueryAction::ChangePage(1), 0),
            None
        );
    }

    #[test]
    fn test_reapplying_same_draft_does_not_refetch() {
        let current = ProductListRequest::default();
        assert_eq!(
            reduce(&current, QueryAction::ApplySort(SortDraft::default()), 1),
            None
        );
        assert_eq!(
            reduce(&current, QueryAction::ApplyFilter(FilterDraft::default()), 1),
            None
        );
    }

    #[test]
    fn test_page_info_from_meta() {
        let info = PageInfo::default();

        assert_eq!(info.with_meta(None), info);
        assert_eq!(
            info.with_meta(Some(&ListMeta {
                total_pages: Some(7),
                current_page: Some(3)
            })),
            PageInfo {
                current_page: 3,
                total_pages: 7
            }
        );
        assert_eq!(
            info.with_meta(Some(&ListMeta::default())),
            PageInfo {
                current_page: 1,
                total_pages: 0
            }
        );
    }

    #[test]
    fn test_product_id_with_spaces_is_numeric() {
        let draft = FilterDraft {
            product_id: " 42 ".to_string(),
            ..FilterDraft::default()
        };
        assert_eq!(draft.to_filter().product_id, Some(ProductIdFilter::Id(42)));
    }

    #[test]
    fn test_page_info_clamps_current_page() {
        let info = PageInfo::default().with_meta(Some(&ListMeta {
            total_pages: Some(3),
            current_page: Some(u32::MAX),
        }));
        assert_eq!(info, PageInfo { current_page: 3, total_pages: 3 });

        let info = PageInfo::default().with_meta(Some(&ListMeta {
            total_pages: None,
            current_page: Some(9),
        }));
        assert_eq!(info, PageInfo { current_page: 1, total_pages: 0 });
    }

    fn listing(value: serde_json::Value) -> Result<ProductListResponse, String> {
        Ok(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_listing_failure_clears_products_and_keeps_pages() {
        let previous = PageInfo { current_page: 2, total_pages: 4 };

        let (products, info) = apply_listing_result(Err("HTTP 500".to_string()), previous);
        assert!(products.is_empty());
        assert_eq!(info, previous);

        let (products, info) = apply_listing_result(
            listing(json!({ "status": false, "data": [{ "product_id": 1 }] })),
            previous,
        );
        assert!(products.is_empty());
        assert_eq!(info, previous);

        let (products, info) = apply_listing_result(listing(json!({ "status": true })), previous);
        assert!(products.is_empty());
        assert_eq!(info, previous);
    }

    #[test]
    fn test_listing_success_applies_meta() {
        let previous = PageInfo { current_page: 2, total_pages: 4 };

        let (products, info) = apply_listing_result(
            listing(json!({
                "status": true,
                "data": [{ "product_id": 7 }, { "product_id": 8 }],
                "meta": { "totalPages": 5, "currentPage": 3 }
            })),
            previous,
        );
        assert_eq!(products.len(), 2);
        assert_eq!(info, PageInfo { current_page: 3, total_pages: 5 });

        let (products, info) = apply_listing_result(
            listing(json!({ "status": true, "data": [{ "product_id": 7 }] })),
            previous,
        );
        assert_eq!(products.len(), 1);
        assert_eq!(info, previous);
    }
}
