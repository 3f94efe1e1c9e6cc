pub mod aggregate;
pub mod request;
pub mod response;

pub use aggregate::{ProductId, ProductSummary};
pub use request::{
    ProductFilter, ProductIdFilter, ProductListRequest, SortDirection, SortField, SortMap,
    DEFAULT_PAGE_SIZE,
};
pub use response::{ListMeta, ProductListResponse};
