use contracts::domain::a001_product::{
    ProductId, ProductListRequest, ProductListResponse, ProductSummary,
};
use contracts::domain::a002_related_item::{RelatedItem, UpdateSelectedRequest};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Query the listing endpoint
///
/// The envelope is returned as is; use `ProductListResponse::into_page` to
/// reject malformed bodies.
pub async fn fetch_products(request: &ProductListRequest) -> Result<ProductListResponse, String> {
    let response = Request::post(&api_url("/products"))
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: HTTP {}", response.status()));
    }

    response
        .json::<ProductListResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one product through the listing endpoint
///
/// `Ok(None)` means the backend answered but has no such product.
pub async fn fetch_product(id: ProductId) -> Result<Option<ProductSummary>, String> {
    let response = fetch_products(&ProductListRequest::single(id.value())).await?;

    let (data, _) = response
        .into_page()
        .ok_or_else(|| "Unexpected response format".to_string())?;

    Ok(data.into_iter().next())
}

/// Fetch the related items of a product (bare array, no envelope)
pub async fn fetch_related_items(id: ProductId) -> Result<Vec<RelatedItem>, String> {
    let url = api_url(&format!(
        "/product/{}",
        urlencoding::encode(&id.as_string())
    ));

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch related items: HTTP {}", response.status()));
    }

    response
        .json::<Vec<RelatedItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Persist the selection state of every related item in one batch
pub async fn update_selected(body: &UpdateSelectedRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/update-selected"))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save: HTTP {}", response.status()));
    }

    Ok(())
}
