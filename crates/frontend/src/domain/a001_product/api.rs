use crate::shared::api_utils::ApiConfig;
use contracts::domain::a001_product::{
    BulkCommissionUpdateRequest, CommissionUpdateRequest, Product,
};
use gloo_net::http::Request;

/// Load the full product list.
pub async fn fetch_products(config: &ApiConfig) -> Result<Vec<Product>, String> {
    let response = Request::get(&config.url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Commit one product's commission percent.
///
/// The response body is ignored; the caller patches its local copy on
/// success.
pub async fn update_commission(
    config: &ApiConfig,
    product_id: &str,
    commission_percent: u8,
) -> Result<(), String> {
    let url = config.url(&format!("/api/products/{}/commission", product_id));
    let body = CommissionUpdateRequest { commission_percent };

    let response = Request::put(&url)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// Apply one commission percent to every product in the request.
///
/// Returns the full updated product list; the caller replaces its local
/// state wholesale.
pub async fn bulk_update_commission(
    config: &ApiConfig,
    request: &BulkCommissionUpdateRequest,
) -> Result<Vec<Product>, String> {
    let response = Request::put(&config.url("/api/products/commission-update"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
