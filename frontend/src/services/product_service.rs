//! Client for the stub product data service.

use common::model::product::Product;
use gloo_net::http::Request;

const PRODUCTS_SMALL_URL: &str = "/api/products/small";

/// Fetches the small demo catalogue.
///
/// # Returns
/// - `Ok(products)` when the server answers `2xx` with a JSON product array.
/// - `Err(String)` on network failure, a non-success status, or a body that
///   does not decode.
pub async fn get_products_small() -> Result<Vec<Product>, String> {
    let response = Request::get(PRODUCTS_SMALL_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!(
            "{} answered {} {}",
            PRODUCTS_SMALL_URL,
            response.status(),
            response.status_text()
        ));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| e.to_string())
}
