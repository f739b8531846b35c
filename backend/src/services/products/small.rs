//! # Small Product Catalogue
//!
//! Handler for `GET /api/products/small`. The catalogue is the same ten
//! products on every call, parsed from `products-small.json`.

use actix_web::{HttpResponse, Responder};
use common::model::product::Product;
use log::{debug, error};

const CATALOGUE: &str = include_str!("products-small.json");

/// Actix web handler for the `GET /api/products/small` endpoint.
///
/// # Returns
/// - `200 OK` with the product list as a JSON payload.
/// - `503 Service Unavailable` if the embedded catalogue cannot be parsed.
pub async fn process() -> impl Responder {
    match load_catalogue() {
        Ok(products) => {
            debug!("Serving {} products", products.len());
            HttpResponse::Ok().json(products)
        }
        Err(e) => {
            error!("Product catalogue is unreadable: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error loading products: {}", e))
        }
    }
}

/// Parses the embedded catalogue.
pub fn load_catalogue() -> Result<Vec<Product>, String> {
    serde_json::from_str(CATALOGUE).map_err(|e| e.to_string())
}
