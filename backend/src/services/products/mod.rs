//! # Product Service Module
//!
//! Stub record source for the cell-editing grid. Records are read from a JSON
//! catalogue compiled into the binary; nothing is persisted, and edits made in
//! the browser never come back here.

mod small;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all product endpoints.
const API_PATH: &str = "/api/products";

/// Configures and returns the Actix `Scope` for product routes.
///
/// # Registered Routes:
///
/// *   **`GET /small`**:
///     - **Handler**: `small::process`
///     - **Description**: Returns the ten-record demo catalogue as a JSON array of
///       `common::model::product::Product`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/small", get().to(small::process))
}
