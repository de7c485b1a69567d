//! OpenAPI document for the currency endpoints.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use exchange_types::{ConvertQuery, ExchangeRate};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List currencies available today
#[utoipa::path(
    get,
    path = "/api/currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "Currency codes in provider order", body = Vec<String>, example = json!(["USD", "GBP", "JPY"])),
        (status = 500, description = "Rates could not be fetched")
    )
)]
async fn list_currencies() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/api/currencies/convert",
    tag = "currencies",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Converted amount formatted in the target currency", body = String, content_type = "text/plain", example = "£85.00"),
        (status = 400, description = "Missing parameter or unavailable currency", body = String, content_type = "text/plain", example = "Currency is not available: XYZ"),
        (status = 500, description = "Rates could not be fetched")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Exchange API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Exchange Service API",
        version = "1.0.0",
        description = "Lists available currencies and converts amounts using daily EUR-based exchange rates.",
        license(name = "MIT"),
    ),
    paths(health, list_currencies, convert),
    components(schemas(ConvertQuery, ExchangeRate)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currencies", description = "Currency listing and conversion"),
    )
)]
pub struct ApiDoc;
