//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use currency_format::CurrencyFormatter;
use exchange_types::{AppError, ConversionRequest, ConvertQuery, RateProvider};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConversionService<P>,
    pub formatter: CurrencyFormatter,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    /// Client errors carry their message as plain text; internal failures
    /// are logged here and answered with an empty 500.
    fn into_response(self) -> Response {
        match self.0 {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List the currencies available today.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let currencies = state
        .service
        .list_currencies()
        .await
        .map_err(AppError::from)?;
    Ok(Json(currencies))
}

/// Convert an amount and render it in the target currency.
#[tracing::instrument(skip(state, query))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let req = ConversionRequest::from(query);
    let target = req.target_currency.clone();

    let converted = state.service.convert(req).await.map_err(AppError::from)?;
    tracing::debug!(converted, %target, "Converted amount");

    Ok(state.formatter.format(converted, &target))
}
