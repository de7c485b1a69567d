//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ConversionRequest;

/// Query string of `GET /api/currencies/convert`.
///
/// Every field is optional at the wire level so that missing parameters reach
/// the service's validation and produce its message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Currency to convert from
    #[schema(example = "USD")]
    pub source_currency: Option<String>,
    /// Currency to convert to
    #[schema(example = "GBP")]
    pub target_currency: Option<String>,
    /// Amount in the source currency
    #[schema(example = 110.0)]
    pub amount: Option<f64>,
}

impl From<ConvertQuery> for ConversionRequest {
    fn from(query: ConvertQuery) -> Self {
        ConversionRequest {
            source_currency: query.source_currency.unwrap_or_default(),
            target_currency: query.target_currency.unwrap_or_default(),
            amount: query.amount,
        }
    }
}
