//! Swop REST API adapter.
//!
//! `GET {base_url}/rates?base_currency=EUR` authenticated with an
//! `Authorization: ApiKey <key>` header.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use exchange_types::{BASE_CURRENCY, DailyRateSet, ExchangeRate, FetchError, RateProvider};

/// Rate provider backed by the Swop HTTP API.
pub struct SwopProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl SwopProvider {
    /// Creates a provider using reqwest's default client settings.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn rates_url(&self) -> String {
        format!("{}/rates", self.base_url)
    }
}

#[async_trait]
impl RateProvider for SwopProvider {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_rates(&self) -> Result<DailyRateSet, FetchError> {
        tracing::info!("Fetching exchange rates for base {}", BASE_CURRENCY);

        let resp = self
            .http
            .get(self.rates_url())
            .query(&[("base_currency", BASE_CURRENCY)])
            .header(AUTHORIZATION, format!("ApiKey {}", self.api_key))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Network(format!("{} {}", status, body.trim())));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let rates: Vec<ExchangeRate> =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!(count = rates.len(), "Fetched exchange rates");
        Ok(DailyRateSet::new(rates))
    }
}
