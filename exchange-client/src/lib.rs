//! # Exchange Client SDK
//!
//! A typed Rust client for the Exchange API.

use reqwest::Client;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exchange API client.
pub struct ExchangeClient {
    base_url: String,
    http: Client,
}

impl ExchangeClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists currencies available today.
    pub async fn list_currencies(&self) -> Result<Vec<String>, ClientError> {
        let resp = self.get("/api/currencies", &[]).await?;
        Ok(serde_json::from_str(&resp)?)
    }

    /// Converts `amount` and returns the server-formatted result.
    pub async fn convert(
        &self,
        source_currency: &str,
        target_currency: &str,
        amount: f64,
    ) -> Result<String, ClientError> {
        let amount = amount.to_string();
        self.get(
            "/api/currencies/convert",
            &[
                ("sourceCurrency", source_currency),
                ("targetCurrency", target_currency),
                ("amount", amount.as_str()),
            ],
        )
        .await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}
