//! Configuration loading from environment.

use std::env;

use currency_format::Locale;
use exchange_provider::{DEFAULT_SWOP_API_URL, ProviderKind, ProviderSettings};

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderSettings,
    pub locale: Locale,
    pub cache_retention_days: u32,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?;

        let kind: ProviderKind = lookup("RATE_PROVIDER")
            .unwrap_or_else(|| "swop".to_string())
            .parse()?;

        let swop_api_url =
            lookup("SWOP_API_URL").unwrap_or_else(|| DEFAULT_SWOP_API_URL.to_string());
        let swop_api_key = lookup("SWOP_API_KEY");

        let locale = match lookup("FORMAT_LOCALE") {
            Some(tag) => tag.parse()?,
            None => Locale::default(),
        };

        let cache_retention_days: u32 = lookup("CACHE_RETENTION_DAYS")
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid CACHE_RETENTION_DAYS: {}", e))?;

        let otlp_endpoint =
            lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            provider: ProviderSettings {
                kind,
                swop_api_url,
                swop_api_key,
            },
            locale,
            cache_retention_days,
            otlp_endpoint,
        })
    }
}
