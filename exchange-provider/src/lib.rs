//! # Exchange Provider
//!
//! Concrete rate provider implementations (adapters) for the exchange service.
//! Each adapter implements the `RateProvider` port.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use exchange_types::{DailyRateSet, FetchError, RateProvider};

pub mod fixed;
pub mod swop;

// Re-export individual providers for direct use if needed
pub use fixed::StaticRateProvider;
pub use swop::SwopProvider;

/// Default Swop REST endpoint.
pub const DEFAULT_SWOP_API_URL: &str = "https://swop.cx/rest";

/// Which adapter to wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Swop,
    Static,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swop" => Ok(ProviderKind::Swop),
            "static" => Ok(ProviderKind::Static),
            _ => anyhow::bail!("Unknown rate provider: {}. Supported: swop, static", s),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Swop => f.write_str("swop"),
            ProviderKind::Static => f.write_str("static"),
        }
    }
}

/// Settings needed to build a provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub swop_api_url: String,
    pub swop_api_key: Option<String>,
}

/// Unified provider wrapper over the available adapters.
pub enum Provider {
    Swop(SwopProvider),
    Static(StaticRateProvider),
}

/// Build a provider from settings.
///
/// The Swop adapter requires a non-blank API key.
///
/// # Examples
///
/// ```ignore
/// let provider = build_provider(&ProviderSettings {
///     kind: ProviderKind::Swop,
///     swop_api_url: DEFAULT_SWOP_API_URL.into(),
///     swop_api_key: Some("my-key".into()),
/// })?;
/// ```
pub fn build_provider(settings: &ProviderSettings) -> anyhow::Result<Provider> {
    match settings.kind {
        ProviderKind::Swop => {
            let api_key = settings
                .swop_api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .ok_or_else(|| anyhow::anyhow!("SWOP_API_KEY is required for the swop provider"))?;

            if settings.swop_api_url.trim().is_empty() {
                anyhow::bail!("SWOP_API_URL must not be blank");
            }

            Ok(Provider::Swop(SwopProvider::new(
                settings.swop_api_url.trim(),
                api_key,
            )))
        }
        ProviderKind::Static => Ok(Provider::Static(StaticRateProvider::default())),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement RateProvider for Provider (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateProvider for Provider {
    async fn fetch_rates(&self) -> Result<DailyRateSet, FetchError> {
        match self {
            Provider::Swop(inner) => inner.fetch_rates().await,
            Provider::Static(inner) => inner.fetch_rates().await,
        }
    }
}
