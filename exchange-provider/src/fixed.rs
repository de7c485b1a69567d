//! Hardcoded rate table for development and testing.

use async_trait::async_trait;

use exchange_types::{Clock, DailyRateSet, ExchangeRate, FetchError, RateProvider, SystemClock};

/// Approximate EUR-based quotes; good enough for local runs without an API key.
const DEFAULT_QUOTES: &[(&str, f64)] = &[
    ("USD", 1.087),
    ("GBP", 0.859),
    ("INR", 90.36),
    ("JPY", 163.2),
    ("CHF", 0.978),
    ("CAD", 1.478),
    ("AUD", 1.651),
    ("SEK", 11.52),
    ("PLN", 4.317),
];

/// Rate provider that always returns the same quotes, dated today.
pub struct StaticRateProvider<C: Clock = SystemClock> {
    quotes: Vec<(String, f64)>,
    clock: C,
}

impl Default for StaticRateProvider {
    fn default() -> Self {
        Self::new(
            DEFAULT_QUOTES
                .iter()
                .map(|(code, quote)| (code.to_string(), *quote))
                .collect(),
        )
    }
}

impl StaticRateProvider {
    /// Creates a provider serving `quotes` (quote currency, units per EUR).
    pub fn new(quotes: Vec<(String, f64)>) -> Self {
        Self::with_clock(quotes, SystemClock)
    }
}

impl<C: Clock> StaticRateProvider<C> {
    pub fn with_clock(quotes: Vec<(String, f64)>, clock: C) -> Self {
        Self { quotes, clock }
    }
}

#[async_trait]
impl<C: Clock> RateProvider for StaticRateProvider<C> {
    async fn fetch_rates(&self) -> Result<DailyRateSet, FetchError> {
        let today = self.clock.today();
        let rates = self
            .quotes
            .iter()
            .map(|(code, quote)| ExchangeRate::new(code.clone(), *quote, today))
            .collect();
        Ok(DailyRateSet::new(rates))
    }
}
