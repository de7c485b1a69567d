//! Currency Conversion Service
//!
//! Owns the daily rate cache and answers listing and conversion requests
//! from it. Contains NO infrastructure logic - the provider is a port.

use std::sync::Arc;

use exchange_types::{
    BASE_CURRENCY, Clock, ConversionError, ConversionRequest, DailyRateSet, FetchError,
    RateProvider, SystemClock,
};

use crate::cache::RateCache;

/// Application service for currency operations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
pub struct ConversionService<P: RateProvider> {
    provider: P,
    clock: Box<dyn Clock>,
    cache: RateCache,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a service keyed on the host's local calendar date.
    pub fn new(provider: P) -> Self {
        Self::with_clock(provider, SystemClock)
    }

    /// Creates a service with a custom source of "today".
    pub fn with_clock(provider: P, clock: impl Clock) -> Self {
        Self {
            provider,
            clock: Box::new(clock),
            cache: RateCache::default(),
        }
    }

    /// Keeps `days` trailing days of rate sets besides today.
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.cache = RateCache::new(days);
        self
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    /// Today's rate set, fetched from the provider on the first call of the day.
    ///
    /// Provider errors are returned unchanged and nothing is cached for them.
    pub async fn rates_for_today(&self) -> Result<Arc<DailyRateSet>, FetchError> {
        let today = self.clock.today();
        self.cache
            .get_or_fetch(today, || self.provider.fetch_rates())
            .await
    }

    /// Currencies available today, in provider order.
    pub async fn list_currencies(&self) -> Result<Vec<String>, FetchError> {
        Ok(self.rates_for_today().await?.currencies())
    }

    /// Converts the requested amount using today's rates.
    ///
    /// The result is `amount * rate(target) / rate(source)` with the base
    /// currency at 1.0. No rounding is applied.
    #[tracing::instrument(skip(self), fields(source = %req.source_currency, target = %req.target_currency))]
    pub async fn convert(&self, req: ConversionRequest) -> Result<f64, ConversionError> {
        let amount = req.ensure_complete()?;

        let rates = self.rates_for_today().await?;
        let available = rates.currencies();

        for code in [&req.source_currency, &req.target_currency] {
            if code != BASE_CURRENCY && !available.contains(code) {
                return Err(ConversionError::InvalidInput(format!(
                    "Currency is not available: {}",
                    code
                )));
            }
        }

        let from_rate = rate_of(&rates, &req.source_currency)?;
        let to_rate = rate_of(&rates, &req.target_currency)?;

        Ok(amount * (to_rate / from_rate))
    }
}

/// Units of `code` per base unit.
fn rate_of(rates: &DailyRateSet, code: &str) -> Result<f64, ConversionError> {
    if code == BASE_CURRENCY {
        return Ok(1.0);
    }

    rates
        .quote_for(code)
        .filter(|quote| quote.is_finite() && *quote > 0.0)
        .ok_or_else(|| ConversionError::RateUnavailable(code.to_string()))
}
