//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, hardcoded tables, test stubs, etc.

use crate::domain::DailyRateSet;
use crate::error::FetchError;

/// Source of the full set of rates relative to [`crate::BASE_CURRENCY`].
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches every quote the provider has for today.
    ///
    /// One upstream call per invocation; results are returned unfiltered.
    async fn fetch_rates(&self) -> Result<DailyRateSet, FetchError>;
}

#[async_trait::async_trait]
impl<P: RateProvider + ?Sized> RateProvider for std::sync::Arc<P> {
    async fn fetch_rates(&self) -> Result<DailyRateSet, FetchError> {
        (**self).fetch_rates().await
    }
}
