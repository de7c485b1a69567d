//! Domain models for the exchange service.

pub mod conversion;
pub mod rate;

pub use conversion::ConversionRequest;
pub use rate::{BASE_CURRENCY, DailyRateSet, ExchangeRate};
