//! Exchange rate records and the per-day rate set.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Currency every provider fetch is expressed against.
pub const BASE_CURRENCY: &str = "EUR";

/// Provider placeholder quote that is not a real currency.
const PLACEHOLDER_QUOTE: &str = "ALL";

/// A single quote: how many `quote_currency` units one `base_currency` unit buys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeRate {
    #[schema(example = "EUR")]
    pub base_currency: String,
    #[schema(example = "USD")]
    pub quote_currency: String,
    #[schema(example = 1.1)]
    pub quote: f64,
    #[schema(value_type = String, example = "2024-05-01")]
    pub date: NaiveDate,
}

impl ExchangeRate {
    /// Creates a rate quoted against the base currency.
    pub fn new(quote_currency: impl Into<String>, quote: f64, date: NaiveDate) -> Self {
        Self {
            base_currency: BASE_CURRENCY.to_string(),
            quote_currency: quote_currency.into(),
            quote,
            date,
        }
    }
}

/// All rates fetched for one calendar date.
///
/// Immutable once built; the cache shares it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRateSet {
    rates: Vec<ExchangeRate>,
}

impl DailyRateSet {
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &[ExchangeRate] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Quote for `code`. The first matching record wins when the provider
    /// returns duplicates.
    pub fn quote_for(&self, code: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|rate| rate.quote_currency == code)
            .map(|rate| rate.quote)
    }

    /// Distinct quote currencies in first-seen order, without the `ALL`
    /// placeholder. The base currency only appears if the provider quoted it.
    pub fn currencies(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rates
            .iter()
            .map(|rate| rate.quote_currency.as_str())
            .filter(|code| *code != PLACEHOLDER_QUOTE)
            .filter(|code| seen.insert(*code))
            .map(str::to_string)
            .collect()
    }
}

impl From<Vec<ExchangeRate>> for DailyRateSet {
    fn from(rates: Vec<ExchangeRate>) -> Self {
        Self::new(rates)
    }
}
