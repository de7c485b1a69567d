//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use exchange_types::{
        Clock, ConversionError, ConversionRequest, DailyRateSet, ExchangeRate, FetchError,
        RateProvider,
    };

    use crate::ConversionService;

    /// Provider stub that counts calls and serves a scripted outcome.
    pub struct StubProvider {
        calls: AtomicUsize,
        outcome: Mutex<Result<DailyRateSet, FetchError>>,
        delay: Option<Duration>,
    }

    impl StubProvider {
        pub fn with_rates(rates: &[(&str, f64)]) -> Self {
            let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
            let set = DailyRateSet::new(
                rates
                    .iter()
                    .map(|(code, quote)| ExchangeRate::new(*code, *quote, date))
                    .collect(),
            );
            Self {
                calls: AtomicUsize::new(0),
                outcome: Mutex::new(Ok(set)),
                delay: None,
            }
        }

        pub fn failing(err: FetchError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Mutex::new(Err(err)),
                delay: None,
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn set_outcome(&self, outcome: Result<DailyRateSet, FetchError>) {
            *self.outcome.lock().unwrap() = outcome;
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for StubProvider {
        async fn fetch_rates(&self) -> Result<DailyRateSet, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcome.lock().unwrap().clone()
        }
    }

    /// Clock that only moves when told to.
    #[derive(Clone)]
    pub struct ManualClock(Arc<Mutex<NaiveDate>>);

    impl ManualClock {
        pub fn new(date: NaiveDate) -> Self {
            Self(Arc::new(Mutex::new(date)))
        }

        pub fn advance_days(&self, days: u64) {
            let mut date = self.0.lock().unwrap();
            *date = *date + chrono::Days::new(days);
        }
    }

    impl Clock for ManualClock {
        fn today(&self) -> NaiveDate {
            *self.0.lock().unwrap()
        }
    }

    fn scenario_rates() -> StubProvider {
        StubProvider::with_rates(&[("USD", 1.1), ("GBP", 0.85)])
    }

    fn service(provider: StubProvider) -> ConversionService<Arc<StubProvider>> {
        service_with_clock(provider, ManualClock::new(start_date())).0
    }

    fn service_with_clock(
        provider: StubProvider,
        clock: ManualClock,
    ) -> (ConversionService<Arc<StubProvider>>, Arc<StubProvider>) {
        let provider = Arc::new(provider);
        (
            ConversionService::with_clock(Arc::clone(&provider), clock),
            provider,
        )
    }

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_between_quoted_currencies() {
        let service = service(scenario_rates());

        let result = service
            .convert(ConversionRequest::new("USD", "GBP", 110.0))
            .await
            .unwrap();

        assert_close(result, 110.0 * (0.85 / 1.1));
        assert_close(result, 85.0);
    }

    #[tokio::test]
    async fn test_convert_from_base_currency() {
        let service = service(scenario_rates());

        let result = service
            .convert(ConversionRequest::new("EUR", "USD", 100.0))
            .await
            .unwrap();

        assert_close(result, 110.0);
    }

    #[tokio::test]
    async fn test_convert_to_base_currency() {
        let service = service(scenario_rates());

        let result = service
            .convert(ConversionRequest::new("GBP", "EUR", 0.85))
            .await
            .unwrap();

        assert_close(result, 1.0);
    }

    #[tokio::test]
    async fn test_convert_same_currency_returns_amount() {
        let service = service(scenario_rates());

        for amount in [50.0, -12.5, 0.0, 1e9] {
            let result = service
                .convert(ConversionRequest::new("USD", "USD", amount))
                .await
                .unwrap();
            assert_eq!(result, amount);
        }
    }

    #[tokio::test]
    async fn test_convert_matches_rate_ratio_for_all_pairs() {
        let rates = [("USD", 1.1), ("GBP", 0.85), ("JPY", 163.2), ("CHF", 0.978)];
        let service = service(StubProvider::with_rates(&rates));

        for (from, from_rate) in rates {
            for (to, to_rate) in rates {
                let result = service
                    .convert(ConversionRequest::new(from, to, 42.0))
                    .await
                    .unwrap();
                assert_close(result, 42.0 * to_rate / from_rate);
            }
        }
    }

    #[tokio::test]
    async fn test_duplicate_quotes_use_first_match() {
        let service = service(StubProvider::with_rates(&[("USD", 1.1), ("USD", 2.0)]));

        let result = service
            .convert(ConversionRequest::new("EUR", "USD", 10.0))
            .await
            .unwrap();

        assert_close(result, 11.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_unknown_currency_is_invalid_input() {
        let service = service(scenario_rates());

        for amount in [1.0, 0.0, -3.0] {
            let source = service
                .convert(ConversionRequest::new("XYZ", "USD", amount))
                .await;
            assert!(
                matches!(source, Err(ConversionError::InvalidInput(ref msg)) if msg == "Currency is not available: XYZ")
            );

            let target = service
                .convert(ConversionRequest::new("USD", "XYZ", amount))
                .await;
            assert!(matches!(target, Err(ConversionError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_placeholder_currency_is_not_convertible() {
        let service = service(StubProvider::with_rates(&[("USD", 1.1), ("ALL", 1.0)]));

        let result = service
            .convert(ConversionRequest::new("ALL", "USD", 1.0))
            .await;

        assert!(matches!(result, Err(ConversionError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_missing_input_fails_before_any_fetch() {
        let (service, provider) =
            service_with_clock(scenario_rates(), ManualClock::new(start_date()));

        let requests = [
            ConversionRequest::new("", "USD", 1.0),
            ConversionRequest::new("USD", "  ", 1.0),
            ConversionRequest::new("USD", "GBP", None::<f64>),
            ConversionRequest::new("USD", "GBP", f64::NAN),
        ];

        for req in requests {
            let result = service.convert(req).await;
            assert!(matches!(
                result,
                Err(ConversionError::InvalidInput(ref msg))
                    if msg == "Missing one or more mandatory input parameters"
            ));
        }

        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_zero_rate_is_rejected() {
        let service = service(StubProvider::with_rates(&[("USD", 1.1), ("XAU", 0.0)]));

        let result = service
            .convert(ConversionRequest::new("XAU", "USD", 1.0))
            .await;

        assert!(matches!(result, Err(ConversionError::RateUnavailable(ref code)) if code == "XAU"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_currencies_excludes_placeholder_and_duplicates() {
        let service = service(StubProvider::with_rates(&[
            ("USD", 1.1),
            ("ALL", 1.0),
            ("GBP", 0.85),
            ("USD", 1.2),
        ]));

        let currencies = service.list_currencies().await.unwrap();

        assert_eq!(currencies, vec!["USD", "GBP"]);
    }

    #[tokio::test]
    async fn test_list_currencies_propagates_fetch_error() {
        let service = service(StubProvider::failing(FetchError::Parse("bad".into())));

        let result = service.list_currencies().await;

        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Daily cache
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_rates_fetched_once_per_day() {
        let (service, provider) =
            service_with_clock(scenario_rates(), ManualClock::new(start_date()));

        service.rates_for_today().await.unwrap();
        service.list_currencies().await.unwrap();
        service
            .convert(ConversionRequest::new("USD", "GBP", 1.0))
            .await
            .unwrap();

        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_new_day_triggers_new_fetch() {
        let clock = ManualClock::new(start_date());
        let (service, provider) = service_with_clock(scenario_rates(), clock.clone());

        service.rates_for_today().await.unwrap();
        clock.advance_days(1);
        service.rates_for_today().await.unwrap();
        service.rates_for_today().await.unwrap();

        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_retention_window_bounds_cache() {
        let clock = ManualClock::new(start_date());
        let provider = Arc::new(scenario_rates());
        let service = ConversionService::with_clock(Arc::clone(&provider), clock.clone())
            .with_retention_days(2);

        for _ in 0..5 {
            service.rates_for_today().await.unwrap();
            clock.advance_days(1);
        }

        assert_eq!(provider.calls(), 5);
        assert_eq!(service.cache().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried_and_not_cached() {
        let (service, provider) = service_with_clock(
            StubProvider::failing(FetchError::Network("503 Service Unavailable".into())),
            ManualClock::new(start_date()),
        );

        let first = service.rates_for_today().await;
        assert!(matches!(first, Err(FetchError::Network(_))));
        assert!(service.cache().is_empty());

        let conversion = service
            .convert(ConversionRequest::new("USD", "GBP", 1.0))
            .await;
        assert!(matches!(
            conversion,
            Err(ConversionError::Fetch(FetchError::Network(_)))
        ));
        assert_eq!(provider.calls(), 2);

        provider.set_outcome(scenario_rates().outcome.into_inner().unwrap());
        let set = service.rates_for_today().await.unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_first_requests_share_one_fetch() {
        let (service, provider) = service_with_clock(
            scenario_rates().with_delay(Duration::from_millis(50)),
            ManualClock::new(start_date()),
        );
        let service = Arc::new(service);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.list_currencies().await })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), vec!["USD", "GBP"]);
        }

        assert_eq!(provider.calls(), 1);
    }
}
