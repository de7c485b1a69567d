//! Daily rate cache.
//!
//! One entry per calendar date. Each entry is a `OnceCell`, so concurrent
//! first requests for a date share a single provider fetch. A failed fetch
//! leaves the cell empty and the next caller tries again.

use std::future::Future;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use dashmap::DashMap;
use tokio::sync::OnceCell;

use exchange_types::{DailyRateSet, FetchError};

type Slot = Arc<OnceCell<Arc<DailyRateSet>>>;

/// Rate sets keyed by the date they were fetched for.
pub struct RateCache {
    entries: DashMap<NaiveDate, Slot>,
    /// Days kept before the most recently served date.
    retention_days: u32,
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RateCache {
    pub fn new(retention_days: u32) -> Self {
        Self {
            entries: DashMap::new(),
            retention_days,
        }
    }

    /// Returns the set stored for `date`, fetching it with `fetch` on a miss.
    ///
    /// Only one `fetch` runs per date at a time; other callers wait for it.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        date: NaiveDate,
        fetch: F,
    ) -> Result<Arc<DailyRateSet>, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<DailyRateSet, FetchError>>,
    {
        // Clone the slot out so no shard lock is held across the await.
        let slot: Slot = Arc::clone(&self.entries.entry(date).or_default());

        if let Some(set) = slot.get() {
            tracing::debug!(%date, "Rate cache hit");
            return Ok(Arc::clone(set));
        }

        let set = slot
            .get_or_try_init(|| async move {
                tracing::debug!(%date, "Rate cache miss, fetching rates");
                fetch().await.map(Arc::new)
            })
            .await?;
        let set = Arc::clone(set);

        if self.entries.len() > self.retention_days as usize + 1 {
            self.evict_before(date);
        }

        Ok(set)
    }

    /// The stored set for `date`, if one was fetched successfully.
    pub fn get(&self, date: NaiveDate) -> Option<Arc<DailyRateSet>> {
        self.entries
            .get(&date)
            .and_then(|slot| slot.get().map(Arc::clone))
    }

    /// Number of dates holding a fetched rate set.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every date older than the retention window ending at `today`.
    fn evict_before(&self, today: NaiveDate) {
        let Some(cutoff) = today.checked_sub_days(Days::new(u64::from(self.retention_days)))
        else {
            return;
        };

        self.entries.retain(|date, _| *date >= cutoff);
        tracing::debug!(%cutoff, remaining = self.entries.len(), "Evicted stale rate sets");
    }
}
