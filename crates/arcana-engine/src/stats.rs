//! Non-fatal daily statistics accumulation.
//!
//! A reading that persists fine but fails to count must still reach the
//! caller, so recording swallows store errors after logging them.

use chrono::{NaiveDate, Utc};
use tracing::warn;

use arcana_core::{DailyStats, SpreadKind, StatsOverview};
use arcana_store::{Retry, StatsRepository, StatsStore, StoreResult};

/// Day-bucketed reading counters that never fail the surrounding operation.
pub struct StatsAccumulator<S> {
    repo: StatsRepository<S>,
}

impl<S: StatsStore> StatsAccumulator<S> {
    /// Wrap a stats store with cache, retry, and error swallowing.
    pub fn new(store: S, retry: Retry) -> Self {
        Self {
            repo: StatsRepository::new(store, retry),
        }
    }

    /// Count one completed reading under today's UTC date.
    pub fn record(&self, kind: SpreadKind) {
        self.record_on(Utc::now().date_naive(), kind);
    }

    /// Count one completed reading under an explicit day.
    pub fn record_on(&self, day: NaiveDate, kind: SpreadKind) {
        if let Err(err) = self.repo.upsert(day, kind) {
            warn!(%day, ?kind, %err, "failed to record reading statistics");
        }
    }

    /// The counters for one day, if any reading was recorded.
    pub fn daily(&self, day: NaiveDate) -> StoreResult<Option<DailyStats>> {
        self.repo.daily(day)
    }

    /// All-time counters folded across every recorded day, with `today`
    /// as the reference day for the today counter.
    pub fn overview(&self, today: NaiveDate) -> StoreResult<StatsOverview> {
        let days = self.repo.all_daily()?;
        Ok(StatsOverview::from_days(&days, today))
    }
}
