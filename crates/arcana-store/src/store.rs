use chrono::{DateTime, NaiveDate, Utc};

use arcana_core::{Card, DailyStats, DrawnCard, Reading, ReadingId, SpreadKind};

use crate::error::StoreResult;

/// The card-catalog store. The deck is immutable; implementations only
/// service reads.
pub trait CardStore {
    /// All cards, ordered by arcana ID.
    fn list_cards(&self) -> StoreResult<Vec<Card>>;

    /// One card by its arcana ID, or `None` when absent.
    fn card(&self, arcana_id: u8) -> StoreResult<Option<Card>>;

    /// Cards matching a substring query against names, descriptions, and
    /// keyword lists, ordered by arcana ID.
    fn search_cards(&self, query: &str) -> StoreResult<Vec<Card>>;
}

/// The reading store. Readings are created once, gain drawn cards, and are
/// completed exactly once; they are never deleted here.
pub trait ReadingStore {
    /// Persist a freshly created reading.
    fn insert_reading(&self, reading: Reading) -> StoreResult<()>;

    /// Append a drawn card to a reading. Returns `false` when the reading
    /// does not exist.
    fn attach_drawn_card(&self, id: ReadingId, drawn: DrawnCard) -> StoreResult<bool>;

    /// Attach the overall narrative and completion timestamp. Returns the
    /// completed reading, or `None` when it does not exist.
    fn complete_reading(
        &self,
        id: ReadingId,
        overall_message: String,
        advice: String,
        completed_at: DateTime<Utc>,
    ) -> StoreResult<Option<Reading>>;

    /// One reading by ID, or `None` when absent.
    fn reading(&self, id: ReadingId) -> StoreResult<Option<Reading>>;

    /// One page of a user's readings, newest first, plus the user's total
    /// reading count.
    fn readings_for_user(
        &self,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> StoreResult<(Vec<Reading>, usize)>;
}

/// The statistics store. The upsert must be atomic at the store level so
/// concurrent completions on the same day never lose updates.
pub trait StatsStore {
    /// Add one reading of the given kind to the day's row, creating a
    /// zeroed row first if the day has none. Returns the row after the
    /// increment.
    fn upsert_daily(&self, day: NaiveDate, kind: SpreadKind) -> StoreResult<DailyStats>;

    /// The counters for one day, or `None` if no reading completed on it.
    fn daily(&self, day: NaiveDate) -> StoreResult<Option<DailyStats>>;

    /// Every recorded day's counters, ordered by day ascending.
    fn all_daily(&self) -> StoreResult<Vec<DailyStats>>;
}
