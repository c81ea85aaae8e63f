//! In-memory reference implementations of the store traits.
//!
//! These back the CLI and the test suite. The stats upsert holds one lock
//! across read-modify-write, so it is atomic with respect to concurrent
//! completions.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::{Mutex, RwLock};

use arcana_core::{Card, DailyStats, DrawnCard, Reading, ReadingId, SpreadKind};

use crate::error::StoreResult;
use crate::store::{CardStore, ReadingStore, StatsStore};

/// An in-memory card catalog over a fixed deck.
pub struct MemoryCardStore {
    cards: Vec<Card>,
}

impl MemoryCardStore {
    /// Create a store over the given deck, sorted by arcana ID.
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_by_key(|c| c.arcana_id);
        Self { cards }
    }
}

impl CardStore for MemoryCardStore {
    fn list_cards(&self) -> StoreResult<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn card(&self, arcana_id: u8) -> StoreResult<Option<Card>> {
        Ok(self
            .cards
            .iter()
            .find(|c| c.arcana_id == arcana_id)
            .cloned())
    }

    fn search_cards(&self, query: &str) -> StoreResult<Vec<Card>> {
        Ok(self
            .cards
            .iter()
            .filter(|c| c.matches(query))
            .cloned()
            .collect())
    }
}

/// An in-memory reading store.
#[derive(Default)]
pub struct MemoryReadingStore {
    readings: RwLock<HashMap<ReadingId, Reading>>,
}

impl MemoryReadingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadingStore for MemoryReadingStore {
    fn insert_reading(&self, reading: Reading) -> StoreResult<()> {
        self.readings.write().insert(reading.id, reading);
        Ok(())
    }

    fn attach_drawn_card(&self, id: ReadingId, drawn: DrawnCard) -> StoreResult<bool> {
        let mut readings = self.readings.write();
        match readings.get_mut(&id) {
            Some(reading) => {
                reading.drawn_cards.push(drawn);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn complete_reading(
        &self,
        id: ReadingId,
        overall_message: String,
        advice: String,
        completed_at: DateTime<Utc>,
    ) -> StoreResult<Option<Reading>> {
        let mut readings = self.readings.write();
        match readings.get_mut(&id) {
            Some(reading) => {
                reading.overall_message = Some(overall_message);
                reading.advice = Some(advice);
                reading.completed_at = Some(completed_at);
                Ok(Some(reading.clone()))
            }
            None => Ok(None),
        }
    }

    fn reading(&self, id: ReadingId) -> StoreResult<Option<Reading>> {
        Ok(self.readings.read().get(&id).cloned())
    }

    fn readings_for_user(
        &self,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> StoreResult<(Vec<Reading>, usize)> {
        let readings = self.readings.read();
        let mut owned: Vec<Reading> = readings
            .values()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = owned.len();
        let page = owned.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }
}

/// An in-memory daily statistics store.
#[derive(Default)]
pub struct MemoryStatsStore {
    rows: Mutex<HashMap<NaiveDate, DailyStats>>,
}

impl MemoryStatsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStatsStore {
    fn upsert_daily(&self, day: NaiveDate, kind: SpreadKind) -> StoreResult<DailyStats> {
        let mut rows = self.rows.lock();
        let row = rows.entry(day).or_insert_with(|| DailyStats::zero(day));
        row.record(kind);
        Ok(*row)
    }

    fn daily(&self, day: NaiveDate) -> StoreResult<Option<DailyStats>> {
        Ok(self.rows.lock().get(&day).copied())
    }

    fn all_daily(&self) -> StoreResult<Vec<DailyStats>> {
        let mut rows: Vec<DailyStats> = self.rows.lock().values().copied().collect();
        rows.sort_by_key(|r| r.day);
        Ok(rows)
    }
}
