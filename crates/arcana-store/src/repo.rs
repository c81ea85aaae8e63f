//! Cache-aside repositories.
//!
//! Each repository duplicates the same get-or-compute pattern with
//! resource-specific TTLs: check the cache by key, on miss run the store
//! access through [`Retry`], then populate the cache. Writes pass through
//! retry only — no cache entry is updated or purged on write, so aggregate
//! reads can lag the store by up to one TTL.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use arcana_core::{Card, DailyStats, DrawnCard, Reading, ReadingId, SpreadKind};

use crate::cache::TtlCache;
use crate::error::StoreResult;
use crate::retry::Retry;
use crate::store::{CardStore, ReadingStore, StatsStore};

/// TTL for the full-deck listing.
pub const DECK_TTL: Duration = Duration::from_secs(600);
/// TTL for single-card lookups.
pub const CARD_TTL: Duration = Duration::from_secs(600);
/// TTL for search results.
pub const SEARCH_TTL: Duration = Duration::from_secs(300);
/// TTL for single-reading lookups.
pub const READING_TTL: Duration = Duration::from_secs(300);
/// TTL for daily statistics.
pub const STATS_TTL: Duration = Duration::from_secs(300);

/// Cache-aside access to the card catalog.
pub struct CardRepository<S> {
    store: S,
    retry: Retry,
    deck: TtlCache<(), Vec<Card>>,
    by_arcana: TtlCache<u8, Card>,
    searches: TtlCache<String, Vec<Card>>,
}

impl<S: CardStore> CardRepository<S> {
    /// Wrap a card store with cache and retry.
    pub fn new(store: S, retry: Retry) -> Self {
        Self {
            store,
            retry,
            deck: TtlCache::new(),
            by_arcana: TtlCache::new(),
            searches: TtlCache::new(),
        }
    }

    /// The full deck, ordered by arcana ID.
    pub fn deck(&self) -> StoreResult<Vec<Card>> {
        if let Some(cards) = self.deck.get(&()) {
            return Ok(cards);
        }
        debug!("fetching full deck from store");
        let cards = self.retry.run(|| self.store.list_cards())?;
        self.deck.insert((), cards.clone(), DECK_TTL);
        Ok(cards)
    }

    /// One card by arcana ID. Absence is not cached.
    pub fn card(&self, arcana_id: u8) -> StoreResult<Option<Card>> {
        if let Some(card) = self.by_arcana.get(&arcana_id) {
            return Ok(Some(card));
        }
        debug!(arcana_id, "fetching card from store");
        let card = self.retry.run(|| self.store.card(arcana_id))?;
        if let Some(card) = &card {
            self.by_arcana.insert(arcana_id, card.clone(), CARD_TTL);
        }
        Ok(card)
    }

    /// Search the catalog. Results are cached by the lowercased query.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Card>> {
        let key = query.to_lowercase();
        if let Some(cards) = self.searches.get(&key) {
            return Ok(cards);
        }
        debug!(query, "searching cards in store");
        let cards = self.retry.run(|| self.store.search_cards(query))?;
        self.searches.insert(key, cards.clone(), SEARCH_TTL);
        Ok(cards)
    }
}

/// Cache-aside access to readings.
pub struct ReadingRepository<S> {
    store: S,
    retry: Retry,
    by_id: TtlCache<ReadingId, Reading>,
    history_pages: TtlCache<(String, usize, usize), (Vec<Reading>, usize)>,
}

impl<S: ReadingStore> ReadingRepository<S> {
    /// Wrap a reading store with cache and retry.
    pub fn new(store: S, retry: Retry) -> Self {
        Self {
            store,
            retry,
            by_id: TtlCache::new(),
            history_pages: TtlCache::new(),
        }
    }

    /// Persist a freshly created reading. The cache is not populated; the
    /// first read after completion goes to the store.
    pub fn create(&self, reading: &Reading) -> StoreResult<()> {
        self.retry.run(|| self.store.insert_reading(reading.clone()))
    }

    /// Append a drawn card. Returns `false` when the reading is missing.
    pub fn attach(&self, id: ReadingId, drawn: &DrawnCard) -> StoreResult<bool> {
        self.retry
            .run(|| self.store.attach_drawn_card(id, drawn.clone()))
    }

    /// Attach the overall narrative and stamp completion. Does not touch
    /// the cache, so a previously cached incomplete reading stays stale
    /// until its TTL lapses.
    pub fn complete(
        &self,
        id: ReadingId,
        overall_message: &str,
        advice: &str,
    ) -> StoreResult<Option<Reading>> {
        let completed_at = Utc::now();
        self.retry.run(|| {
            self.store.complete_reading(
                id,
                overall_message.to_string(),
                advice.to_string(),
                completed_at,
            )
        })
    }

    /// One reading by ID, cache-aside. Absence is not cached.
    pub fn get(&self, id: ReadingId) -> StoreResult<Option<Reading>> {
        if let Some(reading) = self.by_id.get(&id) {
            return Ok(Some(reading));
        }
        debug!(%id, "fetching reading from store");
        let reading = self.retry.run(|| self.store.reading(id))?;
        if let Some(reading) = &reading {
            self.by_id.insert(id, reading.clone(), READING_TTL);
        }
        Ok(reading)
    }

    /// One page of a user's readings, newest first, plus the user's total
    /// count. Pages are cached per (user, offset, limit), so a reading
    /// completed after a page was cached shows up only once the page's TTL
    /// lapses.
    pub fn history(
        &self,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> StoreResult<(Vec<Reading>, usize)> {
        let key = (user_id.to_string(), offset, limit);
        if let Some(page) = self.history_pages.get(&key) {
            return Ok(page);
        }
        debug!(user_id, offset, limit, "fetching reading history from store");
        let page = self
            .retry
            .run(|| self.store.readings_for_user(user_id, offset, limit))?;
        self.history_pages.insert(key, page.clone(), READING_TTL);
        Ok(page)
    }
}

/// Cache-aside access to daily statistics.
pub struct StatsRepository<S> {
    store: S,
    retry: Retry,
    daily: TtlCache<NaiveDate, DailyStats>,
    all_days: TtlCache<(), Vec<DailyStats>>,
}

impl<S: StatsStore> StatsRepository<S> {
    /// Wrap a stats store with cache and retry.
    pub fn new(store: S, retry: Retry) -> Self {
        Self {
            store,
            retry,
            daily: TtlCache::new(),
            all_days: TtlCache::new(),
        }
    }

    /// Upsert one completed reading into the day's row. The daily cache is
    /// not purged, so reads within the TTL can lag the counter.
    pub fn upsert(&self, day: NaiveDate, kind: SpreadKind) -> StoreResult<DailyStats> {
        self.retry.run(|| self.store.upsert_daily(day, kind))
    }

    /// The counters for one day, cache-aside.
    pub fn daily(&self, day: NaiveDate) -> StoreResult<Option<DailyStats>> {
        if let Some(stats) = self.daily.get(&day) {
            return Ok(Some(stats));
        }
        debug!(%day, "fetching daily stats from store");
        let stats = self.retry.run(|| self.store.daily(day))?;
        if let Some(stats) = stats {
            self.daily.insert(day, stats, STATS_TTL);
        }
        Ok(stats)
    }

    /// Every recorded day's counters, cache-aside under one entry.
    pub fn all_daily(&self) -> StoreResult<Vec<DailyStats>> {
        if let Some(rows) = self.all_days.get(&()) {
            return Ok(rows);
        }
        debug!("fetching all daily stats from store");
        let rows = self.retry.run(|| self.store.all_daily())?;
        self.all_days.insert((), rows.clone(), STATS_TTL);
        Ok(rows)
    }
}
