//! The reading orchestrator.
//!
//! `ReadingService` ties the card catalog, the sampler, interpretation
//! synthesis, and statistics together. The persistence sequence for one
//! reading is create row, attach each drawn card, then attach the overall
//! narrative; a failure mid-sequence leaves an incomplete row behind
//! rather than rolling back.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use arcana_core::{
    Card, DailyStats, DrawnCard, Reading, ReadingId, ReadingOrigin, SpreadKind, StatsOverview,
};
use arcana_store::{
    CardRepository, CardStore, ReadingRepository, ReadingStore, Retry, StatsStore,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::stats::StatsAccumulator;
use crate::{interpret, overall, phrases, sampler};

/// Lower bound of the per-card confidence score.
pub const CONFIDENCE_MIN: f64 = 0.85;
/// Width of the per-card confidence range above [`CONFIDENCE_MIN`].
pub const CONFIDENCE_SPAN: f64 = 0.1;

/// Parse a user-supplied spread name.
pub fn parse_spread(s: &str) -> EngineResult<SpreadKind> {
    SpreadKind::parse(s).ok_or_else(|| EngineError::UnknownSpread(s.to_string()))
}

/// Everything needed to create one reading.
#[derive(Debug, Clone)]
pub struct ReadingRequest {
    /// The spread to draw.
    pub spread: SpreadKind,
    /// The querent's question, if any.
    pub question: Option<String>,
    /// Owning user reference, if any.
    pub user_id: Option<String>,
    /// Session and origin metadata.
    pub origin: ReadingOrigin,
}

impl ReadingRequest {
    /// A request for the given spread with no question or metadata.
    pub fn new(spread: SpreadKind) -> Self {
        Self {
            spread,
            question: None,
            user_id: None,
            origin: ReadingOrigin::default(),
        }
    }

    /// Attach the querent's question.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Attach the owning user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach session and origin metadata.
    pub fn with_origin(mut self, origin: ReadingOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// A reading as presented to the caller, with a transient energy line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingView {
    /// The persisted reading.
    pub reading: Reading,
    /// Freshly picked energy description; not persisted, so two fetches of
    /// the same reading can differ here.
    pub cosmic_energy: String,
}

/// One page of a user's reading history.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingPage {
    /// Readings on this page, newest first.
    pub readings: Vec<Reading>,
    /// Total readings the user has across all pages.
    pub total: usize,
}

/// Result of a card search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Matching cards, ordered by arcana ID.
    pub cards: Vec<Card>,
    /// Set when the query was rejected without touching the store.
    pub notice: Option<String>,
}

/// Orchestrates reading creation, card lookups, and statistics.
pub struct ReadingService<C, R, T> {
    cards: CardRepository<C>,
    readings: ReadingRepository<R>,
    stats: StatsAccumulator<T>,
    reversed_chance: f64,
    rng: StdRng,
}

impl<C: CardStore, R: ReadingStore, T: StatsStore> ReadingService<C, R, T> {
    /// Build a service over the three stores.
    pub fn new(card_store: C, reading_store: R, stats_store: T, config: EngineConfig) -> Self {
        let retry = Retry::new(config.retry_max_attempts, config.retry_base_delay);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            cards: CardRepository::new(card_store, retry.clone()),
            readings: ReadingRepository::new(reading_store, retry.clone()),
            stats: StatsAccumulator::new(stats_store, retry),
            reversed_chance: config.reversed_chance,
            rng,
        }
    }

    /// Create, interpret, and complete a reading in one call.
    pub fn create_reading(&mut self, request: ReadingRequest) -> EngineResult<ReadingView> {
        let spread = request.spread;
        let question = request.question.clone();
        let reading = Reading::new(spread, request.question, request.user_id, request.origin);
        let id = reading.id;

        self.readings.create(&reading)?;

        let deck = self.cards.deck()?;
        let pairs = sampler::draw(&deck, spread.card_count(), self.reversed_chance, &mut self.rng)?;

        let mut drawn_cards = Vec::with_capacity(pairs.len());
        for (position, (card, reversed)) in pairs.into_iter().enumerate() {
            let interpretation = interpret::interpret_card(
                &card,
                reversed,
                spread,
                position,
                question.as_deref(),
                &mut self.rng,
            );
            let confidence = CONFIDENCE_MIN + self.rng.random::<f64>() * CONFIDENCE_SPAN;
            let drawn = DrawnCard {
                position_name: spread.position_name(position),
                card,
                position,
                reversed,
                interpretation,
                confidence,
            };
            if !self.readings.attach(id, &drawn)? {
                return Err(EngineError::ReadingNotFound(id));
            }
            drawn_cards.push(drawn);
        }

        let narrative =
            overall::interpret_overall(&drawn_cards, spread, question.as_deref(), &mut self.rng);
        let completed = self
            .readings
            .complete(id, &narrative.message, &narrative.advice)?
            .ok_or(EngineError::ReadingNotFound(id))?;

        self.stats.record(spread);
        info!(%id, ?spread, cards = completed.drawn_cards.len(), "reading completed");

        Ok(ReadingView {
            reading: completed,
            cosmic_energy: phrases::cosmic_energy(&mut self.rng).to_string(),
        })
    }

    /// Fetch a previously created reading.
    pub fn get_reading(&mut self, id: ReadingId) -> EngineResult<ReadingView> {
        let reading = self
            .readings
            .get(id)?
            .ok_or(EngineError::ReadingNotFound(id))?;
        Ok(ReadingView {
            reading,
            cosmic_energy: phrases::cosmic_energy(&mut self.rng).to_string(),
        })
    }

    /// One page of a user's reading history, newest first.
    pub fn reading_history(
        &self,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> EngineResult<ReadingPage> {
        let (readings, total) = self.readings.history(user_id, offset, limit)?;
        Ok(ReadingPage { readings, total })
    }

    /// Draw cards without persisting a reading.
    pub fn draw_cards(&mut self, count: usize) -> EngineResult<Vec<Card>> {
        let deck = self.cards.deck()?;
        let pairs = sampler::draw(&deck, count, self.reversed_chance, &mut self.rng)?;
        Ok(pairs.into_iter().map(|(card, _)| card).collect())
    }

    /// The full card catalog.
    pub fn list_cards(&self) -> EngineResult<Vec<Card>> {
        Ok(self.cards.deck()?)
    }

    /// One card by arcana ID.
    pub fn card(&self, arcana_id: u8) -> EngineResult<Card> {
        self.cards
            .card(arcana_id)?
            .ok_or(EngineError::CardNotFound(arcana_id))
    }

    /// Search the catalog. Queries shorter than two characters are rejected
    /// before the store is consulted.
    pub fn search_cards(&self, query: &str) -> EngineResult<SearchOutcome> {
        let trimmed = query.trim();
        if trimmed.chars().count() < 2 {
            return Ok(SearchOutcome {
                cards: Vec::new(),
                notice: Some(
                    "search query too short: the cards require at least 2 characters".to_string(),
                ),
            });
        }
        Ok(SearchOutcome {
            cards: self.cards.search(trimmed)?,
            notice: None,
        })
    }

    /// Daily counters for an explicit day.
    pub fn stats_for(&self, day: NaiveDate) -> EngineResult<Option<DailyStats>> {
        Ok(self.stats.daily(day)?)
    }

    /// Daily counters for today, UTC.
    pub fn stats_today(&self) -> EngineResult<Option<DailyStats>> {
        self.stats_for(chrono::Utc::now().date_naive())
    }

    /// All-time counters folded across every recorded day.
    pub fn stats_overview(&self) -> EngineResult<StatsOverview> {
        Ok(self.stats.overview(chrono::Utc::now().date_naive())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{DECK_SIZE, standard_deck};
    use arcana_store::{MemoryCardStore, MemoryReadingStore, MemoryStatsStore, StoreResult};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    fn seeded_service(
        seed: u64,
    ) -> ReadingService<MemoryCardStore, MemoryReadingStore, MemoryStatsStore> {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_retry(1, Duration::ZERO);
        ReadingService::new(
            MemoryCardStore::new(standard_deck()),
            MemoryReadingStore::new(),
            MemoryStatsStore::new(),
            config,
        )
    }

    #[test]
    fn single_reading_has_one_card_with_the_daily_label() {
        let mut service = seeded_service(1);
        let view = service
            .create_reading(ReadingRequest::new(SpreadKind::Single))
            .unwrap();
        let reading = &view.reading;
        assert_eq!(reading.drawn_cards.len(), 1);
        assert_eq!(reading.drawn_cards[0].position, 0);
        assert_eq!(reading.drawn_cards[0].position_name, "오늘의 메시지");
        assert!(reading.is_complete());
    }

    #[test]
    fn three_card_reading_positions_and_labels() {
        let mut service = seeded_service(2);
        let view = service
            .create_reading(ReadingRequest::new(SpreadKind::ThreeCard))
            .unwrap();
        let cards = &view.reading.drawn_cards;
        assert_eq!(cards.len(), 3);
        let labels: Vec<&str> = cards.iter().map(|c| c.position_name.as_str()).collect();
        assert_eq!(labels, ["과거", "현재", "미래"]);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.position, i);
        }
    }

    #[test]
    fn celtic_cross_draws_ten_distinct_cards() {
        let mut service = seeded_service(3);
        let view = service
            .create_reading(ReadingRequest::new(SpreadKind::CelticCross))
            .unwrap();
        let cards = &view.reading.drawn_cards;
        assert_eq!(cards.len(), 10);
        let ids: HashSet<u8> = cards.iter().map(|c| c.card.arcana_id).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(cards[9].position_name, "조언");
    }

    #[test]
    fn confidence_scores_sit_in_their_band() {
        let mut service = seeded_service(4);
        for _ in 0..10 {
            let view = service
                .create_reading(ReadingRequest::new(SpreadKind::ThreeCard))
                .unwrap();
            for card in &view.reading.drawn_cards {
                assert!(
                    (CONFIDENCE_MIN..CONFIDENCE_MIN + CONFIDENCE_SPAN).contains(&card.confidence),
                    "confidence {} out of band",
                    card.confidence
                );
            }
        }
    }

    #[test]
    fn full_single_reading_with_a_question() {
        // Upright is pinned so the flavor suffix must carry the card name.
        let config = EngineConfig::default()
            .with_seed(5)
            .with_reversed_chance(0.0)
            .with_retry(1, Duration::ZERO);
        let mut service = ReadingService::new(
            MemoryCardStore::new(standard_deck()),
            MemoryReadingStore::new(),
            MemoryStatsStore::new(),
            config,
        );
        let view = service
            .create_reading(
                ReadingRequest::new(SpreadKind::Single)
                    .with_question("오늘 나에게 필요한 메시지는 무엇인가요?")
                    .with_user("user-7"),
            )
            .unwrap();
        let reading = &view.reading;
        let card = &reading.drawn_cards[0];
        assert!(!card.interpretation.is_empty());
        assert!(
            card.interpretation.contains(&card.card.name_kr),
            "interpretation {:?} must name {}",
            card.interpretation,
            card.card.name_kr
        );
        assert!(reading.overall_message.as_deref().is_some_and(|m| !m.is_empty()));
        assert!(reading.advice.as_deref().is_some_and(|a| !a.is_empty()));
        assert_eq!(reading.user_id.as_deref(), Some("user-7"));
        assert!(!view.cosmic_energy.is_empty());
    }

    #[test]
    fn seeded_services_draw_identical_readings() {
        let mut a = seeded_service(42);
        let mut b = seeded_service(42);
        let va = a.create_reading(ReadingRequest::new(SpreadKind::ThreeCard)).unwrap();
        let vb = b.create_reading(ReadingRequest::new(SpreadKind::ThreeCard)).unwrap();
        let ids_a: Vec<u8> = va.reading.drawn_cards.iter().map(|c| c.card.arcana_id).collect();
        let ids_b: Vec<u8> = vb.reading.drawn_cards.iter().map(|c| c.card.arcana_id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(va.reading.overall_message, vb.reading.overall_message);
    }

    #[test]
    fn created_reading_can_be_fetched_back() {
        let mut service = seeded_service(6);
        let created = service
            .create_reading(ReadingRequest::new(SpreadKind::Single))
            .unwrap();
        let fetched = service.get_reading(created.reading.id).unwrap();
        assert_eq!(fetched.reading, created.reading);
    }

    #[test]
    fn fetching_an_unknown_reading_fails() {
        let mut service = seeded_service(7);
        let missing = ReadingId::new();
        assert!(matches!(
            service.get_reading(missing),
            Err(EngineError::ReadingNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn draw_cards_validates_the_count() {
        let mut service = seeded_service(8);
        assert_eq!(service.draw_cards(5).unwrap().len(), 5);
        assert!(matches!(
            service.draw_cards(0),
            Err(EngineError::InvalidCardCount { requested: 0, .. })
        ));
        assert!(matches!(
            service.draw_cards(DECK_SIZE + 1),
            Err(EngineError::InvalidCardCount { .. })
        ));
    }

    #[test]
    fn card_lookup_by_arcana_id() {
        let service = seeded_service(9);
        assert_eq!(service.card(0).unwrap().name, "The Fool");
        assert!(matches!(
            service.card(99),
            Err(EngineError::CardNotFound(99))
        ));
    }

    #[test]
    fn parse_spread_accepts_known_kinds_and_rejects_others() {
        assert_eq!(parse_spread("single").unwrap(), SpreadKind::Single);
        assert_eq!(parse_spread("three_card").unwrap(), SpreadKind::ThreeCard);
        assert_eq!(parse_spread("celtic-cross").unwrap(), SpreadKind::CelticCross);
        assert!(matches!(
            parse_spread("pentagram"),
            Err(EngineError::UnknownSpread(s)) if s == "pentagram"
        ));
    }

    #[test]
    fn reading_history_pages_a_users_readings() {
        let mut service = seeded_service(12);
        for _ in 0..3 {
            service
                .create_reading(ReadingRequest::new(SpreadKind::Single).with_user("user-1"))
                .unwrap();
        }
        service
            .create_reading(ReadingRequest::new(SpreadKind::Single).with_user("user-2"))
            .unwrap();

        let page = service.reading_history("user-1", 0, 2).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.readings.len(), 2);
        assert!(page.readings.iter().all(|r| r.user_id.as_deref() == Some("user-1")));
        assert!(page.readings.iter().all(Reading::is_complete));

        let rest = service.reading_history("user-1", 2, 2).unwrap();
        assert_eq!(rest.readings.len(), 1);

        let empty = service.reading_history("nobody", 0, 10).unwrap();
        assert_eq!(empty.total, 0);
        assert!(empty.readings.is_empty());
    }

    #[test]
    fn stats_overview_folds_all_recorded_readings() {
        let mut service = seeded_service(13);
        service
            .create_reading(ReadingRequest::new(SpreadKind::Single))
            .unwrap();
        service
            .create_reading(ReadingRequest::new(SpreadKind::ThreeCard))
            .unwrap();

        let overview = service.stats_overview().unwrap();
        assert_eq!(overview.total, 2);
        assert_eq!(overview.today, 2);
        assert_eq!(overview.single, 1);
        assert_eq!(overview.three_card, 1);
    }

    #[test]
    fn stats_count_readings_by_spread() {
        let mut service = seeded_service(10);
        for _ in 0..2 {
            service
                .create_reading(ReadingRequest::new(SpreadKind::Single))
                .unwrap();
        }
        service
            .create_reading(ReadingRequest::new(SpreadKind::ThreeCard))
            .unwrap();

        let row = service.stats_today().unwrap().unwrap();
        assert_eq!(row.total, 3);
        assert_eq!(row.single, 2);
        assert_eq!(row.three_card, 1);
        assert_eq!(row.celtic_cross, 0);
    }

    /// Card store that counts search invocations through a shared counter.
    struct CountingSearchStore {
        inner: MemoryCardStore,
        search_calls: Arc<AtomicU32>,
    }

    impl CardStore for CountingSearchStore {
        fn list_cards(&self) -> StoreResult<Vec<Card>> {
            self.inner.list_cards()
        }

        fn card(&self, arcana_id: u8) -> StoreResult<Option<Card>> {
            self.inner.card(arcana_id)
        }

        fn search_cards(&self, query: &str) -> StoreResult<Vec<Card>> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.search_cards(query)
        }
    }

    #[test]
    fn short_queries_never_reach_the_store() {
        let search_calls = Arc::new(AtomicU32::new(0));
        let store = CountingSearchStore {
            inner: MemoryCardStore::new(standard_deck()),
            search_calls: Arc::clone(&search_calls),
        };
        let service = ReadingService::new(
            store,
            MemoryReadingStore::new(),
            MemoryStatsStore::new(),
            EngineConfig::default().with_seed(11).with_retry(1, Duration::ZERO),
        );

        let outcome = service.search_cards("  광  ").unwrap();
        assert!(outcome.cards.is_empty());
        assert!(outcome.notice.is_some());
        assert_eq!(search_calls.load(Ordering::SeqCst), 0);

        let outcome = service.search_cards("광대").unwrap();
        assert!(outcome.notice.is_none());
        assert!(outcome.cards.iter().any(|c| c.name_kr == "광대"));
        assert_eq!(search_calls.load(Ordering::SeqCst), 1);
    }
}
