pub mod card;
pub mod cards;
pub mod draw;
pub mod reading;
pub mod search;
pub mod stats;

use arcana_core::{SpreadKind, standard_deck};
use arcana_engine::{EngineConfig, ReadingService};
use arcana_store::{MemoryCardStore, MemoryReadingStore, MemoryStatsStore};

/// A service over the built-in deck and in-memory stores.
pub fn service(
    seed: Option<u64>,
) -> ReadingService<MemoryCardStore, MemoryReadingStore, MemoryStatsStore> {
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    ReadingService::new(
        MemoryCardStore::new(standard_deck()),
        MemoryReadingStore::new(),
        MemoryStatsStore::new(),
        config,
    )
}

/// Parse a user-supplied spread name.
pub fn parse_spread(s: &str) -> Result<SpreadKind, String> {
    arcana_engine::parse_spread(s)
        .map_err(|e| format!("{e} (expected single, three_card, or celtic_cross)"))
}

/// Shorten a text blob for table display.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
