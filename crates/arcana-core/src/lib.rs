//! Core types for Arcana: the Major Arcana deck, spreads, readings, and
//! day-bucketed statistics.
//!
//! This crate defines the data model the reading engine operates on. It is
//! independent of any storage backend — you can construct a deck
//! programmatically or use the built-in [`standard_deck`].

/// Card attributes, orientations, and meaning aspect sets.
pub mod card;
/// The built-in 22-card Major Arcana deck.
pub mod deck;
/// Reading and drawn-card lifecycle types.
pub mod reading;
/// Spread kinds and their position label tables.
pub mod spread;
/// Day-bucketed reading counters.
pub mod stats;

pub use card::{AspectSet, Card, Orientation, Topic};
pub use deck::{DECK_SIZE, standard_deck};
pub use reading::{DrawnCard, Reading, ReadingId, ReadingOrigin};
pub use spread::SpreadKind;
pub use stats::{DailyStats, StatsOverview};
