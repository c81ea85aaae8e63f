//! Storage layer for Arcana: store traits, in-memory reference
//! implementations, and the cache-aside repositories that back every read
//! path with a time-boxed cache and bounded retry.
//!
//! Writes never purge cache entries; staleness is bounded only by each
//! entry's TTL. This is a deliberate bounded-staleness policy, not an
//! oversight.

/// Time-boxed key-value cache.
pub mod cache;
/// Error types for store operations.
pub mod error;
/// In-memory store implementations.
pub mod memory;
/// Cache-aside repositories composing cache + retry around a store.
pub mod repo;
/// Bounded retry with exponential backoff.
pub mod retry;
/// Traits a backing store must implement.
pub mod store;

pub use cache::TtlCache;
pub use error::{StoreError, StoreResult};
pub use memory::{MemoryCardStore, MemoryReadingStore, MemoryStatsStore};
pub use repo::{CardRepository, ReadingRepository, StatsRepository};
pub use retry::Retry;
pub use store::{CardStore, ReadingStore, StatsStore};
