//! Reading generation and interpretation engine.
//!
//! `ReadingService` composes the card catalog, random sampling,
//! interpretation synthesis, and daily statistics into the two top-level
//! operations: creating a reading and fetching one. All randomness flows
//! through a single seedable `StdRng`, so a seeded service is fully
//! deterministic.

/// Engine configuration.
pub mod config;
/// Error types for engine operations.
pub mod error;
/// Per-card interpretation synthesis.
pub mod interpret;
/// Reading-level narrative aggregation.
pub mod overall;
/// Fixed phrase pools for narrative flavor.
pub mod phrases;
/// Random card sampling without replacement.
pub mod sampler;
/// The reading orchestrator.
pub mod service;
/// Non-fatal daily statistics accumulation.
pub mod stats;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use overall::OverallReading;
pub use service::{
    ReadingPage, ReadingRequest, ReadingService, ReadingView, SearchOutcome, parse_spread,
};
pub use stats::StatsAccumulator;
