//! Configuration for the reading engine.

use std::time::Duration;

/// Probability that a drawn card lands reversed.
pub const DEFAULT_REVERSED_CHANCE: f64 = 0.30;

/// Configuration for a [`crate::ReadingService`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible readings. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability that each drawn card lands reversed.
    pub reversed_chance: f64,
    /// Attempt cap for store operations.
    pub retry_max_attempts: u32,
    /// Backoff base delay between store attempts.
    pub retry_base_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reversed_chance: DEFAULT_REVERSED_CHANCE,
            retry_max_attempts: 3,
            retry_base_delay: Duration::from_secs(1),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reversed-orientation probability (clamped to [0, 1]).
    pub fn with_reversed_chance(mut self, chance: f64) -> Self {
        self.reversed_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the store retry policy.
    pub fn with_retry(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.retry_max_attempts = max_attempts;
        self.retry_base_delay = base_delay;
        self
    }
}
