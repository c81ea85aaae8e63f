use thiserror::Error;

use arcana_core::ReadingId;
use arcana_store::StoreError;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors the reading engine surfaces to its callers.
///
/// Interpretation synthesis and statistics updates never appear here:
/// synthesis degrades to fallback text and statistics failures are logged
/// and swallowed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A draw count outside the valid range for the deck.
    #[error("invalid card count {requested}: must be between 1 and {deck_size}")]
    InvalidCardCount {
        /// The count the caller asked for.
        requested: usize,
        /// The size of the deck being drawn from.
        deck_size: usize,
    },

    /// A spread name that matches no known spread kind.
    #[error("unknown spread kind: {0}")]
    UnknownSpread(String),

    /// The requested reading does not exist.
    #[error("reading not found: {0}")]
    ReadingNotFound(ReadingId),

    /// The requested card does not exist.
    #[error("card not found: arcana {0}")]
    CardNotFound(u8),

    /// The backing store failed after retries were exhausted.
    #[error(transparent)]
    Store(#[from] StoreError),
}
