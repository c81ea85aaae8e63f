use thiserror::Error;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a backing store can produce.
///
/// Missing rows are not errors at this layer; lookups return `Option` and
/// the engine decides what absence means. Every store error is treated as
/// retryable by [`crate::Retry`] — no transient/permanent classification is
/// attempted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not service the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_cause() {
        let err = StoreError::Unavailable("connection reset".to_string());
        assert_eq!(err.to_string(), "store unavailable: connection reset");
    }
}
