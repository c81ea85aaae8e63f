use std::time::Duration;

use tracing::warn;

use crate::error::StoreResult;

/// Bounded retry with exponential backoff for store operations.
///
/// Attempt numbering starts at 1; after failed attempt `n` the caller
/// sleeps `base_delay * 2^n` before the next attempt. When all attempts
/// fail the last error is returned unchanged.
#[derive(Debug, Clone)]
pub struct Retry {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for Retry {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl Retry {
    /// Create a policy with the given attempt cap (at least 1) and backoff
    /// base delay.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// The attempt cap.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run an operation, retrying on any error up to the attempt cap.
    pub fn run<T>(&self, mut operation: impl FnMut() -> StoreResult<T>) -> StoreResult<T> {
        let mut attempt = 1;
        loop {
            match operation() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "store operation failed"
                    );
                    if attempt >= self.max_attempts {
                        return Err(err);
                    }
                    std::thread::sleep(self.base_delay * 2u32.pow(attempt));
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::cell::Cell;

    fn fast() -> Retry {
        Retry::new(3, Duration::from_millis(1))
    }

    #[test]
    fn succeeds_first_attempt() {
        let calls = Cell::new(0u32);
        let result = fast().run(|| {
            calls.set(calls.get() + 1);
            Ok(7)
        });
        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn recovers_on_third_attempt() {
        let calls = Cell::new(0u32);
        let result = fast().run(|| {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(StoreError::Unavailable("flaky".to_string()))
            } else {
                Ok("ready")
            }
        });
        assert_eq!(result, Ok("ready"));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn exhausts_attempts_and_surfaces_last_error() {
        let calls = Cell::new(0u32);
        let result: StoreResult<()> = fast().run(|| {
            calls.set(calls.get() + 1);
            Err(StoreError::Unavailable(format!("failure {}", calls.get())))
        });
        assert_eq!(calls.get(), 3);
        // The error from the final attempt comes back unchanged.
        assert_eq!(
            result,
            Err(StoreError::Unavailable("failure 3".to_string()))
        );
    }

    #[test]
    fn attempt_cap_is_at_least_one() {
        let calls = Cell::new(0u32);
        let result = Retry::new(0, Duration::ZERO).run(|| {
            calls.set(calls.get() + 1);
            Ok(1)
        });
        assert_eq!(result, Ok(1));
        assert_eq!(calls.get(), 1);
        assert_eq!(Retry::new(0, Duration::ZERO).max_attempts(), 1);
    }
}
