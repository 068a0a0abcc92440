use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy used while establishing connections at startup.
///
/// Request handlers never retry; this is only for the connect phase.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first one
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds
    pub initial_delay_ms: u64,
    /// Upper bound for any single delay in milliseconds
    pub max_delay_ms: u64,
    /// Growth factor applied after every failed attempt
    pub backoff_multiplier: f64,
    /// Spread delays between 50% and 100% of the computed value
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Delay to wait after the given failed attempt (1-based), before jitter.
    fn delay_for(&self, attempt: u32) -> u64 {
        let exponent = attempt.saturating_sub(1) as i32;
        let raw = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent);
        (raw as u64).min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned unchanged when every attempt fails.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        attempt += 1;
        if attempt > config.max_retries {
            warn!(attempts = attempt, error = %err, "Giving up after exhausting retries");
            return Err(err);
        }

        let base = config.delay_for(attempt);
        let delay = if config.use_jitter { jitter(base) } else { base };
        debug!(
            attempt,
            max_retries = config.max_retries,
            delay_ms = delay,
            error = %err,
            "Operation failed, retrying"
        );
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

/// Pseudo-random factor in [0.5, 1.0) derived from a fresh hasher seed.
fn jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let factor = (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;
    (delay as f64 * factor) as u64
}

/// [`retry_with_backoff`] with [`RetryConfig::default`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
