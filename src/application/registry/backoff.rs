//! Exponential backoff with jitter for registry repair.
//!
//! Only the delay is capped; the number of attempts is not.

use std::time::Duration;

use rand::Rng;

const DEFAULT_INITIAL_DELAY_MS: u64 = 500;
const DEFAULT_MAX_DELAY_MS: u64 = 60_000;
const DEFAULT_MULTIPLIER: f64 = 1.5;
const DEFAULT_JITTER_FACTOR: f64 = 0.5;

/// Configuration for retry delays.
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
    /// Growth factor applied per attempt.
    pub multiplier: f64,
    /// Jitter factor (0.0 to 1.0) - randomizes delay by +/-(factor * delay).
    pub jitter_factor: f64,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
            multiplier: DEFAULT_MULTIPLIER,
            jitter_factor: DEFAULT_JITTER_FACTOR,
        }
    }
}

impl BackoffPolicy {
    /// Same policy with jitter disabled.
    #[must_use]
    pub fn without_jitter(self) -> Self {
        Self {
            jitter_factor: 0.0,
            ..self
        }
    }

    /// Delay to wait before retry number `attempt` (0-indexed).
    ///
    /// delay = initial_delay * multiplier^attempt, jittered, capped at max_delay.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let max_secs = self.max_delay.as_secs_f64();
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base_secs = (self.initial_delay.as_secs_f64() * self.multiplier.max(1.0).powi(exponent)).min(max_secs);

        let jitter_factor = self.jitter_factor.clamp(0.0, 1.0);
        let delay_secs = if jitter_factor > 0.0 && base_secs > 0.0 {
            let spread = base_secs * jitter_factor;
            rand::thread_rng().gen_range((base_secs - spread)..=(base_secs + spread))
        } else {
            base_secs
        };

        Duration::from_secs_f64(delay_secs.clamp(0.0, max_secs))
    }
}
