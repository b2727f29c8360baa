//! Background Repair Task
//!
//! Runs after a first load fell back to the embedded snapshot: retries the
//! remote registry with capped exponential backoff until it loads or the task
//! is cancelled, then replaces the cached snapshot.

use tokio_util::sync::CancellationToken;

use crate::application::registry::backoff::BackoffPolicy;
use crate::application::registry::cache::RegistryCache;

pub(crate) async fn run(cache: RegistryCache, backoff: BackoffPolicy, token: CancellationToken) {
    let mut attempt: u32 = 0;

    loop {
        let delay = backoff.delay_for_attempt(attempt);
        tracing::debug!(
            attempt,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "Scheduling registry repair attempt"
        );

        tokio::select! {
            biased;
            () = token.cancelled() => break,
            () = tokio::time::sleep(delay) => {}
        }

        let result = tokio::select! {
            biased;
            () = token.cancelled() => break,
            result = cache.load_remote() => result,
        };

        match result {
            Ok(registry) => {
                tracing::info!(attempt, "Remote networks registry loaded, leaving degraded mode");
                cache.replace(registry);
                return;
            }
            Err(err) => {
                tracing::debug!(attempt, error = %err, "Registry repair attempt failed");
                attempt = attempt.saturating_add(1);
            }
        }
    }

    tracing::debug!("Stopping registry repair due to cancellation");
}
