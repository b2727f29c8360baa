//! Scheduled Refresh Task
//!
//! Reloads the remote registry on a fixed interval until cancelled. A failed
//! refresh is logged and the task waits for the next tick.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::application::registry::cache::RegistryCache;

pub(crate) async fn run(cache: RegistryCache, interval: Duration, token: CancellationToken) {
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            biased;
            () = token.cancelled() => break,
            result = cache.load_remote() => result,
        };

        match result {
            Ok(registry) => {
                cache.replace(registry);
            }
            Err(err) => {
                tracing::info!(error = %err, "Failed to load latest registry, skipping this interval update");
            }
        }
    }

    tracing::debug!("Stopping scheduled registry refresh due to cancellation");
}
