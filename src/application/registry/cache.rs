//! Registry Cache
//!
//! Process-wide holder of the current registry snapshot. The first access
//! loads the remote registry, falling back to the embedded snapshot and
//! starting a background repair when the remote source is unavailable.
//!
//! The snapshot lives behind an [`ArcSwapOption`]: readers always observe a
//! complete snapshot and replacement is a single pointer swap. A reader may
//! still see the snapshot from just before a concurrent replacement.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::application::registry::backoff::BackoffPolicy;
use crate::application::registry::loader::RegistryLoader;
use crate::application::registry::{refresh, repair};
use crate::domain::gateways::{RegistryProvider, RegistrySource};
use crate::domain::models::registry::{NetworkRegistry, SnapshotOrigin};
use crate::shared::errors::{DomainError, RegistryError, SourceError};

/// First-load state; the init lock being held means a load is in progress
#[derive(Debug)]
enum InitState {
    Uninitialized,
    Ready,
    Failed(RegistryError),
}

struct CacheInner {
    remote: Arc<dyn RegistrySource>,
    embedded: Arc<dyn RegistrySource>,
    loader: RegistryLoader,
    backoff: BackoffPolicy,
    current: ArcSwapOption<NetworkRegistry>,
    init: tokio::sync::Mutex<InitState>,
    shutdown: CancellationToken,
    repair: Mutex<Option<JoinHandle<()>>>,
}

/// Shared, cheaply cloneable handle to the registry cache
#[derive(Clone)]
pub struct RegistryCache {
    inner: Arc<CacheInner>,
}

impl RegistryCache {
    /// Create an empty cache; nothing is loaded until first use
    #[must_use]
    pub fn new(
        remote: Arc<dyn RegistrySource>,
        embedded: Arc<dyn RegistrySource>,
        loader: RegistryLoader,
        backoff: BackoffPolicy,
    ) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                remote,
                embedded,
                loader,
                backoff,
                current: ArcSwapOption::empty(),
                init: tokio::sync::Mutex::new(InitState::Uninitialized),
                shutdown: CancellationToken::new(),
                repair: Mutex::new(None),
            }),
        }
    }

    /// The current snapshot, performing the first load if needed
    ///
    /// Concurrent first callers wait for a single load.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NoBaseline` when neither the remote nor the
    /// embedded source could be loaded on first access. The failure is sticky.
    pub async fn snapshot(&self) -> Result<Arc<NetworkRegistry>, RegistryError> {
        if let Some(snapshot) = self.inner.current.load_full() {
            return Ok(snapshot);
        }
        self.initialize().await
    }

    /// Whether a repair task is currently running
    #[must_use]
    pub fn is_repairing(&self) -> bool {
        self.inner
            .repair
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Start refreshing the snapshot from the remote source every `interval`
    ///
    /// The first refresh happens one interval after the call. Failed refreshes
    /// are logged and skipped. The task stops once `token` is cancelled.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if `interval` is zero.
    pub fn start_scheduled_refresh(
        &self,
        interval: Duration,
        token: CancellationToken,
    ) -> Result<JoinHandle<()>, DomainError> {
        if interval.is_zero() {
            return Err(DomainError::InvalidState("refresh interval must be greater than zero".to_string()));
        }

        tracing::info!(interval_secs = interval.as_secs_f64(), "Starting scheduled registry refresh");
        Ok(tokio::spawn(refresh::run(self.clone(), interval, token)))
    }

    /// Cancel the repair task, if any, and wait for it to stop
    pub async fn shutdown(&self) {
        self.inner.shutdown.cancel();

        let handle = self
            .inner
            .repair
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "Registry repair task ended abnormally");
            }
        }
    }

    /// Load a fresh snapshot from the remote source
    pub(crate) async fn load_remote(&self) -> Result<NetworkRegistry, SourceError> {
        self.inner
            .loader
            .load(self.inner.remote.as_ref(), SnapshotOrigin::Remote)
            .await
    }

    /// Replace the cached snapshot wholesale
    pub(crate) fn replace(&self, registry: NetworkRegistry) -> Arc<NetworkRegistry> {
        tracing::info!(
            origin = registry.origin().as_str(),
            networks = registry.len(),
            "Networks registry snapshot replaced"
        );
        let snapshot = Arc::new(registry);
        self.inner.current.store(Some(Arc::clone(&snapshot)));
        snapshot
    }

    async fn initialize(&self) -> Result<Arc<NetworkRegistry>, RegistryError> {
        let mut state = self.inner.init.lock().await;

        // Another caller finished loading, or a refresh installed a snapshot.
        if let Some(snapshot) = self.inner.current.load_full() {
            *state = InitState::Ready;
            return Ok(snapshot);
        }
        if let InitState::Failed(err) = &*state {
            return Err(err.clone());
        }

        let remote_err = match self.load_remote().await {
            Ok(registry) => {
                *state = InitState::Ready;
                return Ok(self.replace(registry));
            }
            Err(err) => err,
        };

        // A scheduled refresh may have installed a snapshot while the load was in flight.
        if let Some(snapshot) = self.inner.current.load_full() {
            *state = InitState::Ready;
            return Ok(snapshot);
        }

        tracing::warn!(
            source = self.inner.remote.name(),
            error = %remote_err,
            "Failed to load remote networks registry, falling back to embedded snapshot"
        );

        match self
            .inner
            .loader
            .load(self.inner.embedded.as_ref(), SnapshotOrigin::Embedded)
            .await
        {
            Ok(registry) => {
                let snapshot = self.replace(registry);
                *state = InitState::Ready;
                self.spawn_repair();
                Ok(snapshot)
            }
            Err(embedded_err) => {
                tracing::error!(
                    remote_error = %remote_err,
                    embedded_error = %embedded_err,
                    "Failed to load networks registry from both remote and embedded sources"
                );
                let err = RegistryError::NoBaseline {
                    remote: remote_err,
                    embedded: embedded_err,
                };
                *state = InitState::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn spawn_repair(&self) {
        let token = self.inner.shutdown.child_token();
        let handle = tokio::spawn(repair::run(self.clone(), self.inner.backoff.clone(), token));

        *self
            .inner
            .repair
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }
}

#[async_trait]
impl RegistryProvider for RegistryCache {
    async fn current(&self) -> Result<Arc<NetworkRegistry>, RegistryError> {
        self.snapshot().await
    }
}
