//! Scripted registry sources for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::RegistrySource;
use crate::domain::models::network::Network;
use crate::shared::errors::SourceError;

/// Replays scripted results, repeating the last one once the script runs out
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<Network>, SourceError>>>,
    last: Mutex<Result<Vec<Network>, SourceError>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<Network>, SourceError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Err(SourceError::Transport("script exhausted".to_string()))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(networks: Vec<Network>) -> Self {
        Self::new(vec![Ok(networks)])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(SourceError::Transport("connection refused".to_string()))])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrySource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Vec<Network>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }
        last.clone()
    }
}
