//! Request lifecycle for the latest recommendation.
//!
//! The controller is the only writer of [`FetchState`]; readers subscribe to a
//! `watch` channel. At most one request is in flight at a time.

use crate::client::RecommendationSource;
use crate::domain::recommendation::Recommendation;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Success(Recommendation),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

pub struct FetchController<S> {
    source: Arc<S>,
    state_tx: Arc<watch::Sender<FetchState>>,
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    activated: bool,
    torn_down: bool,
    in_flight: Option<JoinHandle<()>>,
}

impl<S> FetchController<S>
where
    S: RecommendationSource + 'static,
{
    pub fn new(source: S) -> Self {
        let (state_tx, _) = watch::channel(FetchState::Loading);
        Self {
            source: Arc::new(source),
            state_tx: Arc::new(state_tx),
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Issues the initial request. Returns `false` if already activated.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&self) -> bool {
        let mut inner = self.lock_inner();
        if inner.activated {
            return false;
        }
        inner.activated = true;
        self.spawn_fetch(&mut inner);
        true
    }

    /// Re-issues the request from the error state. Returns `false` (and does
    /// nothing) while loading or after success.
    pub fn retry(&self) -> bool {
        let mut inner = self.lock_inner();
        if !inner.activated || !matches!(*self.state_tx.borrow(), FetchState::Error(_)) {
            tracing::debug!("retry ignored; no failed request to repeat");
            return false;
        }
        self.state_tx.send_replace(FetchState::Loading);
        self.spawn_fetch(&mut inner);
        true
    }

    pub fn state(&self) -> FetchState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_tx.subscribe()
    }

    /// Waits until the current request resolves and returns the outcome.
    pub async fn wait_settled(&self) -> FetchState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|s| !s.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        lock(&self.inner)
    }

    fn spawn_fetch(&self, inner: &mut Inner) {
        let source = Arc::clone(&self.source);
        let state_tx = Arc::clone(&self.state_tx);
        let shared = Arc::clone(&self.inner);

        let handle = tokio::spawn(async move {
            tracing::info!("fetching latest recommendation");
            let next = match source.fetch_latest().await {
                Ok(rec) => {
                    tracing::info!(
                        id = rec.id,
                        symbol = %rec.symbol,
                        trade_date = %rec.trade_date,
                        "latest recommendation loaded"
                    );
                    FetchState::Success(rec)
                }
                Err(err) => {
                    tracing::error!(kind = err.kind(), error = %err, "latest recommendation fetch failed");
                    FetchState::Error(err.to_string())
                }
            };
            // Publish under the lock so teardown cannot interleave.
            let guard = lock(&shared);
            if guard.torn_down {
                tracing::debug!("controller torn down; dropping fetch result");
                return;
            }
            state_tx.send_replace(next);
            drop(guard);
        });

        inner.in_flight = Some(handle);
    }
}

impl<S> Drop for FetchController<S> {
    fn drop(&mut self) {
        let mut inner = lock(&self.inner);
        inner.torn_down = true;
        if let Some(handle) = inner.in_flight.take() {
            handle.abort();
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
