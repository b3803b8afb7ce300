//! The orchestration engine: a single-threaded cooperative event loop.
//!
//! The engine owns [`AppState`] and is the only place that mutates it. All
//! work is event-driven and interleaved on one logical task: presentation
//! inputs, the debounce deadline, and fetch completions are raced in a
//! `tokio::select!` loop, so no locks are needed. Fetches run as spawned
//! tasks that only ever send [`FetchOutcome`] messages back; ordering between
//! overlapping catalog requests is enforced solely by the generation check in
//! the event handler. In-flight requests are never aborted — their results
//! are ignored once stale.

use crate::app::{handle_event, Action, AppState, Event};
use crate::catalog::{CatalogApi, TmdbCatalog};
use crate::domain::error::{CinescopeError, Result};
use crate::orchestrator::debounce::Debouncer;
use crate::orchestrator::messages::{EngineInput, FetchOutcome};
use crate::trending::{RestTrendingStore, TrendingStore};
use crate::view::Snapshot;
use crate::Settings;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Entries requested from the trending store on session start.
const TRENDING_LIMIT: u32 = 10;

const INPUT_BUFFER: usize = 32;
const OUTCOME_BUFFER: usize = 32;

/// Presentation-side handle to a running engine.
///
/// This is the core's entire exposed surface: the four input actions plus
/// the snapshot channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    input_tx: mpsc::Sender<EngineInput>,
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl EngineHandle {
    /// Updates the raw search term (called per keystroke).
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Engine`] if the engine has shut down.
    pub async fn set_search_term(&self, text: impl Into<String>) -> Result<()> {
        self.send(EngineInput::SetSearchTerm(text.into())).await
    }

    /// Requests a different result page.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Engine`] if the engine has shut down.
    pub async fn change_page(&self, page: u32) -> Result<()> {
        self.send(EngineInput::ChangePage(page)).await
    }

    /// Opens the detail view for one record.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Engine`] if the engine has shut down.
    pub async fn select_record(&self, id: u64) -> Result<()> {
        self.send(EngineInput::SelectRecord(id)).await
    }

    /// Closes the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Engine`] if the engine has shut down.
    pub async fn close_detail(&self) -> Result<()> {
        self.send(EngineInput::CloseDetail).await
    }

    /// Returns the current render-ready snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Returns a watch receiver that yields on every snapshot change.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    async fn send(&self, input: EngineInput) -> Result<()> {
        self.input_tx
            .send(input)
            .await
            .map_err(|_| CinescopeError::Engine("engine has shut down".to_string()))
    }
}

/// The orchestration engine event loop.
///
/// Constructed together with its [`EngineHandle`]; the caller spawns
/// [`Engine::run`] on a runtime (a current-thread runtime suffices) and keeps
/// the handle. The engine stops when every handle has been dropped.
pub struct Engine {
    state: AppState,
    catalog: Arc<dyn CatalogApi>,
    trending: Option<Arc<dyn TrendingStore>>,
    debouncer: Debouncer<String>,
    input_rx: mpsc::Receiver<EngineInput>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
    snapshot_tx: watch::Sender<Snapshot>,
}

impl Engine {
    /// Creates an engine over the given collaborators.
    ///
    /// `trending` may be `None`, in which case reports are dropped and the
    /// trending section stays absent. `debounce` is the quiet period applied
    /// to search input.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        trending: Option<Arc<dyn TrendingStore>>,
        image_base_url: impl Into<String>,
        debounce: Duration,
    ) -> (Self, EngineHandle) {
        let state = AppState::new(image_base_url);
        let (input_tx, input_rx) = mpsc::channel(INPUT_BUFFER);
        let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.compute_snapshot());

        let engine = Self {
            state,
            catalog,
            trending,
            debouncer: Debouncer::new(debounce),
            input_rx,
            outcome_tx,
            outcome_rx,
            snapshot_tx,
        };

        (engine, EngineHandle { input_tx, snapshot_rx })
    }

    /// Creates an engine wired to the HTTP catalog and trending clients
    /// described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Config`] when the catalog credential is
    /// missing — before any network call is attempted.
    pub fn from_settings(settings: &Settings) -> Result<(Self, EngineHandle)> {
        let catalog: Arc<dyn CatalogApi> = Arc::new(TmdbCatalog::new(settings)?);
        let trending: Option<Arc<dyn TrendingStore>> = RestTrendingStore::from_settings(settings)?
            .map(|store| Arc::new(store) as Arc<dyn TrendingStore>);

        Ok(Self::new(
            catalog,
            trending,
            settings.image_base_url.clone(),
            Duration::from_millis(settings.debounce_ms),
        ))
    }

    /// Runs the event loop until every handle is dropped.
    ///
    /// Issues the initial discover fetch and trending read, then races
    /// inputs, the debounce deadline, and fetch outcomes.
    pub async fn run(mut self) {
        tracing::debug!("engine started");
        self.step(Event::Started);

        loop {
            let event = tokio::select! {
                maybe_input = self.input_rx.recv() => match maybe_input {
                    None => break,
                    Some(EngineInput::SetSearchTerm(text)) => {
                        self.debouncer.push(text.clone());
                        Event::SearchInput(text)
                    }
                    Some(EngineInput::ChangePage(page)) => Event::PageChanged(page),
                    Some(EngineInput::SelectRecord(id)) => Event::RecordSelected(id),
                    Some(EngineInput::CloseDetail) => Event::DetailClosed,
                },
                query = self.debouncer.settled() => Event::QuerySettled(query),
                maybe_outcome = self.outcome_rx.recv() => match maybe_outcome {
                    // Unreachable while the engine holds its own sender.
                    None => break,
                    Some(outcome) => outcome.into_event(),
                },
            };

            self.step(event);
        }

        tracing::debug!("engine stopped");
    }

    /// Processes one event: mutate state, execute actions, publish snapshot.
    fn step(&mut self, event: Event) {
        let (changed, actions) = handle_event(&mut self.state, event);

        for action in actions {
            self.execute(action);
        }

        if changed {
            let _ = self.snapshot_tx.send(self.state.compute_snapshot());
        }
    }

    /// Executes one side-effect action by spawning a fetch task.
    ///
    /// Tasks never touch state; they report back through the outcome channel
    /// and the loop feeds the result into the handler.
    fn execute(&self, action: Action) {
        match action {
            Action::FetchCatalog { request, generation } => {
                let catalog = Arc::clone(&self.catalog);
                let outcome_tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = catalog
                        .fetch_page(&request)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = outcome_tx
                        .send(FetchOutcome::Catalog { generation, outcome })
                        .await;
                });
            }

            Action::FetchDetail { id } => {
                let catalog = Arc::clone(&self.catalog);
                let outcome_tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = catalog.fetch_detail(id).await.map_err(|e| e.to_string());
                    let _ = outcome_tx.send(FetchOutcome::Detail { id, outcome }).await;
                });
            }

            Action::ReportSearch { term, top_result } => {
                let Some(store) = self.trending.clone() else {
                    return;
                };
                tokio::spawn(async move {
                    // Best-effort: failures are logged, never surfaced.
                    if let Err(e) = store.record_search(&term, &top_result).await {
                        tracing::debug!(term = %term, error = %e, "trending report dropped");
                    }
                });
            }

            Action::LoadTrending => {
                let Some(store) = self.trending.clone() else {
                    return;
                };
                let outcome_tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    match store.top_searches(TRENDING_LIMIT).await {
                        Ok(entries) => {
                            let _ = outcome_tx.send(FetchOutcome::Trending { entries }).await;
                        }
                        Err(e) => {
                            tracing::debug!(error = %e, "trending read failed, section stays absent");
                        }
                    }
                });
            }
        }
    }
}
