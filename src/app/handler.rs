//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch outcomes, translating them into state changes and action
//! sequences. It is the only code that mutates [`AppState`].
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the engine loop (input, debounce settle, outcomes)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Ordering
//!
//! Catalog outcomes carry the generation stamped on their request. The
//! handler accepts an outcome only when its generation matches the latest
//! issued one; anything older lost the race to a newer request and is
//! silently dropped. This is the sole ordering enforcement between
//! overlapping catalog fetches — in-flight requests are never aborted.

use crate::app::phase::FetchPhase;
use crate::app::{Action, AppState};
use crate::catalog::CatalogPage;
use crate::domain::{MovieDetail, TrendingEntry};

/// User-facing message for any catalog fetch failure.
pub const CATALOG_ERROR_MESSAGE: &str = "Failed to fetch movies. Please try again.";

/// User-facing message for any detail fetch failure.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch movie details";

/// Events processed by the orchestration core.
///
/// Input events come from the presentation boundary; settled and outcome
/// events are produced by the engine's debouncer and spawned fetch tasks.
/// The handler processes them sequentially, ensuring deterministic state
/// transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Session start: triggers the initial discover fetch and trending read.
    Started,

    /// Raw keystroke update of the search field. Display-only; no request is
    /// issued until the debouncer settles.
    SearchInput(String),

    /// The debouncer emitted a settled query after the quiet period.
    QuerySettled(String),

    /// The user requested a different page.
    PageChanged(u32),

    /// The user opened a record's detail view.
    RecordSelected(u64),

    /// The user closed the detail view.
    DetailClosed,

    /// A catalog fetch completed, successfully or not.
    CatalogFetched {
        /// Generation stamped on the originating request.
        generation: u64,
        /// The page, or an internal error description (logged, not shown).
        outcome: Result<CatalogPage, String>,
    },

    /// A detail fetch completed, successfully or not.
    DetailFetched {
        /// Record id the fetch was keyed by.
        id: u64,
        /// The detail record, or an internal error description.
        outcome: Result<MovieDetail, String>,
    },

    /// The trending store answered a top-list read.
    TrendingLoaded(Vec<TrendingEntry>),
}

impl Event {
    /// Compact event name for tracing spans.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::SearchInput(_) => "search_input",
            Self::QuerySettled(_) => "query_settled",
            Self::PageChanged(_) => "page_changed",
            Self::RecordSelected(_) => "record_selected",
            Self::DetailClosed => "detail_closed",
            Self::CatalogFetched { .. } => "catalog_fetched",
            Self::DetailFetched { .. } => "detail_fetched",
            Self::TrendingLoaded(_) => "trending_loaded",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(snapshot_changed, actions)`: the flag tells the engine whether
/// a new snapshot should be published, and the actions are executed in
/// sequence. Discarded stale outcomes change nothing and emit nothing.
pub fn handle_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = event.kind()).entered();

    match event {
        Event::Started => {
            let fetch = state.begin_catalog_fetch();
            (true, vec![fetch, Action::LoadTrending])
        }

        Event::SearchInput(text) => {
            state.search_term = text;
            (true, vec![])
        }

        Event::QuerySettled(query) => {
            if query == state.query {
                tracing::debug!("settled query unchanged, no fetch");
                return (false, vec![]);
            }

            tracing::debug!(query = %query, "debounced query changed");
            state.query = query;
            state.current_page = 1;
            let fetch = state.begin_catalog_fetch();
            (true, vec![fetch])
        }

        Event::PageChanged(page) => {
            let mut target = page.max(1).min(crate::catalog::MAX_PAGE);
            if state.total_pages > 0 {
                target = target.min(state.total_pages);
            }

            if target == state.current_page {
                tracing::debug!(page = target, "page unchanged, no fetch");
                return (false, vec![]);
            }

            state.current_page = target;
            let fetch = state.begin_catalog_fetch();
            (true, vec![fetch])
        }

        Event::RecordSelected(id) => {
            tracing::debug!(movie_id = id, "record selected");
            let fetch = state.begin_detail_fetch(id);
            (true, vec![fetch])
        }

        Event::DetailClosed => {
            state.close_detail();
            (true, vec![])
        }

        Event::CatalogFetched { generation, outcome } => {
            if !state.is_current(generation) {
                tracing::debug!(
                    generation = generation,
                    latest = state.generation,
                    "stale catalog response discarded"
                );
                return (false, vec![]);
            }

            match outcome {
                Ok(page) => {
                    tracing::debug!(
                        result_count = page.results.len(),
                        total_pages = page.total_pages,
                        "catalog response applied"
                    );

                    let report = if !state.query.is_empty() {
                        page.results.first().map(|top| Action::ReportSearch {
                            term: state.query.clone(),
                            top_result: top.clone(),
                        })
                    } else {
                        None
                    };

                    state.apply_catalog_success(page);
                    (true, report.into_iter().collect())
                }
                Err(reason) => {
                    tracing::error!(reason = %reason, "catalog fetch failed");
                    state.apply_catalog_failure(CATALOG_ERROR_MESSAGE.to_string());
                    (true, vec![])
                }
            }
        }

        Event::DetailFetched { id, outcome } => {
            if state.pending_detail != Some(id) {
                tracing::debug!(movie_id = id, "superseded detail response discarded");
                return (false, vec![]);
            }
            state.pending_detail = None;

            match outcome {
                Ok(detail) => {
                    state.detail = Some(detail);
                    state.detail_phase = FetchPhase::Success;
                    (true, vec![])
                }
                Err(reason) => {
                    tracing::error!(movie_id = id, reason = %reason, "detail fetch failed");
                    state.detail = None;
                    state.detail_phase = FetchPhase::Error(DETAIL_ERROR_MESSAGE.to_string());
                    (true, vec![])
                }
            }
        }

        Event::TrendingLoaded(entries) => {
            tracing::debug!(entry_count = entries.len(), "trending list replaced");
            state.trending = entries;
            (true, vec![])
        }
    }
}
