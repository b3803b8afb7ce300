//! Message types between the engine loop and its collaborators.
//!
//! Inputs cross the presentation boundary into the engine; outcomes come
//! back from spawned fetch tasks. Both are transported over channels and
//! converted to [`Event`]s inside the engine loop, so all state mutation
//! stays on one logical thread.

use crate::app::Event;
use crate::catalog::CatalogPage;
use crate::domain::{MovieDetail, TrendingEntry};

/// Input actions accepted from the presentation layer.
///
/// This is the core's entire input surface: one variant per exposed action.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineInput {
    /// The search field changed (one keystroke's worth of text).
    SetSearchTerm(String),

    /// A pagination control was activated.
    ChangePage(u32),

    /// A result card was opened.
    SelectRecord(u64),

    /// The detail view was dismissed.
    CloseDetail,
}

/// Completion message from a spawned fetch task.
///
/// Error payloads are internal descriptions used for logging; the event
/// handler substitutes the user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// A catalog request finished, still stamped with its generation.
    Catalog {
        generation: u64,
        outcome: Result<CatalogPage, String>,
    },

    /// A detail request finished for the given record id.
    Detail {
        id: u64,
        outcome: Result<MovieDetail, String>,
    },

    /// The trending store answered a top-list read. Read failures never
    /// produce an outcome; they are logged and dropped at the task.
    Trending { entries: Vec<TrendingEntry> },
}

impl FetchOutcome {
    /// Converts the outcome into the handler event it corresponds to.
    #[must_use]
    pub fn into_event(self) -> Event {
        match self {
            Self::Catalog { generation, outcome } => Event::CatalogFetched { generation, outcome },
            Self::Detail { id, outcome } => Event::DetailFetched { id, outcome },
            Self::Trending { entries } => Event::TrendingLoaded(entries),
        }
    }
}
