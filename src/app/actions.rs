//! Actions representing side effects to be executed by the engine.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or fetch outcomes.
//! Actions bridge pure state transitions and effectful operations: every
//! network call in the crate is requested through an action, never performed
//! inside the handler itself.
//!
//! The search-success → trending-report coupling is expressed here as an
//! explicit [`Action::ReportSearch`] emitted alongside the state update, so
//! the catalog cycle stays testable independent of the reporting side effect.

use crate::catalog::CatalogRequest;
use crate::domain::MovieSummary;

/// Commands representing side effects to be executed by the engine.
///
/// Produced by the event handler, executed by the orchestration engine. Each
/// fetch action is answered later by a corresponding outcome event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Issues one catalog request.
    ///
    /// The generation stamp identifies this request as the most recently
    /// issued one; responses carrying an older generation are discarded.
    FetchCatalog {
        /// Fully-specified request (endpoint mode and clamped page).
        request: CatalogRequest,
        /// Generation stamped on this request.
        generation: u64,
    },

    /// Fetches the extended representation of one movie.
    FetchDetail {
        /// Upstream catalog identifier of the selected record.
        id: u64,
    },

    /// Reports a successful search to the trending store.
    ///
    /// Fire-and-forget: emitted at most once per successful search response,
    /// only when the query is non-empty and at least one result was returned.
    ReportSearch {
        /// The debounced query that produced the results.
        term: String,
        /// Top result of the search, kept as the representative record.
        top_result: MovieSummary,
    },

    /// Reads the current top trending list from the store.
    LoadTrending,
}
