//! Trending store abstraction.
//!
//! The trending store is an external key-aggregated service tracking search
//! frequency per query. The core never reads or writes raw counts; it only
//! reports occurrences and reads back the ordered top list. Both operations
//! are best-effort: failures are logged and swallowed, never surfaced.

use crate::domain::error::Result;
use crate::domain::{MovieSummary, TrendingEntry};
use async_trait::async_trait;

/// Abstraction over the external search-aggregation store.
///
/// # Implementations
///
/// - [`RestTrendingStore`](crate::trending::RestTrendingStore): HTTP client
///   against the store's REST surface (default)
#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Records one occurrence of a successful search.
    ///
    /// The store increments the aggregate count for `term` and keeps the top
    /// result's poster as the representative image. Fire-and-forget from the
    /// orchestrator's perspective.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; callers log and drop it.
    async fn record_search(&self, term: &str, top_result: &MovieSummary) -> Result<()>;

    /// Reads the current top entries, ordered by count descending.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; callers treat the trending list
    /// as simply absent.
    async fn top_searches(&self, limit: u32) -> Result<Vec<TrendingEntry>>;
}
