//! Catalog API abstraction.
//!
//! This module defines the [`CatalogApi`] trait that abstracts over the remote
//! movie catalog. The orchestration engine only depends on this seam, which
//! keeps the fetch cycle testable with scripted in-memory implementations.
//!
//! The trait is minimal by design: one operation per consumed endpoint, not a
//! generic HTTP wrapper.

use crate::catalog::request::CatalogRequest;
use crate::domain::error::Result;
use crate::domain::{MovieDetail, MovieSummary};
use async_trait::async_trait;
use serde::Deserialize;

/// One page of catalog results as returned by the search and discover
/// endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogPage {
    /// Page number echoed by the upstream.
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub results: Vec<MovieSummary>,

    /// Upstream total-page count, *unclamped*. The event handler clamps it
    /// before it reaches state.
    #[serde(default)]
    pub total_pages: u32,

    #[serde(default)]
    pub total_results: u64,
}

/// Abstraction over the remote movie catalog.
///
/// Implementations must be cheap to share across spawned fetch tasks.
///
/// # Implementations
///
/// - [`TmdbCatalog`](crate::catalog::TmdbCatalog): HTTP client against a
///   TMDB-style API (default)
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches one page of catalog results for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or a non-success
    /// upstream status.
    async fn fetch_page(&self, request: &CatalogRequest) -> Result<CatalogPage>;

    /// Fetches the extended representation of one movie, with cast and video
    /// listings embedded in the same response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or a non-success
    /// upstream status.
    async fn fetch_detail(&self, id: u64) -> Result<MovieDetail>;
}
