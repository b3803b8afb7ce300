//! HTTP client for the trending store's REST surface.

use crate::domain::error::{CinescopeError, Result};
use crate::domain::{MovieSummary, TrendingEntry};
use crate::trending::backend::TrendingStore;
use crate::Settings;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Poster size requested for representative trending images.
const POSTER_SIZE: &str = "w500";

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    term: &'a str,
    poster_url: Option<String>,
}

/// Trending store client.
///
/// Constructed only when a store base URL is configured; without one the
/// trending section is simply absent.
#[derive(Debug, Clone)]
pub struct RestTrendingStore {
    http: reqwest::Client,
    base_url: String,
    image_base_url: String,
}

impl RestTrendingStore {
    /// Creates a trending store client from settings.
    ///
    /// Returns `Ok(None)` when no store base URL is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn from_settings(settings: &Settings) -> Result<Option<Self>> {
        let Some(base_url) = settings.trending_base_url.as_deref() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Some(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            image_base_url: settings.image_base_url.trim_end_matches('/').to_string(),
        }))
    }

    fn poster_url(&self, top_result: &MovieSummary) -> Option<String> {
        top_result
            .poster_path
            .as_deref()
            .map(|path| format!("{}/{}{}", self.image_base_url, POSTER_SIZE, path))
    }
}

#[async_trait]
impl TrendingStore for RestTrendingStore {
    async fn record_search(&self, term: &str, top_result: &MovieSummary) -> Result<()> {
        let report = SearchReport {
            term,
            poster_url: self.poster_url(top_result),
        };

        let response = self
            .http
            .post(format!("{}/searches", self.base_url))
            .json(&report)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CinescopeError::Api {
                status: status.as_u16(),
            });
        }

        tracing::debug!(term = %term, "search occurrence reported");
        Ok(())
    }

    async fn top_searches(&self, limit: u32) -> Result<Vec<TrendingEntry>> {
        let response = self
            .http
            .get(format!("{}/searches/top", self.base_url))
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CinescopeError::Api {
                status: status.as_u16(),
            });
        }

        let entries: Vec<TrendingEntry> = response.json().await?;
        tracing::debug!(entry_count = entries.len(), "trending list fetched");
        Ok(entries)
    }
}
