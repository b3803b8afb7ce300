//! HTTP catalog client for a TMDB-style API.
//!
//! Implements [`CatalogApi`] over `reqwest`. The bearer credential is
//! validated at construction time: a missing token is a hard configuration
//! failure before any network call is attempted, and every request carries a
//! bounded timeout so a stuck upstream surfaces as a transport error.

use crate::catalog::backend::{CatalogApi, CatalogPage};
use crate::catalog::request::{CatalogMode, CatalogRequest};
use crate::domain::error::{CinescopeError, Result};
use crate::domain::MovieDetail;
use crate::Settings;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::time::Duration;

/// Catalog client holding the shared HTTP connection pool.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl TmdbCatalog {
    /// Creates a catalog client from settings.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Config`] when the API credential is missing
    /// or malformed, and [`CinescopeError::Transport`] when the HTTP client
    /// cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self> {
        let token = settings
            .api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                CinescopeError::Config("catalog API token is missing".to_string())
            })?;

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| CinescopeError::Config(format!("invalid API token: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "catalog request rejected");
            return Err(CinescopeError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for TmdbCatalog {
    async fn fetch_page(&self, request: &CatalogRequest) -> Result<CatalogPage> {
        let page = request.page.to_string();
        let (url, params) = match &request.mode {
            CatalogMode::Search { query } => (
                format!("{}/search/movie", self.base_url),
                vec![("query", query.clone()), ("page", page)],
            ),
            CatalogMode::Discover => (
                format!("{}/discover/movie", self.base_url),
                vec![
                    ("sort_by", "popularity.desc".to_string()),
                    ("page", page),
                ],
            ),
        };

        let catalog_page: CatalogPage = self.get_json(url, &params).await?;

        tracing::debug!(
            mode = ?request.mode,
            page = request.page,
            result_count = catalog_page.results.len(),
            total_pages = catalog_page.total_pages,
            "catalog page fetched"
        );

        Ok(catalog_page)
    }

    async fn fetch_detail(&self, id: u64) -> Result<MovieDetail> {
        let url = format!("{}/movie/{id}", self.base_url);
        let params = [("append_to_response", "credits,videos".to_string())];

        let detail: MovieDetail = self.get_json(url, &params).await?;

        tracing::debug!(
            movie_id = id,
            cast_count = detail.credits.cast.len(),
            video_count = detail.videos.results.len(),
            "movie detail fetched"
        );

        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_an_immediate_config_error() {
        let settings = Settings {
            api_token: None,
            ..Settings::default()
        };

        match TmdbCatalog::new(&settings) {
            Err(CinescopeError::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_token_is_rejected_like_a_missing_one() {
        let settings = Settings {
            api_token: Some(String::new()),
            ..Settings::default()
        };

        assert!(matches!(
            TmdbCatalog::new(&settings),
            Err(CinescopeError::Config(_))
        ));
    }

    #[test]
    fn client_builds_with_a_token() {
        let settings = Settings {
            api_token: Some("test-token".to_string()),
            ..Settings::default()
        };

        let catalog = TmdbCatalog::new(&settings).unwrap();
        assert_eq!(catalog.base_url, "https://api.themoviedb.org/3");
    }
}
