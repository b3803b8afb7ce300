//! Cinescope: the asynchronous fetch-orchestration core of a movie catalog
//! browser.
//!
//! Cinescope turns noisy, rapidly-changing user input (keystrokes, page
//! clicks) into a small number of well-ordered catalog requests, while
//! keeping search, pagination, and detail-view state mutually consistent
//! under concurrency. It provides:
//! - Debounced search over a remote catalog with paginated discover fallback
//! - Generation-stamped fetch ordering: a response that lost the race to a
//!   newer request is silently discarded, never displayed
//! - An independent on-demand detail loader with embedded cast and videos
//! - Best-effort trending aggregation reported to an external store
//! - A pure view-state snapshot as the entire presentation surface
//!
//! # Architecture
//!
//! The crate follows a unidirectional event/action flow on one logical task:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation boundary (EngineHandle)               │  ← inputs + snapshots
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Orchestrator (orchestrator/)                       │  ← select! loop
//! │  - Debouncer (500 ms quiet period)                  │
//! │  - Spawned fetch tasks → outcome messages           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application layer (app/)                           │  ← state machine
//! │  - Event handling, generation checks                │
//! │  - Action dispatching                               │
//! │  - Snapshot computation (view/)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                            │
//! ┌───────────────────┐     ┌───────────────────┐
//! │ Catalog (catalog/)│     │ Trending          │
//! │ - Request builder │     │ (trending/)       │
//! │ - CatalogApi seam │     │ - TrendingStore   │
//! │ - HTTP client     │     │   seam + client   │
//! └───────────────────┘     └───────────────────┘
//!         │                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & observability (domain/, observability/)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one direction: input → debounced query → request → response →
//! state → snapshot. Trending reporting branches off a successful search
//! response and never feeds back into the request path.
//!
//! # Example
//!
//! ```rust,no_run
//! use cinescope::{Engine, Settings};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> cinescope::Result<()> {
//!     let settings = Settings::load()?;
//!     cinescope::observability::init_tracing(&settings);
//!
//!     let (engine, handle) = Engine::from_settings(&settings)?;
//!     tokio::spawn(engine.run());
//!
//!     handle.set_search_term("dune").await?;
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!     println!("{:#?}", handle.snapshot().results);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod observability;
pub mod orchestrator;
pub mod trending;
pub mod view;

pub use app::{handle_event, Action, AppState, Event, FetchPhase};
pub use domain::{CinescopeError, MovieDetail, MovieSummary, Result, TrendingEntry};
pub use orchestrator::{Engine, EngineHandle};
pub use view::Snapshot;

use serde::Deserialize;

/// Runtime configuration for the orchestration core.
///
/// Loaded from the `CINESCOPE_`-prefixed environment plus an optional
/// `cinescope.toml` file next to the working directory. Every field has a
/// default except the catalog credential, whose absence is a hard
/// configuration failure at client construction time.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Bearer credential for the catalog API. Required before any catalog
    /// call is attempted.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Catalog API root.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Image host root used to compose poster, portrait, and backdrop URLs.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Trending store root. Absent means the trending section is disabled.
    #[serde(default)]
    pub trending_base_url: Option<String>,

    /// Quiet period applied to search input, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Per-request network timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Tracing filter directive, e.g. `debug` or `cinescope=trace`.
    #[serde(default)]
    pub trace_level: Option<String>,
}

fn default_api_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base_url: default_api_base_url(),
            image_base_url: default_image_base_url(),
            trending_base_url: None,
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            trace_level: None,
        }
    }
}

impl Settings {
    /// Loads settings from the environment and the optional config file.
    ///
    /// # Errors
    ///
    /// Returns [`CinescopeError::Config`] when a source cannot be read or a
    /// value fails to parse. A missing credential is *not* an error here; it
    /// is rejected when the catalog client is constructed, so read-only
    /// usage without a token can still load settings.
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("cinescope").required(false))
            .add_source(config::Environment::with_prefix("CINESCOPE"))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| CinescopeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_everything_but_the_credential() {
        let settings = Settings::default();
        assert_eq!(settings.api_token, None);
        assert_eq!(settings.api_base_url, "https://api.themoviedb.org/3");
        assert_eq!(settings.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(settings.debounce_ms, 500);
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.trending_base_url, None);
    }

    #[test]
    fn settings_deserialize_with_partial_input() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_token": "t", "debounce_ms": 250}"#).unwrap();
        assert_eq!(settings.api_token.as_deref(), Some("t"));
        assert_eq!(settings.debounce_ms, 250);
        assert_eq!(settings.request_timeout_secs, 10);
    }
}
