//! Application state container and snapshot computation.
//!
//! This module defines [`AppState`], the single explicit state container for
//! the orchestration core. It is mutated only by the event handler in
//! response to input and fetch-outcome events; no other component touches it
//! directly. The presentation layer sees state exclusively through
//! [`AppState::compute_snapshot`], a pure read-only composition.
//!
//! # State components
//!
//! - **Search**: raw term (per keystroke) and the debounced query that
//!   actually drives requests
//! - **Pagination**: current page and the clamped upstream page count
//! - **Catalog cycle**: phase, result list, and the request generation
//!   counter used to discard stale responses
//! - **Detail cycle**: phase, pending record id, and the open detail record
//! - **Trending**: read-only top list owned by the external store

use crate::app::phase::FetchPhase;
use crate::app::Action;
use crate::catalog::{build_request, clamp_total_pages, CatalogPage};
use crate::domain::{MovieDetail, MovieSummary, TrendingEntry};
use crate::view::snapshot::{
    format_currency, format_rating, format_runtime, CastCard, DetailView, MovieCard, Pagination,
    ResultsView, Snapshot, TrendingCard, BACKDROP_SIZE, MAX_CAST, POSTER_SIZE, PROFILE_SIZE,
};

/// Central application state container.
///
/// Holds search, pagination, both fetch cycles, and the trending list.
/// Lives for the duration of the session; result lists and the detail record
/// are replaced wholesale on each successful fetch.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw search term, mutated on every keystroke. Display-only until the
    /// debouncer settles.
    pub search_term: String,

    /// Debounced copy of the search term; the only value that drives catalog
    /// requests. Empty means discover mode.
    pub query: String,

    /// Current page, always >= 1. Reset to 1 whenever the debounced query
    /// changes; never exceeds `total_pages` once known.
    pub current_page: u32,

    /// Upstream page count, clamped to the catalog's 500-page limit. Zero
    /// until the first successful fetch.
    pub total_pages: u32,

    /// Catalog fetch cycle state.
    pub catalog_phase: FetchPhase,

    /// Current result list. Replaced wholesale on success, cleared on failure.
    pub movies: Vec<MovieSummary>,

    /// Generation of the most recently issued catalog request.
    ///
    /// Monotonically increasing. A response whose generation no longer
    /// matches this value lost the race to a later request and is discarded.
    pub generation: u64,

    /// Detail fetch cycle state, independent of the catalog cycle.
    pub detail_phase: FetchPhase,

    /// Record id of the detail fetch currently in flight, if any. Outcomes
    /// for any other id are discarded; only one detail fetch is live at a
    /// time.
    pub pending_detail: Option<u64>,

    /// The open detail record. `Some` means the detail view is open; closing
    /// clears it unconditionally.
    pub detail: Option<MovieDetail>,

    /// Current trending list, replaced wholesale on each successful read.
    pub trending: Vec<TrendingEntry>,

    image_base_url: String,
}

impl AppState {
    /// Creates a fresh session state.
    ///
    /// `image_base_url` is the catalog's image host root, used to compose
    /// poster, portrait, and backdrop URLs in snapshots.
    #[must_use]
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            search_term: String::new(),
            query: String::new(),
            current_page: 1,
            total_pages: 0,
            catalog_phase: FetchPhase::Idle,
            movies: Vec::new(),
            generation: 0,
            detail_phase: FetchPhase::Idle,
            pending_detail: None,
            detail: None,
            trending: Vec::new(),
            image_base_url: image_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Starts a new catalog fetch cycle for the current `(query, page)` pair.
    ///
    /// Stamps a fresh generation, transitions to `Loading` (clearing any
    /// prior error), and returns the fetch action to execute.
    pub fn begin_catalog_fetch(&mut self) -> Action {
        self.generation += 1;
        self.catalog_phase = FetchPhase::Loading;

        let request = build_request(&self.query, self.current_page);
        tracing::debug!(
            generation = self.generation,
            mode = ?request.mode,
            page = request.page,
            "catalog fetch issued"
        );

        Action::FetchCatalog {
            request,
            generation: self.generation,
        }
    }

    /// Whether a response generation still matches the latest issued request.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Applies a successful catalog response.
    ///
    /// Replaces the result list, stores the clamped page count, and keeps the
    /// current page within the now-known bounds.
    pub fn apply_catalog_success(&mut self, page: CatalogPage) {
        self.movies = page.results;
        self.total_pages = clamp_total_pages(page.total_pages);
        if self.total_pages > 0 && self.current_page > self.total_pages {
            self.current_page = self.total_pages;
        }
        self.catalog_phase = FetchPhase::Success;
    }

    /// Applies a failed catalog response: the result list is cleared and the
    /// cycle carries the user-facing message.
    pub fn apply_catalog_failure(&mut self, message: String) {
        self.movies.clear();
        self.catalog_phase = FetchPhase::Error(message);
    }

    /// Starts a detail fetch cycle for one record.
    ///
    /// A newer selection supersedes any fetch already in flight; the
    /// superseded outcome is discarded when it arrives.
    pub fn begin_detail_fetch(&mut self, id: u64) -> Action {
        self.detail_phase = FetchPhase::Loading;
        self.pending_detail = Some(id);
        Action::FetchDetail { id }
    }

    /// Closes the detail view, clearing the stored record unconditionally.
    ///
    /// Also drops the pending fetch key so a late-arriving detail response
    /// cannot reopen the view.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.pending_detail = None;
        self.detail_phase = FetchPhase::Idle;
    }

    /// Produces the render-ready snapshot for the presentation layer.
    ///
    /// Pure composition over current state. Precedence: a loading indicator
    /// wins over stale error or result content, an error message wins over
    /// the empty placeholder, and pagination appears only when more than one
    /// page exists.
    #[must_use]
    pub fn compute_snapshot(&self) -> Snapshot {
        let results = if self.catalog_phase.is_loading() {
            ResultsView::Loading
        } else if let Some(message) = self.catalog_phase.error_message() {
            ResultsView::Error(message.to_string())
        } else if self.movies.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::List {
                cards: self.movies.iter().map(|movie| self.movie_card(movie)).collect(),
                pagination: (self.total_pages > 1).then_some(Pagination {
                    current_page: self.current_page,
                    total_pages: self.total_pages,
                }),
            }
        };

        let trending = self
            .trending
            .iter()
            .enumerate()
            .map(|(index, entry)| TrendingCard {
                rank: index + 1,
                term: entry.term.clone(),
                poster_url: entry.poster_url.clone(),
            })
            .collect();

        Snapshot {
            search_term: self.search_term.clone(),
            results,
            trending,
            detail: self.detail.as_ref().map(|detail| self.detail_view(detail)),
            detail_loading: self.detail_phase.is_loading(),
            detail_error: self.detail_phase.error_message().map(String::from),
        }
    }

    fn image_url(&self, size: &str, path: &str) -> String {
        format!("{}/{size}{path}", self.image_base_url)
    }

    fn movie_card(&self, movie: &MovieSummary) -> MovieCard {
        MovieCard {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: movie
                .poster_path
                .as_deref()
                .map(|path| self.image_url(POSTER_SIZE, path)),
            rating: format_rating(movie.vote_average),
            year: movie.release_year().map(String::from),
        }
    }

    fn detail_view(&self, detail: &MovieDetail) -> DetailView {
        let cast = detail
            .credits
            .cast
            .iter()
            .take(MAX_CAST)
            .map(|member| CastCard {
                name: member.name.clone(),
                character: member.character.clone(),
                photo_url: member
                    .profile_path
                    .as_deref()
                    .map(|path| self.image_url(PROFILE_SIZE, path)),
            })
            .collect();

        let production = if detail.production_companies.is_empty() {
            None
        } else {
            Some(
                detail
                    .production_companies
                    .iter()
                    .map(|company| company.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };

        DetailView {
            id: detail.id,
            title: detail.title.clone(),
            tagline: detail.tagline.clone(),
            overview: detail.overview.clone(),
            poster_url: detail
                .poster_path
                .as_deref()
                .map(|path| self.image_url(POSTER_SIZE, path)),
            backdrop_url: detail
                .backdrop_path
                .as_deref()
                .map(|path| self.image_url(BACKDROP_SIZE, path)),
            rating: format_rating(detail.vote_average),
            year: detail.release_year().map(String::from),
            runtime: detail.runtime.map(format_runtime),
            genres: detail.genres.iter().map(|genre| genre.name.clone()).collect(),
            budget: (detail.budget > 0).then(|| format_currency(detail.budget)),
            revenue: (detail.revenue > 0).then(|| format_currency(detail.revenue)),
            production,
            cast,
            trailer_url: detail
                .trailer()
                .map(|video| format!("https://www.youtube.com/embed/{}", video.key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::{Credits, Video, VideoList};

    fn sample_movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/{id}.jpg")),
            vote_average: 7.84,
            release_date: Some("2021-10-22".to_string()),
        }
    }

    #[test]
    fn loading_takes_precedence_over_stale_results() {
        let mut state = AppState::new("https://img.example/t/p");
        state.movies = vec![sample_movie(1, "Dune")];
        state.catalog_phase = FetchPhase::Loading;

        assert_eq!(state.compute_snapshot().results, ResultsView::Loading);
    }

    #[test]
    fn error_takes_precedence_over_empty_placeholder() {
        let mut state = AppState::new("https://img.example/t/p");
        state.catalog_phase = FetchPhase::Error("boom".to_string());

        assert_eq!(
            state.compute_snapshot().results,
            ResultsView::Error("boom".to_string())
        );
    }

    #[test]
    fn pagination_renders_only_beyond_one_page() {
        let mut state = AppState::new("https://img.example/t/p");
        state.movies = vec![sample_movie(1, "Dune")];
        state.catalog_phase = FetchPhase::Success;
        state.total_pages = 1;

        match state.compute_snapshot().results {
            ResultsView::List { pagination, .. } => assert!(pagination.is_none()),
            other => panic!("expected list, got {other:?}"),
        }

        state.total_pages = 12;
        match state.compute_snapshot().results {
            ResultsView::List { pagination, .. } => {
                let pagination = pagination.unwrap();
                assert_eq!(pagination.current_page, 1);
                assert_eq!(pagination.total_pages, 12);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn cards_compose_poster_urls_and_format_fields() {
        let mut state = AppState::new("https://img.example/t/p/");
        state.movies = vec![sample_movie(7, "Dune")];
        state.catalog_phase = FetchPhase::Success;

        match state.compute_snapshot().results {
            ResultsView::List { cards, .. } => {
                assert_eq!(
                    cards[0].poster_url.as_deref(),
                    Some("https://img.example/t/p/w500/7.jpg")
                );
                assert_eq!(cards[0].rating, "7.8");
                assert_eq!(cards[0].year.as_deref(), Some("2021"));
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn success_clamps_current_page_into_known_bounds() {
        let mut state = AppState::new("https://img.example/t/p");
        state.current_page = 37;
        state.apply_catalog_success(CatalogPage {
            page: 37,
            results: vec![],
            total_pages: 12,
            total_results: 240,
        });

        assert_eq!(state.total_pages, 12);
        assert_eq!(state.current_page, 12);
    }

    #[test]
    fn detail_view_truncates_cast_and_picks_trailer() {
        let mut state = AppState::new("https://img.example/t/p");
        let cast = (0..15)
            .map(|i| crate::domain::CastMember {
                id: i,
                name: format!("Actor {i}"),
                character: format!("Role {i}"),
                profile_path: None,
            })
            .collect();

        state.detail = Some(MovieDetail {
            id: 438_631,
            title: "Dune".to_string(),
            tagline: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: 7.8,
            release_date: None,
            runtime: Some(155),
            budget: 165_000_000,
            revenue: 0,
            genres: vec![],
            production_companies: vec![],
            credits: Credits { cast },
            videos: VideoList {
                results: vec![Video {
                    key: "abc123".to_string(),
                    site: "YouTube".to_string(),
                    kind: "Trailer".to_string(),
                }],
            },
        });

        let detail = state.compute_snapshot().detail.unwrap();
        assert_eq!(detail.cast.len(), MAX_CAST);
        assert_eq!(detail.runtime.as_deref(), Some("2h 35m"));
        assert_eq!(detail.budget.as_deref(), Some("$165,000,000"));
        assert_eq!(detail.revenue, None);
        assert_eq!(
            detail.trailer_url.as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }
}
