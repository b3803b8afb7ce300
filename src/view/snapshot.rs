//! Render-ready view model types.
//!
//! A [`Snapshot`] is the single consistent picture of client state exposed to
//! the presentation layer. It is computed on demand from `AppState` and
//! pre-formats everything a renderer needs: ratings to one decimal, composed
//! image URLs, runtime and currency strings, and the display precedence rules
//! (loading over stale error or results, error over the empty placeholder,
//! pagination only when more than one page exists).

/// Maximum cast members surfaced in the detail view.
pub const MAX_CAST: usize = 10;

/// Poster size used for result cards and the detail poster.
pub const POSTER_SIZE: &str = "w500";

/// Image size used for cast portraits.
pub const PROFILE_SIZE: &str = "w185";

/// Image size used for the detail backdrop.
pub const BACKDROP_SIZE: &str = "original";

/// The complete render-ready state snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Raw search term as typed, for echoing in the input field.
    pub search_term: String,

    /// The catalog results section.
    pub results: ResultsView,

    /// Current trending list; empty when the store is unavailable.
    pub trending: Vec<TrendingCard>,

    /// Open detail view, present only after a successful detail fetch.
    pub detail: Option<DetailView>,

    /// True while a detail fetch is in flight.
    pub detail_loading: bool,

    /// Detail-specific error message, isolated from the catalog error.
    pub detail_error: Option<String>,
}

/// The catalog results section with display precedence already applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    /// A catalog fetch is in flight.
    Loading,

    /// The last catalog fetch failed.
    Error(String),

    /// The last fetch succeeded with no results (or nothing loaded yet).
    #[default]
    Empty,

    /// Results ready for display.
    List {
        cards: Vec<MovieCard>,
        /// Present only when there is more than one page.
        pagination: Option<Pagination>,
    },
}

/// One movie result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    /// Fully composed poster URL, absent when the record has no poster.
    pub poster_url: Option<String>,
    /// Rating formatted to one decimal.
    pub rating: String,
    pub year: Option<String>,
}

/// Pagination bounds for the controls row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

/// One entry of the trending section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingCard {
    /// 1-based position in the top list.
    pub rank: usize,
    pub term: String,
    pub poster_url: Option<String>,
}

/// The open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    /// Rating formatted to one decimal.
    pub rating: String,
    pub year: Option<String>,
    /// Runtime formatted as `XhYm`.
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    /// Budget as a USD string; absent when unknown (zero upstream).
    pub budget: Option<String>,
    /// Revenue as a USD string; absent when unknown (zero upstream).
    pub revenue: Option<String>,
    /// Production companies joined with commas.
    pub production: Option<String>,
    /// Up to [`MAX_CAST`] cast members.
    pub cast: Vec<CastCard>,
    /// Embeddable trailer URL on the known video host.
    pub trailer_url: Option<String>,
}

/// One cast member of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastCard {
    pub name: String,
    pub character: String,
    pub photo_url: Option<String>,
}

/// Formats a runtime in minutes as `XhYm`.
#[must_use]
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Formats a whole-dollar amount as USD with thousands separators.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${grouped}")
}

/// Formats a 0-10 rating to one decimal of precision.
#[must_use]
pub fn format_rating(vote_average: f64) -> String {
    format!("{vote_average:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_splits_into_hours_and_minutes() {
        assert_eq!(format_runtime(155), "2h 35m");
        assert_eq!(format_runtime(60), "1h 0m");
        assert_eq!(format_runtime(45), "0h 45m");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1000), "$1,000");
        assert_eq!(format_currency(165_000_000), "$165,000,000");
    }

    #[test]
    fn rating_keeps_one_decimal() {
        assert_eq!(format_rating(7.84), "7.8");
        assert_eq!(format_rating(7.0), "7.0");
        assert_eq!(format_rating(0.0), "0.0");
    }
}
