//! Core domain types for the movie catalog.
//!
//! These types mirror the catalog API's wire format directly (the API returns
//! JSON with these field names), so they derive `Deserialize` and carry
//! `#[serde(default)]` on every field the upstream may omit. Summary lists and
//! detail records are replaced wholesale on each successful fetch, never
//! patched in place.

use serde::{Deserialize, Serialize};

/// Video host recognized for trailer playback.
pub const TRAILER_SITE: &str = "YouTube";

/// Video type string identifying a trailer entry.
pub const TRAILER_KIND: &str = "Trailer";

/// A single movie as returned by the search and discover endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Upstream catalog identifier, used to fetch the detail record.
    pub id: u64,

    #[serde(default)]
    pub title: String,

    /// Poster image path fragment, joined with the image base URL for display.
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Average rating on a 0-10 scale; displayed with one decimal.
    #[serde(default)]
    pub vote_average: f64,

    /// Release date as `YYYY-MM-DD`; may be absent or empty upstream.
    #[serde(default)]
    pub release_date: Option<String>,
}

impl MovieSummary {
    /// Returns the release year, derived from the leading component of the
    /// date string. `None` when the date is absent or empty.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }
}

/// Extended representation of one movie, fetched on demand when the user
/// opens a record. Includes cast and video listings embedded in the same
/// response via the detail endpoint's sub-resource option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetail {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub tagline: Option<String>,

    #[serde(default)]
    pub overview: Option<String>,

    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub backdrop_path: Option<String>,

    #[serde(default)]
    pub vote_average: f64,

    #[serde(default)]
    pub release_date: Option<String>,

    /// Runtime in minutes; absent for unreleased titles.
    #[serde(default)]
    pub runtime: Option<u32>,

    /// Production budget in US dollars; zero when unknown.
    #[serde(default)]
    pub budget: u64,

    /// Box office revenue in US dollars; zero when unknown.
    #[serde(default)]
    pub revenue: u64,

    #[serde(default)]
    pub genres: Vec<Genre>,

    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,

    /// Cast listing, embedded via the `credits` sub-resource.
    #[serde(default)]
    pub credits: Credits,

    /// Video listing, embedded via the `videos` sub-resource.
    #[serde(default)]
    pub videos: VideoList,
}

impl MovieDetail {
    /// Returns the release year, derived from the leading component of the
    /// date string.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    /// Returns the first video entry whose type is a trailer hosted on the
    /// known video site, if any.
    #[must_use]
    pub fn trailer(&self) -> Option<&Video> {
        self.videos
            .results
            .iter()
            .find(|video| video.kind == TRAILER_KIND && video.site == TRAILER_SITE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Cast container matching the `credits` embed shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: String,
    /// Portrait image path fragment; absent for many minor cast members.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Video container matching the `videos` embed shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    /// Host-specific video key (e.g. a YouTube video id).
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One entry of the aggregated trending list.
///
/// Owned entirely by the external trending store; the core treats the whole
/// record as read-only and replaces the list wholesale on each read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    /// The search term this entry aggregates.
    pub term: String,

    /// Representative poster URL recorded with the term's first report.
    #[serde(default)]
    pub poster_url: Option<String>,

    /// Aggregate search count; opaque ordering key, descending.
    #[serde(default)]
    pub count: u64,
}

fn release_year(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.split('-').next()).filter(|year| !year.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_takes_leading_date_component() {
        let movie = MovieSummary {
            id: 1,
            title: "Dune".to_string(),
            poster_path: None,
            vote_average: 7.8,
            release_date: Some("2021-10-22".to_string()),
        };
        assert_eq!(movie.release_year(), Some("2021"));
    }

    #[test]
    fn release_year_absent_when_date_missing_or_empty() {
        let mut movie = MovieSummary {
            id: 1,
            title: String::new(),
            poster_path: None,
            vote_average: 0.0,
            release_date: None,
        };
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some(String::new());
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn summary_deserializes_with_missing_optional_fields() {
        let movie: MovieSummary = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "");
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_date, None);
    }

    #[test]
    fn trailer_picks_first_matching_video() {
        let detail: MovieDetail = serde_json::from_str(
            r#"{
                "id": 438631,
                "title": "Dune",
                "videos": {
                    "results": [
                        {"key": "clip1", "site": "YouTube", "type": "Clip"},
                        {"key": "vim1", "site": "Vimeo", "type": "Trailer"},
                        {"key": "yt1", "site": "YouTube", "type": "Trailer"},
                        {"key": "yt2", "site": "YouTube", "type": "Trailer"}
                    ]
                }
            }"#,
        )
        .unwrap();

        let trailer = detail.trailer().unwrap();
        assert_eq!(trailer.key, "yt1");
    }

    #[test]
    fn trailer_absent_when_no_video_matches() {
        let detail: MovieDetail =
            serde_json::from_str(r#"{"id": 1, "title": "Obscure"}"#).unwrap();
        assert!(detail.trailer().is_none());
    }

    #[test]
    fn detail_deserializes_embedded_credits_and_videos() {
        let detail: MovieDetail = serde_json::from_str(
            r#"{
                "id": 438631,
                "title": "Dune",
                "tagline": "It begins.",
                "runtime": 155,
                "budget": 165000000,
                "revenue": 407573628,
                "genres": [{"id": 878, "name": "Science Fiction"}],
                "production_companies": [{"id": 923, "name": "Legendary Pictures"}],
                "credits": {
                    "cast": [
                        {"id": 1, "name": "Timothée Chalamet", "character": "Paul Atreides"}
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(detail.runtime, Some(155));
        assert_eq!(detail.genres.len(), 1);
        assert_eq!(detail.credits.cast[0].character, "Paul Atreides");
        assert_eq!(detail.credits.cast[0].profile_path, None);
        assert!(detail.videos.results.is_empty());
    }
}
