//! Pure catalog request construction.
//!
//! Maps a `(query, page)` pair to a fully-specified catalog request. This is
//! the only place that decides between search and discover mode and the only
//! place that clamps page numbers, so the rest of the pipeline can treat a
//! [`CatalogRequest`] as already valid.

/// Hard upper bound on page numbers imposed by the upstream catalog.
pub const MAX_PAGE: u32 = 500;

/// Which catalog endpoint a request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMode {
    /// Text search with the literal user query.
    Search {
        /// The debounced, non-empty search query.
        query: String,
    },

    /// Popularity-ordered listing, used when no query is present.
    Discover,
}

/// A fully-specified catalog request ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub mode: CatalogMode,
    /// Requested page, already clamped to `1..=MAX_PAGE`.
    pub page: u32,
}

/// Builds a catalog request from the debounced query and requested page.
///
/// A non-empty query selects search mode with the literal query; an empty
/// query selects discover mode sorted by descending popularity. The page is
/// clamped into `1..=MAX_PAGE`.
#[must_use]
pub fn build_request(query: &str, page: u32) -> CatalogRequest {
    let mode = if query.is_empty() {
        CatalogMode::Discover
    } else {
        CatalogMode::Search {
            query: query.to_string(),
        }
    };

    CatalogRequest {
        mode,
        page: page.clamp(1, MAX_PAGE),
    }
}

/// Clamps an upstream total-page count to the catalog's hard limit.
#[must_use]
pub fn clamp_total_pages(upstream: u32) -> u32 {
    upstream.min(MAX_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_query_selects_search_mode() {
        let request = build_request("dune", 1);
        assert_eq!(
            request.mode,
            CatalogMode::Search {
                query: "dune".to_string()
            }
        );
        assert_eq!(request.page, 1);
    }

    #[test]
    fn empty_query_selects_discover_mode() {
        let request = build_request("", 1);
        assert_eq!(request.mode, CatalogMode::Discover);
    }

    #[test]
    fn page_is_clamped_to_bounds() {
        assert_eq!(build_request("", 0).page, 1);
        assert_eq!(build_request("", 501).page, MAX_PAGE);
        assert_eq!(build_request("dune", 37).page, 37);
    }

    #[test]
    fn total_pages_never_exceed_limit() {
        assert_eq!(clamp_total_pages(12), 12);
        assert_eq!(clamp_total_pages(500), 500);
        assert_eq!(clamp_total_pages(33753), 500);
    }
}
