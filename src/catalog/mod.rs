//! Remote movie catalog: request construction and the API client seam.

pub mod backend;
pub mod request;
pub mod tmdb;

pub use backend::{CatalogApi, CatalogPage};
pub use request::{build_request, clamp_total_pages, CatalogMode, CatalogRequest, MAX_PAGE};
pub use tmdb::TmdbCatalog;
