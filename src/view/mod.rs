//! Presentation boundary: render-ready snapshot types.

pub mod snapshot;

pub use snapshot::{
    CastCard, DetailView, MovieCard, Pagination, ResultsView, Snapshot, TrendingCard,
};
