//! External trending store: best-effort search aggregation.

pub mod backend;
pub mod rest;

pub use backend::TrendingStore;
pub use rest::RestTrendingStore;
