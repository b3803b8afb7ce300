//! Core domain types shared across the crate.

pub mod error;
pub mod movie;

pub use error::{CinescopeError, Result};
pub use movie::{
    CastMember, Credits, Genre, MovieDetail, MovieSummary, ProductionCompany, TrendingEntry,
    Video, VideoList,
};
