//! Application layer: state container, event handling, and actions.

pub mod actions;
pub mod handler;
pub mod phase;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, CATALOG_ERROR_MESSAGE, DETAIL_ERROR_MESSAGE};
pub use phase::FetchPhase;
pub use state::AppState;
