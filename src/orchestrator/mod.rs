//! Asynchronous fetch orchestration: debouncing, the engine loop, and its
//! message protocol.

pub mod debounce;
pub mod engine;
pub mod messages;


pub use debounce::Debouncer;
pub use engine::{Engine, EngineHandle};
pub use messages::{EngineInput, FetchOutcome};
