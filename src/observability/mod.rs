//! Tracing setup for the orchestration core.

pub mod init;

pub use init::init_tracing;
