//! Error types for the cinescope core.
//!
//! This module defines the centralized error type [`CinescopeError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Stale catalog responses are deliberately *not* an error variant: a response
//! that lost the generation race is silently discarded by the event handler
//! and never reaches user-facing error handling.

use thiserror::Error;

/// The main error type for cinescope operations.
///
/// This enum consolidates all error conditions that can occur in the
/// orchestration core, from missing configuration to transport failures.
/// The presentation layer never sees these variants directly; the event
/// handler maps failures to single short display strings.
#[derive(Debug, Error)]
pub enum CinescopeError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when a required value such as the catalog API credential is
    /// absent. Fatal to any fetch: no network call is attempted, and the
    /// failure is surfaced immediately with no retry.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network transport failed.
    ///
    /// Wraps connection errors, timeouts, and response decoding failures from
    /// the HTTP client. Surfaced to the user as a generic retryable message;
    /// never retried automatically.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status code.
    #[error("API error: status {status}")]
    Api {
        /// HTTP status code of the rejected response.
        status: u16,
    },

    /// Communication with the orchestration engine failed.
    ///
    /// Occurs when the engine task has shut down and its input channel is
    /// closed while a caller still holds a handle.
    #[error("Engine error: {0}")]
    Engine(String),
}

/// A specialized `Result` type for cinescope operations.
pub type Result<T> = std::result::Result<T, CinescopeError>;
