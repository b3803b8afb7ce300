//! Fetch cycle state machine.
//!
//! Both the catalog cycle and the detail cycle step through the same
//! `Idle → Loading → {Success, Error}` shape, but each owns an independent
//! instance: a detail fetch must not disturb an in-progress catalog fetch or
//! vice versa.

/// State of one asynchronous fetch cycle.
///
/// `Success` and `Error` are terminal per request; a new trigger always
/// restarts the cycle at `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch has been issued yet.
    #[default]
    Idle,

    /// A request is in flight; takes display precedence over stale error or
    /// result content.
    Loading,

    /// The most recent request completed and its payload is current.
    Success,

    /// The most recent request failed with a user-facing message.
    Error(String),
}

impl FetchPhase {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the user-facing error message, if the cycle is in error.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
