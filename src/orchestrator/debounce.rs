//! Quiet-period debouncing for fast-changing input values.
//!
//! The debouncer is the sole gate between raw keystrokes and the rest of the
//! fetch pipeline: it bounds request volume under fast typing by emitting a
//! value only after no newer value has arrived for the quiet period.

use std::time::Duration;
use tokio::time::Instant;

/// Converts a stream of pushed values into settled emissions.
///
/// [`push`](Self::push) replaces any pending value and re-arms the deadline;
/// [`settled`](Self::settled) resolves with the *latest* value once the quiet
/// period elapses with no newer push. Values superseded within the window are
/// never emitted.
///
/// `settled` is cancel-safe: the deadline and pending value live in the
/// struct, not the future, so it can be raced inside `tokio::select!` and
/// polled again after losing.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    slot: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            slot: None,
            deadline: None,
        }
    }

    /// Accepts a new value, superseding any pending one and restarting the
    /// quiet period.
    pub fn push(&mut self, value: T) {
        self.slot = Some(value);
        self.deadline = Some(Instant::now() + self.quiet);
    }

    /// Resolves with the pending value once the quiet period has elapsed.
    ///
    /// Pends forever while nothing is armed, which makes it safe to keep as
    /// a permanent `select!` branch.
    pub async fn settled(&mut self) -> T {
        let Some(deadline) = self.deadline else {
            return std::future::pending().await;
        };

        tokio::time::sleep_until(deadline).await;
        self.deadline = None;

        match self.slot.take() {
            Some(value) => value,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    const QUIET: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn emits_the_latest_value_after_the_quiet_period() {
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.push("d");
        advance(Duration::from_millis(100)).await;
        debouncer.push("du");
        advance(Duration::from_millis(100)).await;
        debouncer.push("dune");

        let settled = debouncer.settled().await;
        assert_eq!(settled, "dune");
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_emit_before_the_quiet_period() {
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.push("dune");

        advance(Duration::from_millis(499)).await;
        let early = timeout(Duration::from_millis(0), debouncer.settled()).await;
        assert!(early.is_err());

        advance(Duration::from_millis(1)).await;
        let settled = timeout(Duration::from_millis(0), debouncer.settled()).await;
        assert_eq!(settled.unwrap(), "dune");
    }

    #[tokio::test(start_paused = true)]
    async fn emits_once_per_quiet_interval() {
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.push(1);

        advance(QUIET).await;
        assert_eq!(debouncer.settled().await, 1);

        // No new push: nothing further is emitted.
        advance(QUIET).await;
        let idle = timeout(Duration::from_millis(0), debouncer.settled()).await;
        assert!(idle.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn pending_emission_is_cancelled_by_a_newer_value() {
        let mut debouncer = Debouncer::new(QUIET);

        debouncer.push("stale");
        advance(Duration::from_millis(499)).await;
        debouncer.push("fresh");

        // The old deadline passing must not release the superseded value.
        advance(Duration::from_millis(1)).await;
        let early = timeout(Duration::from_millis(0), debouncer.settled()).await;
        assert!(early.is_err());

        advance(Duration::from_millis(499)).await;
        assert_eq!(debouncer.settled().await, "fresh");
    }
}
