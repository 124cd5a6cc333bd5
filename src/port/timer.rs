// SPDX-License-Identifier: MPL-2.0
//! Timer service port definition.
//!
//! This module defines the [`TimerService`] trait through which queues
//! schedule their TTL expirations and inter-batch drain wakes. Hosts adapt
//! it onto whatever event loop they run (a GUI subscription, a tokio task,
//! a test harness); the crate ships [`ManualTimers`](crate::testing::ManualTimers)
//! for deterministic tests and an internal tokio adapter for the console
//! service.
//!
//! Scheduling returns an opaque [`TimerId`]. When the deadline passes, the
//! host delivers the id back through the owning queue's `handle_timer`;
//! queues look the id up before acting, so a fire delivered after
//! cancellation (or after `clear`) is a silent no-op. That lookup, together
//! with `cancel`, is what keeps a cleared queue free of orphaned timers.

use std::time::{Duration, Instant};

/// Opaque handle to a scheduled timer.
///
/// Ids are allocated by the [`TimerService`] implementation and must never
/// be reused for the lifetime of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw id value. Intended for `TimerService` implementations.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn into_raw(self) -> u64 {
        self.0
    }
}

/// Port for scheduling cancellable one-shot timers.
///
/// The equivalent of `setTimeout`/`clearTimeout` on a browser event loop,
/// with two differences required by the queues:
///
/// - every schedule returns a handle, and the handle can be cancelled, so
///   `clear` can revoke all outstanding expirations atomically;
/// - the service is also the clock (`now`), so rate classification and
///   scheduling observe the same timeline.
///
/// Implementations are driven by a single-threaded host; no interior
/// synchronization is expected.
pub trait TimerService {
    /// Returns the current monotonic time.
    fn now(&self) -> Instant;

    /// Schedules a one-shot timer `delay` from now and returns its handle.
    ///
    /// A zero `delay` is valid and means "next turn of the host loop",
    /// not "immediately within this call".
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a pending timer. Unknown or already-fired ids are no-ops.
    fn cancel(&mut self, id: TimerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_id_round_trips_raw_value() {
        let id = TimerId::from_raw(42);
        assert_eq!(id.into_raw(), 42);
    }

    #[test]
    fn timer_ids_compare_by_value() {
        assert_eq!(TimerId::from_raw(7), TimerId::from_raw(7));
        assert_ne!(TimerId::from_raw(7), TimerId::from_raw(8));
    }
}
