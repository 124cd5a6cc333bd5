// SPDX-License-Identifier: MPL-2.0
//! Deterministic doubles for queue testing.
//!
//! Everything here is plain data: a hand-cranked clock and recording
//! surfaces that remember what the queues told them. The module is shipped
//! rather than test-gated so integration tests, benches and host crates can
//! drive the queues without a runtime.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::console::{ConsoleQueue, LogEntry};
use crate::port::{ConsoleSurface, TimerId, TimerService, ToastSurface};
use crate::toast::{Notification, NotificationId};

/// Timer service driven by explicit [`advance`](Self::advance) calls.
///
/// Time stands still between calls, which makes rate classification and
/// timer expiry exactly reproducible.
#[derive(Debug)]
pub struct ManualTimers {
    now: Instant,
    next_id: u64,
    pending: Vec<(TimerId, Instant)>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Moves the clock forward and returns the timers that came due,
    /// ordered by deadline then by scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(TimerId, Instant)> = Vec::new();
        self.pending.retain(|&(id, at)| {
            if at <= now {
                due.push((id, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, at)| (at, id.into_raw()));
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Number of timers not yet fired or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Default for ManualTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService for ManualTimers {
    fn now(&self) -> Instant {
        self.now
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::from_raw(self.next_id);
        self.pending.push((id, self.now + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(pending, _)| pending != id);
    }
}

/// Toast surface that records every call.
///
/// `shown` and `removed` are append-only logs; `visible` mirrors what a
/// real surface would have on screen right now.
#[derive(Debug, Default)]
pub struct RecordingToastSurface {
    /// Every shown notification as `(id, message, animated)`.
    pub shown: Vec<(NotificationId, String, bool)>,
    /// Every removal, expiry and dismissal alike.
    pub removed: Vec<NotificationId>,
    /// Ids currently on screen.
    pub visible: Vec<NotificationId>,
    /// Largest number of simultaneously visible toasts observed.
    pub max_visible_seen: usize,
    /// Number of `clear` calls.
    pub clears: u32,
}

impl ToastSurface for RecordingToastSurface {
    fn show(&mut self, notification: &Notification, animate: bool) {
        self.shown
            .push((notification.id(), notification.message().to_string(), animate));
        self.visible.push(notification.id());
        self.max_visible_seen = self.max_visible_seen.max(self.visible.len());
    }

    fn remove(&mut self, id: NotificationId) {
        self.removed.push(id);
        self.visible.retain(|&visible| visible != id);
    }

    fn clear(&mut self) {
        self.visible.clear();
        self.clears += 1;
    }
}

/// Console surface that records every call.
///
/// `lines` mirrors the rendered document: appends extend it at the back,
/// trims shorten it at the front.
#[derive(Debug, Default)]
pub struct RecordingConsoleSurface {
    /// Every batch as `(length, animated)`.
    pub batches: Vec<(usize, bool)>,
    /// Messages currently rendered, oldest first.
    pub lines: Vec<String>,
    /// Number of `clear` calls.
    pub clears: u32,
}

impl ConsoleSurface for RecordingConsoleSurface {
    fn append_batch(&mut self, entries: &[LogEntry], animate: bool) {
        self.batches.push((entries.len(), animate));
        self.lines
            .extend(entries.iter().map(|entry| entry.message().to_string()));
    }

    fn trim_oldest(&mut self, count: usize) {
        let count = count.min(self.lines.len());
        self.lines.drain(..count);
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }
}

/// Thread-safe wrapper around [`RecordingConsoleSurface`] for the async
/// service, where the surface moves into the spawned task.
#[derive(Debug, Default, Clone)]
pub struct SharedConsoleSurface {
    inner: Arc<Mutex<RecordingConsoleSurface>>,
}

impl SharedConsoleSurface {
    fn locked(&self) -> std::sync::MutexGuard<'_, RecordingConsoleSurface> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the rendered messages.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.locked().lines.clone()
    }

    /// Snapshot of the batch log.
    #[must_use]
    pub fn batches(&self) -> Vec<(usize, bool)> {
        self.locked().batches.clone()
    }

    /// Number of `clear` calls so far.
    #[must_use]
    pub fn clears(&self) -> u32 {
        self.locked().clears
    }
}

impl ConsoleSurface for SharedConsoleSurface {
    fn append_batch(&mut self, entries: &[LogEntry], animate: bool) {
        self.locked().append_batch(entries, animate);
    }

    fn trim_oldest(&mut self, count: usize) {
        self.locked().trim_oldest(count);
    }

    fn clear(&mut self) {
        self.locked().clear();
    }
}

/// Fires console drain wakes until the queue goes idle.
///
/// Advances the manual clock in millisecond steps, which is coarse enough
/// to catch both the burst and the animated inter-batch pause.
pub fn drive_console_idle<S: ConsoleSurface>(queue: &mut ConsoleQueue<S, ManualTimers>) {
    loop {
        let fired = queue.timers_mut().advance(Duration::from_millis(1));
        if fired.is_empty() {
            break;
        }
        for id in fired {
            queue.handle_timer(id);
        }
    }
}
