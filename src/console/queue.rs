// SPDX-License-Identifier: MPL-2.0
//! Rate-adaptive console rendering queue.

use std::time::Duration;

use chrono::Utc;

use crate::config::defaults;
use crate::console::{LogEntry, LogRecord};
use crate::domain::{BacklogCapacity, BatchSize, HistoryCapacity};
use crate::port::{ConsoleSurface, TimerId, TimerService};
use crate::queue::{Backlog, RateClassifier};

/// Tuning knobs for a [`ConsoleQueue`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    /// Capacity of the pending backlog between producers and the surface.
    pub backlog: BacklogCapacity,
    /// Lines rendered per drain pass while in burst mode.
    pub batch_size: BatchSize,
    /// Rendered lines retained before the oldest are trimmed.
    pub history: HistoryCapacity,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            backlog: BacklogCapacity::default(),
            batch_size: BatchSize::default(),
            history: HistoryCapacity::default(),
        }
    }
}

/// Counters describing everything a [`ConsoleQueue`] has done so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStats {
    /// Records admitted into the backlog.
    pub enqueued: u64,
    /// Entries handed to the surface.
    pub rendered: u64,
    /// Batches handed to the surface.
    pub batches: u64,
    /// Backlogged entries evicted before rendering.
    pub dropped: u64,
    /// Rendered entries trimmed from history.
    pub trimmed: u64,
}

/// Batched, rate-adaptive pipeline from log producers to a console surface.
///
/// Appends land in a drop-oldest backlog; rendering happens in drain passes
/// driven by the timer service. While arrivals are paced the queue renders
/// one line per pass with animation; once the [`RateClassifier`] detects a
/// burst it switches to full batches with animation off, keeping the
/// surface responsive under log storms.
///
/// The first append of an idle queue does not render inline. It schedules
/// an immediate wake instead, so a burst that arrives in one tick is
/// classified before the first pass and rendered in large batches from the
/// start. The `draining` flag guarantees a single in-flight drain: appends
/// during a drain only feed the backlog.
pub struct ConsoleQueue<S, T> {
    backlog: Backlog<LogEntry>,
    history: Backlog<LogEntry>,
    batch_size: usize,
    rate: RateClassifier,
    surface: S,
    timers: T,
    draining: bool,
    wake: Option<TimerId>,
    next_seq: u64,
    stats: ConsoleStats,
}

impl<S: ConsoleSurface, T: TimerService> ConsoleQueue<S, T> {
    /// Creates an idle queue rendering onto `surface`.
    pub fn new(surface: S, timers: T, options: ConsoleOptions) -> Self {
        Self {
            backlog: Backlog::new(options.backlog.value()),
            history: Backlog::new(options.history.value()),
            batch_size: options.batch_size.value(),
            rate: RateClassifier::default(),
            surface,
            timers,
            draining: false,
            wake: None,
            next_seq: 1,
            stats: ConsoleStats::default(),
        }
    }

    /// Admits a record and starts a drain when none is running.
    ///
    /// With the backlog full the oldest pending entry is evicted; under
    /// overload the newest output is the useful part. Returns the sequence
    /// number assigned to the record.
    pub fn append(&mut self, record: LogRecord) -> u64 {
        self.rate.observe(self.timers.now());
        let seq = self.next_seq;
        self.next_seq += 1;
        let entry = LogEntry::admit(record, seq, Utc::now());
        if self.backlog.push(entry).is_some() {
            self.stats.dropped += 1;
        }
        self.stats.enqueued += 1;
        if !self.draining {
            self.draining = true;
            self.wake = Some(self.timers.schedule(Duration::ZERO));
        }
        seq
    }

    /// Runs one drain pass if `timer` is the pending wake.
    ///
    /// Any other id, including a wake cancelled by `clear` whose fire was
    /// already in flight, is ignored.
    pub fn handle_timer(&mut self, timer: TimerId) {
        if self.wake != Some(timer) {
            return;
        }
        self.wake = None;
        self.drain_step();
    }

    fn drain_step(&mut self) {
        let burst = self.rate.is_burst();
        let batch = self.backlog.take(if burst { self.batch_size } else { 1 });
        if batch.is_empty() {
            self.draining = false;
            return;
        }
        self.surface.append_batch(&batch, !burst);
        self.stats.rendered += batch.len() as u64;
        self.stats.batches += 1;
        self.retain_history(batch);

        if self.backlog.is_empty() {
            self.draining = false;
            return;
        }
        // Yield between passes so the host loop can breathe: a full burst
        // batch resumes next tick, an animated line waits a beat.
        let pause = if burst {
            Duration::from_millis(defaults::BURST_YIELD_MS)
        } else {
            Duration::from_millis(defaults::ANIMATED_YIELD_MS)
        };
        self.wake = Some(self.timers.schedule(pause));
    }

    fn retain_history(&mut self, batch: Vec<LogEntry>) {
        let mut evicted = 0;
        for entry in batch {
            if self.history.push(entry).is_some() {
                evicted += 1;
            }
        }
        if evicted > 0 {
            self.surface.trim_oldest(evicted);
            self.stats.trimmed += evicted as u64;
        }
    }

    /// Drops pending and rendered output and cancels the drain wake.
    pub fn clear(&mut self) {
        self.backlog.clear();
        self.history.clear();
        if let Some(timer) = self.wake.take() {
            self.timers.cancel(timer);
        }
        self.draining = false;
        self.surface.clear();
    }

    /// Renders the retained history as export text, oldest first.
    ///
    /// Pending entries that have not reached the surface are not included.
    #[must_use]
    pub fn export_text(&self) -> String {
        let lines: Vec<String> = self.history.iter().map(LogEntry::format_line).collect();
        lines.join("\n")
    }

    /// Entries rendered and still retained, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &LogEntry> {
        self.history.iter()
    }

    /// Number of entries waiting to be rendered.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.backlog.len()
    }

    /// True while a drain is in flight.
    #[must_use]
    pub fn is_draining(&self) -> bool {
        self.draining
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> ConsoleStats {
        self.stats
    }

    /// The render surface, for host-side inspection.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The timer service.
    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Mutable timer service access, used by hosts that drive time
    /// themselves.
    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }
}
