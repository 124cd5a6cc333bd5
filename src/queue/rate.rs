// SPDX-License-Identifier: MPL-2.0
//! Event-rate classification for burst handling.

use std::time::{Duration, Instant};

use crate::config::defaults;

/// Classifies producer pressure from inter-arrival gaps.
///
/// Each enqueue reports its arrival time. A gap shorter than the threshold
/// counts toward a rapid streak; one slow arrival resets the streak and the
/// queue is back to animated, line-at-a-time presentation. Once the streak
/// passes the trigger the queue switches to burst mode: full-size batches
/// and no entrance animations.
#[derive(Debug)]
pub struct RateClassifier {
    threshold: Duration,
    trigger: u32,
    rapid_count: u32,
    last_event: Option<Instant>,
}

impl RateClassifier {
    /// Creates a classifier with an explicit threshold and trigger.
    #[must_use]
    pub fn new(threshold: Duration, trigger: u32) -> Self {
        Self {
            threshold,
            trigger,
            rapid_count: 0,
            last_event: None,
        }
    }

    /// Records an event arrival at `now`.
    pub fn observe(&mut self, now: Instant) {
        if let Some(previous) = self.last_event {
            let delta = now.checked_duration_since(previous).unwrap_or(Duration::ZERO);
            if delta < self.threshold {
                self.rapid_count = self.rapid_count.saturating_add(1);
            } else {
                self.rapid_count = 0;
            }
        }
        self.last_event = Some(now);
    }

    /// Returns true while the rapid streak exceeds the trigger.
    #[must_use]
    pub fn is_burst(&self) -> bool {
        self.rapid_count > self.trigger
    }

    /// Length of the current rapid streak.
    #[must_use]
    pub fn rapid_count(&self) -> u32 {
        self.rapid_count
    }
}

impl Default for RateClassifier {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(defaults::RAPID_EVENT_THRESHOLD_MS),
            defaults::RAPID_EVENT_TRIGGER,
        )
    }
}
