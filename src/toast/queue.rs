// SPDX-License-Identifier: MPL-2.0
//! Slot-managed toast presentation queue.

use crate::config::defaults;
use crate::domain::{BacklogCapacity, VisibleLimit};
use crate::port::{TimerId, TimerService, ToastSurface};
use crate::queue::{ActiveSet, Backlog, RateClassifier};
use crate::toast::{Notification, NotificationId};

/// Tuning knobs for a [`ToastQueue`].
#[derive(Debug, Clone, Copy)]
pub struct ToastOptions {
    /// Number of simultaneously visible toasts.
    pub max_visible: VisibleLimit,
    /// Capacity of the waiting queue behind the visible slots.
    pub backlog: BacklogCapacity,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            max_visible: VisibleLimit::default(),
            backlog: BacklogCapacity::new(defaults::DEFAULT_TOAST_BACKLOG),
        }
    }
}

/// Counters describing everything a [`ToastQueue`] has done so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToastStats {
    /// Notifications handed to `push`.
    pub enqueued: u64,
    /// Notifications that reached a visible slot.
    pub shown: u64,
    /// Visible notifications removed by their display lifetime.
    pub expired: u64,
    /// Notifications removed by an explicit dismissal.
    pub dismissed: u64,
    /// Backlogged notifications evicted by newer arrivals.
    pub dropped: u64,
}

struct ActiveToast {
    notification: Notification,
    expiry: Option<TimerId>,
}

/// Bounded-visibility notification queue.
///
/// At most `max_visible` toasts occupy surface slots at a time; the rest
/// wait in a drop-oldest backlog and are promoted in arrival order as slots
/// free up. Every visible toast with a display lifetime owns exactly one
/// pending timer, and every path that removes the toast cancels or consumes
/// that timer, so a cleared queue leaves nothing ticking.
///
/// The queue is single-threaded by design. The host calls `push`, `dismiss`
/// and `clear` from its event loop and feeds expired timer ids back through
/// [`handle_timer`](Self::handle_timer); ids that no longer match anything
/// are ignored.
pub struct ToastQueue<S, T> {
    backlog: Backlog<Notification>,
    active: ActiveSet<NotificationId, ActiveToast>,
    rate: RateClassifier,
    surface: S,
    timers: T,
    attached: bool,
    stats: ToastStats,
}

impl<S: ToastSurface, T: TimerService> ToastQueue<S, T> {
    /// Creates an attached queue presenting onto `surface`.
    pub fn new(surface: S, timers: T, options: ToastOptions) -> Self {
        Self {
            backlog: Backlog::new(options.backlog.value()),
            active: ActiveSet::new(options.max_visible.value()),
            rate: RateClassifier::default(),
            surface,
            timers,
            attached: true,
            stats: ToastStats::default(),
        }
    }

    /// Enqueues a notification, showing it at once when a slot is free.
    ///
    /// With all slots taken, or while detached, the notification joins the
    /// backlog; if the backlog is full its oldest entry is dropped to make
    /// room. Returns the notification's id for later dismissal.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.rate.observe(self.timers.now());
        self.stats.enqueued += 1;
        if self.attached && self.backlog.is_empty() && self.active.has_slot() {
            self.show(notification);
        } else if self.backlog.push(notification).is_some() {
            self.stats.dropped += 1;
        }
        id
    }

    /// Removes a notification wherever it currently is.
    ///
    /// Visible toasts leave the surface and their expiry timer is
    /// cancelled; backlogged toasts are silently unqueued. Returns false
    /// when the id matches neither.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(toast) = self.active.remove(id) {
            if let Some(timer) = toast.expiry {
                self.timers.cancel(timer);
            }
            self.surface.remove(id);
            self.stats.dismissed += 1;
            self.admit_ready();
            true
        } else if self.backlog.remove_where(|n| n.id() == id).is_some() {
            self.stats.dismissed += 1;
            true
        } else {
            false
        }
    }

    /// Processes an expired timer delivered by the host.
    ///
    /// Stale ids, including timers cancelled by `clear` whose fire was
    /// already in flight, match nothing and fall through harmlessly.
    pub fn handle_timer(&mut self, timer: TimerId) {
        let expired = self
            .active
            .iter()
            .find_map(|(id, toast)| (toast.expiry == Some(timer)).then_some(id));
        let Some(id) = expired else {
            return;
        };
        self.active.remove(id);
        self.surface.remove(id);
        self.stats.expired += 1;
        self.admit_ready();
    }

    /// Drops every visible and queued notification.
    ///
    /// All outstanding expiry timers are cancelled before the surface is
    /// cleared, so nothing fires afterwards.
    pub fn clear(&mut self) {
        for (_, toast) in self.active.drain() {
            if let Some(timer) = toast.expiry {
                self.timers.cancel(timer);
            }
        }
        self.backlog.clear();
        self.surface.clear();
    }

    /// Suspends presentation, e.g. while the host panel is hidden.
    ///
    /// Visible toasts are taken down and their timers cancelled; the
    /// backlog is kept so [`attach`](Self::attach) can resume where the
    /// queue left off. New pushes while detached accumulate in the backlog.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        for (_, toast) in self.active.drain() {
            if let Some(timer) = toast.expiry {
                self.timers.cancel(timer);
            }
        }
        self.surface.clear();
    }

    /// Resumes presentation and promotes queued notifications into the
    /// freed slots.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.admit_ready();
    }

    fn admit_ready(&mut self) {
        if !self.attached {
            return;
        }
        while self.active.has_slot() {
            match self.backlog.pop() {
                Some(notification) => self.show(notification),
                None => break,
            }
        }
    }

    fn show(&mut self, notification: Notification) {
        let animate = !self.rate.is_burst();
        self.surface.show(&notification, animate);
        let expiry = notification
            .display_ttl()
            .map(|ttl| self.timers.schedule(ttl));
        let id = notification.id();
        self.active.insert(id, ActiveToast { notification, expiry });
        self.stats.shown += 1;
    }

    /// Notifications currently holding a visible slot, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|(_, toast)| &toast.notification)
    }

    /// Number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.active.len()
    }

    /// Number of notifications waiting for a slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.backlog.len()
    }

    /// Whether the queue currently presents onto its surface.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> ToastStats {
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

    /// Mutable timer service access, used by tests to drive time forward.
    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{ManualTimers, RecordingToastSurface};

    fn queue() -> ToastQueue<RecordingToastSurface, ManualTimers> {
        ToastQueue::new(
            RecordingToastSurface::default(),
            ManualTimers::new(),
            ToastOptions::default(),
        )
    }

    fn expire_due(queue: &mut ToastQueue<RecordingToastSurface, ManualTimers>, by: Duration) {
        let fired = queue.timers_mut().advance(by);
        for id in fired {
            queue.handle_timer(id);
        }
    }

    #[test]
    fn first_three_toasts_show_immediately() {
        let mut queue = queue();
        for n in 0..3 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        assert_eq!(queue.visible_count(), 3);
        assert_eq!(queue.queued_count(), 0);
        assert_eq!(queue.surface().shown.len(), 3);
    }

    #[test]
    fn fourth_toast_waits_for_a_slot() {
        let mut queue = queue();
        for n in 0..4 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        assert_eq!(queue.visible_count(), 3);
        assert_eq!(queue.queued_count(), 1);

        // Expire the first three; the fourth takes the freed slot.
        expire_due(&mut queue, Duration::from_millis(2200));
        assert_eq!(queue.visible_count(), 1);
        assert_eq!(queue.queued_count(), 0);
        let visible: Vec<&str> = queue.visible().map(Notification::message).collect();
        assert_eq!(visible, vec!["toast 3"]);
    }

    #[test]
    fn promotion_preserves_arrival_order() {
        let mut queue = queue();
        for n in 0..6 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        expire_due(&mut queue, Duration::from_millis(2200));
        let shown: Vec<String> = queue
            .surface()
            .shown
            .iter()
            .map(|(_, message, _)| message.clone())
            .collect();
        assert_eq!(
            shown,
            vec!["toast 0", "toast 1", "toast 2", "toast 3", "toast 4", "toast 5"]
        );
    }

    #[test]
    fn expiry_removes_from_surface() {
        let mut queue = queue();
        let id = queue.push(Notification::info("bye"));
        expire_due(&mut queue, Duration::from_millis(2200));
        assert_eq!(queue.visible_count(), 0);
        assert_eq!(queue.surface().removed, vec![id]);
        assert_eq!(queue.stats().expired, 1);
    }

    #[test]
    fn dismiss_visible_toast_cancels_its_timer() {
        let mut queue = queue();
        let id = queue.push(Notification::info("away"));
        assert!(queue.dismiss(id));
        assert_eq!(queue.timers().pending(), 0);

        // The cancelled timer must not come back.
        expire_due(&mut queue, Duration::from_secs(10));
        assert_eq!(queue.stats().expired, 0);
        assert_eq!(queue.surface().removed, vec![id]);
    }

    #[test]
    fn dismiss_queued_toast_unqueues_it() {
        let mut queue = queue();
        for n in 0..3 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        let id = queue.push(Notification::info("never shown"));
        assert!(queue.dismiss(id));
        assert_eq!(queue.queued_count(), 0);

        expire_due(&mut queue, Duration::from_millis(2200));
        assert_eq!(queue.visible_count(), 0);
        let shown_ids: Vec<_> = queue.surface().shown.iter().map(|(id, _, _)| *id).collect();
        assert!(!shown_ids.contains(&id));
    }

    #[test]
    fn dismiss_unknown_id_is_false() {
        let mut queue = queue();
        let stray = Notification::info("stray");
        assert!(!queue.dismiss(stray.id()));
    }

    #[test]
    fn clear_cancels_every_pending_timer() {
        let mut queue = queue();
        for n in 0..5 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        queue.clear();
        assert_eq!(queue.visible_count(), 0);
        assert_eq!(queue.queued_count(), 0);
        assert_eq!(queue.timers().pending(), 0);
        assert_eq!(queue.surface().clears, 1);

        // Nothing left to fire.
        let fired = queue.timers_mut().advance(Duration::from_secs(60));
        assert!(fired.is_empty());
    }

    #[test]
    fn sticky_toast_never_expires() {
        let mut queue = queue();
        queue.push(Notification::error("stuck").sticky());
        assert_eq!(queue.timers().pending(), 0);
        expire_due(&mut queue, Duration::from_secs(3600));
        assert_eq!(queue.visible_count(), 1);
    }

    #[test]
    fn full_backlog_drops_oldest_waiting_toast() {
        let options = ToastOptions {
            max_visible: VisibleLimit::new(1),
            backlog: BacklogCapacity::new(8),
        };
        let mut queue =
            ToastQueue::new(RecordingToastSurface::default(), ManualTimers::new(), options);
        // One visible, eight waiting, then one more than fits.
        for n in 0..10 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        assert_eq!(queue.stats().dropped, 1);
        assert_eq!(queue.queued_count(), 8);

        // The dropped toast is number 1, the oldest waiter.
        expire_due(&mut queue, Duration::from_millis(2200));
        let shown: Vec<String> = queue
            .surface()
            .shown
            .iter()
            .map(|(_, message, _)| message.clone())
            .collect();
        assert!(!shown.contains(&"toast 1".to_string()));
        assert!(shown.contains(&"toast 2".to_string()));
    }

    #[test]
    fn visible_never_exceeds_limit() {
        let mut queue = queue();
        for n in 0..50 {
            queue.push(Notification::info(format!("toast {n}")));
            assert!(queue.visible_count() <= 3);
        }
        for _ in 0..60 {
            expire_due(&mut queue, Duration::from_millis(500));
            assert!(queue.visible_count() <= 3);
        }
        assert_eq!(queue.surface().max_visible_seen, 3);
    }

    #[test]
    fn detach_takes_down_visible_but_keeps_backlog() {
        let mut queue = queue();
        for n in 0..5 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        queue.detach();
        assert!(!queue.is_attached());
        assert_eq!(queue.visible_count(), 0);
        assert_eq!(queue.queued_count(), 2);
        assert_eq!(queue.timers().pending(), 0);

        // Pushes while detached only accumulate.
        queue.push(Notification::info("toast 5"));
        assert_eq!(queue.visible_count(), 0);
        assert_eq!(queue.queued_count(), 3);
    }

    #[test]
    fn attach_promotes_backlog_into_slots() {
        let mut queue = queue();
        queue.detach();
        for n in 0..5 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        queue.attach();
        assert_eq!(queue.visible_count(), 3);
        assert_eq!(queue.queued_count(), 2);
        let visible: Vec<&str> = queue.visible().map(Notification::message).collect();
        assert_eq!(visible, vec!["toast 0", "toast 1", "toast 2"]);
    }

    #[test]
    fn burst_pushes_show_without_animation() {
        let mut queue = queue();
        // Rapid arrivals with the clock standing still engage burst mode.
        for n in 0..10 {
            queue.push(Notification::info(format!("toast {n}")));
        }
        queue.clear();
        queue.push(Notification::info("burst"));
        let &(_, _, animated) = queue.surface().shown.last().expect("nothing shown");
        assert!(!animated);
    }

    #[test]
    fn paced_pushes_show_animated() {
        let mut queue = queue();
        for n in 0..5 {
            expire_due(&mut queue, Duration::from_millis(500));
            queue.push(Notification::info(format!("toast {n}")));
        }
        assert!(queue.surface().shown.iter().all(|(_, _, animated)| *animated));
    }
}
