// SPDX-License-Identifier: MPL-2.0
//! Render surface ports.
//!
//! Queues do not draw; they tell a surface what changed. These traits are
//! the whole of that contract. A GUI host implements them over its widget
//! tree (DOM fragments, an iced column, a TUI pane), tests implement them
//! with recording doubles, and headless hosts can use the null surfaces
//! provided here.
//!
//! Every mutating queue operation maps to at most a handful of surface
//! calls, and the queue guarantees call order matches presentation order:
//! entries are appended oldest-first and trimmed oldest-first.

use crate::console::LogEntry;
use crate::toast::{Notification, NotificationId};

/// Port through which the toast queue manipulates its visible slots.
pub trait ToastSurface {
    /// Shows a notification in a free slot.
    ///
    /// `animate` is false while the host is in burst mode; surfaces should
    /// then skip entrance transitions and insert the element directly.
    fn show(&mut self, notification: &Notification, animate: bool);

    /// Removes the notification with the given id from its slot.
    ///
    /// Called for TTL expiry and manual dismissal alike. Ids that are no
    /// longer visible must be tolerated silently.
    fn remove(&mut self, id: NotificationId);

    /// Removes every visible notification at once.
    fn clear(&mut self);
}

/// Port through which the console queue renders drained log batches.
pub trait ConsoleSurface {
    /// Appends a batch of entries, oldest first.
    ///
    /// Batches are built off-surface and handed over whole so hosts can
    /// use a single reflow per batch (a document fragment, one widget
    /// rebuild). `animate` is false in burst mode.
    fn append_batch(&mut self, entries: &[LogEntry], animate: bool);

    /// Drops the `count` oldest rendered entries.
    ///
    /// Issued after an append pushes rendered history past its cap.
    fn trim_oldest(&mut self, count: usize);

    /// Removes all rendered entries.
    fn clear(&mut self);
}

/// Toast surface that ignores every call.
///
/// Useful for headless operation and benchmarks where only queue state
/// matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullToastSurface;

impl ToastSurface for NullToastSurface {
    fn show(&mut self, _notification: &Notification, _animate: bool) {}

    fn remove(&mut self, _id: NotificationId) {}

    fn clear(&mut self) {}
}

/// Console surface that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullConsoleSurface;

impl ConsoleSurface for NullConsoleSurface {
    fn append_batch(&mut self, _entries: &[LogEntry], _animate: bool) {}

    fn trim_oldest(&mut self, _count: usize) {}

    fn clear(&mut self) {}
}
