// SPDX-License-Identifier: MPL-2.0
//! Toast notification data model.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::defaults;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for a notification.
///
/// Allocated when the notification is built, never reused, and shared with
/// the surface so dismissals can name their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn into_raw(self) -> u64 {
        self.0
    }
}

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    /// Stable lowercase name, suitable as a style class on the surface.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single toast: a short message with a kind and a display lifetime.
///
/// Construction assigns the id and the default lifetime; the builder
/// methods adjust the rest. A `None` lifetime means the toast stays until
/// dismissed.
///
/// ```
/// use panelflow::toast::{Kind, Notification};
///
/// let toast = Notification::new(Kind::Success, "Profile saved");
/// assert!(toast.display_ttl().is_some());
///
/// let pinned = Notification::new(Kind::Error, "Update failed").sticky();
/// assert!(pinned.display_ttl().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    ttl: Option<Duration>,
}

impl Notification {
    /// Creates a notification with the default display lifetime.
    #[must_use]
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            kind,
            message: message.into(),
            ttl: Some(Duration::from_millis(defaults::DEFAULT_TOAST_TTL_MS)),
        }
    }

    /// Shorthand for an informational notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Shorthand for a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Shorthand for a warning notification.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Shorthand for an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Overrides the display lifetime.
    #[must_use]
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Keeps the notification on screen until dismissed.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.ttl = None;
        self
    }

    /// The notification id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// The visual category.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Display lifetime, or `None` for a sticky notification.
    #[must_use]
    pub fn display_ttl(&self) -> Option<Duration> {
        self.ttl
    }
}
