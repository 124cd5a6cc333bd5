// SPDX-License-Identifier: MPL-2.0
//! Bounded presentation queues for busy UI panels.
//!
//! Two pipelines with one shape: [`toast`] keeps a fixed number of
//! notifications on screen and promotes the rest from a waiting queue as
//! slots free up; [`console`] renders log output in rate-adaptive batches,
//! switching from animated single lines to large unanimated batches when
//! producers flood it. Both are plain state machines wired to the host
//! through the [`port`] traits, so they run the same under a GUI event
//! loop, a tokio task or a hand-cranked test clock.
//!
//! ```
//! use std::time::Duration;
//!
//! use panelflow::port::NullToastSurface;
//! use panelflow::testing::ManualTimers;
//! use panelflow::toast::{Notification, ToastOptions, ToastQueue};
//!
//! let mut toasts =
//!     ToastQueue::new(NullToastSurface, ManualTimers::new(), ToastOptions::default());
//! toasts.push(Notification::success("Profile saved"));
//! assert_eq!(toasts.visible_count(), 1);
//!
//! // The display lifetime elapses and the slot frees up.
//! let fired = toasts.timers_mut().advance(Duration::from_millis(2200));
//! for timer in fired {
//!     toasts.handle_timer(timer);
//! }
//! assert_eq!(toasts.visible_count(), 0);
//! ```

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod port;
pub mod queue;
pub mod testing;
pub mod toast;

pub use error::{Error, Result};
