// SPDX-License-Identifier: MPL-2.0
//! Toast notifications with bounded visibility.
//!
//! A fixed number of slots is visible at once; everything else waits its
//! turn. [`Notification`] is the payload, [`ToastQueue`] decides what is on
//! screen, and the host's [`ToastSurface`](crate::port::ToastSurface) does
//! the drawing.

mod notification;
mod queue;

pub use notification::{Kind, Notification, NotificationId};
pub use queue::{ToastOptions, ToastQueue, ToastStats};
