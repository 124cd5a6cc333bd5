// SPDX-License-Identifier: MPL-2.0
//! Host-facing ports.
//!
//! The queues in this crate are pure coordinators; everything that touches
//! the outside world goes through a port trait defined here. `surface`
//! carries render output, `timer` carries scheduling. Tests and headless
//! hosts plug in the doubles from [`crate::testing`] or the null surfaces.

mod surface;
mod timer;

pub use surface::{ConsoleSurface, NullConsoleSurface, NullToastSurface, ToastSurface};
pub use timer::{TimerId, TimerService};
