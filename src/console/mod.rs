// SPDX-License-Identifier: MPL-2.0
//! Batched console log rendering.
//!
//! Producers hand in [`LogRecord`]s; the [`ConsoleQueue`] stamps them,
//! buffers them and renders them in rate-adaptive batches onto a
//! [`ConsoleSurface`](crate::port::ConsoleSurface). `export` turns the
//! rendered history into text and `service` runs the whole pipeline on a
//! tokio task for multi-threaded hosts.

mod entry;
mod export;
mod queue;
mod service;

pub use entry::{LogEntry, LogLevel, LogRecord};
pub use export::{export_filename, export_to_dir, write_atomic};
pub use queue::{ConsoleOptions, ConsoleQueue, ConsoleStats};
pub use service::{spawn_console, ConsoleCommand, ConsoleHandle};
