// SPDX-License-Identifier: MPL-2.0
//! Async console service.
//!
//! Wraps a [`ConsoleQueue`] in a tokio task so producers on any thread can
//! feed the console through a cheap [`ConsoleHandle`]. The task owns the
//! queue and its timers; drain wakes are realized as `sleep_until` on the
//! runtime clock, which keeps tests on a paused clock fully deterministic.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::config::defaults;
use crate::console::{ConsoleOptions, ConsoleQueue, ConsoleStats, LogRecord};
use crate::port::{ConsoleSurface, TimerId, TimerService};

/// Commands accepted by the console service task.
#[derive(Debug)]
pub enum ConsoleCommand {
    /// Admit a record for rendering.
    Append(LogRecord),
    /// Drop pending and rendered output.
    Clear,
    /// Reply with the rendered history as export text.
    Export(oneshot::Sender<String>),
    /// Stop the task. Commands already queued behind this one are ignored.
    Shutdown,
}

/// Cloneable producer handle onto a spawned console service.
#[derive(Debug, Clone)]
pub struct ConsoleHandle {
    tx: mpsc::Sender<ConsoleCommand>,
}

impl ConsoleHandle {
    /// Hands a record to the service without blocking.
    ///
    /// Returns false when the command channel is full and the record was
    /// dropped. A console that cannot keep up loses output rather than
    /// stalling its producers.
    pub fn log(&self, record: LogRecord) -> bool {
        self.tx.try_send(ConsoleCommand::Append(record)).is_ok()
    }

    /// Clears pending and rendered output.
    ///
    /// Returns false when the service has already stopped.
    pub async fn clear(&self) -> bool {
        self.tx.send(ConsoleCommand::Clear).await.is_ok()
    }

    /// Fetches the rendered history as export text.
    ///
    /// Returns `None` when the service has already stopped.
    pub async fn export(&self) -> Option<String> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send(ConsoleCommand::Export(reply_tx)).await.ok()?;
        reply_rx.await.ok()
    }

    /// Asks the service to stop. Output still pending in the backlog is
    /// not rendered.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(ConsoleCommand::Shutdown).await;
    }
}

/// Spawns a console service task rendering onto `surface`.
///
/// The join handle resolves to the queue's lifetime counters once the
/// service stops, through [`ConsoleHandle::shutdown`] or when every handle
/// clone has been dropped.
pub fn spawn_console<S>(
    surface: S,
    options: ConsoleOptions,
) -> (ConsoleHandle, JoinHandle<ConsoleStats>)
where
    S: ConsoleSurface + Send + 'static,
{
    let (tx, rx) = mpsc::channel(defaults::COMMAND_CHANNEL_CAPACITY);
    let task = tokio::spawn(run(rx, surface, options));
    (ConsoleHandle { tx }, task)
}

async fn run<S>(
    mut rx: mpsc::Receiver<ConsoleCommand>,
    surface: S,
    options: ConsoleOptions,
) -> ConsoleStats
where
    S: ConsoleSurface + Send + 'static,
{
    let mut queue = ConsoleQueue::new(surface, RuntimeTimers::default(), options);
    loop {
        let deadline = queue.timers().next_deadline();
        tokio::select! {
            command = rx.recv() => match command {
                Some(ConsoleCommand::Append(record)) => {
                    queue.append(record);
                }
                Some(ConsoleCommand::Clear) => queue.clear(),
                Some(ConsoleCommand::Export(reply)) => {
                    let _ = reply.send(queue.export_text());
                }
                Some(ConsoleCommand::Shutdown) | None => break,
            },
            () = tokio::time::sleep_until(deadline.unwrap_or_else(tokio::time::Instant::now)),
                if deadline.is_some() =>
            {
                let now = tokio::time::Instant::now();
                for id in queue.timers_mut().take_due(now) {
                    queue.handle_timer(id);
                }
            }
        }
    }
    queue.stats()
}

/// Timer service over the tokio clock.
///
/// Deadlines are kept as plain data; the service loop turns the earliest
/// one into a `sleep_until`. Respecting the paused test clock is the
/// reason `now` goes through `tokio::time` instead of `Instant::now`.
#[derive(Debug, Default)]
struct RuntimeTimers {
    next_id: u64,
    pending: Vec<(TimerId, tokio::time::Instant)>,
}

impl RuntimeTimers {
    fn next_deadline(&self) -> Option<tokio::time::Instant> {
        self.pending.iter().map(|&(_, at)| at).min()
    }

    fn take_due(&mut self, now: tokio::time::Instant) -> Vec<TimerId> {
        let mut due: Vec<(TimerId, tokio::time::Instant)> = Vec::new();
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
}

impl TimerService for RuntimeTimers {
    fn now(&self) -> std::time::Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::from_raw(self.next_id);
        self.pending.push((id, tokio::time::Instant::now() + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(pending, _)| pending != id);
    }
}
