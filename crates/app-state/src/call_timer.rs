//! Call duration timer
//!
//! A repeating one-second timer that counts how long the current call has
//! been running. The counter lives in a `watch` channel so the dialer
//! screen (and anything else) can observe it. The ticking task is owned by a
//! handle: stopping the timer or dropping it ends the task, after which the
//! counter never changes again.

use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Default tick period (one second)
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Shortest accepted tick period
pub const MIN_TICK: Duration = Duration::from_millis(1);

/// Format a second count as `MM:SS`, or `H:MM:SS` from one hour on
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Counter of elapsed call seconds
///
/// # Example
///
/// ```no_run
/// use app_state::call_timer::CallTimer;
///
/// #[tokio::main]
/// async fn main() {
///     let mut timer = CallTimer::new();
///     timer.start();
///     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
///     println!("On call for {}", timer.display());
///     timer.stop();
/// }
/// ```
#[derive(Debug)]
pub struct CallTimer {
    elapsed_tx: watch::Sender<u64>,
    tick: Duration,
    running: Option<TickerHandle>,
}

impl CallTimer {
    /// Create a stopped timer with a one-second tick
    pub fn new() -> Self {
        Self::with_tick(DEFAULT_TICK)
    }

    /// Create a stopped timer with a custom tick period
    ///
    /// Periods below [`MIN_TICK`] are raised to it.
    pub fn with_tick(tick: Duration) -> Self {
        let (elapsed_tx, _) = watch::channel(0);
        Self {
            elapsed_tx,
            tick: tick.max(MIN_TICK),
            running: None,
        }
    }

    /// Start counting from zero
    ///
    /// Does nothing if the timer is already running. Must be called from
    /// within a Tokio runtime.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }

        self.elapsed_tx.send_replace(0);
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let elapsed_tx = self.elapsed_tx.clone();
        let tick = self.tick;

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + tick, tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        elapsed_tx.send_modify(|secs| *secs += 1);
                    }
                }
            }
        });

        tracing::debug!(tick_ms = tick.as_millis() as u64, "Call timer started");
        self.running = Some(TickerHandle {
            stop_tx: Some(stop_tx),
            _handle: handle,
        });
    }

    /// Stop counting and return the final elapsed seconds
    ///
    /// The counter keeps its last value until the next [`CallTimer::start`].
    pub fn stop(&mut self) -> u64 {
        if let Some(handle) = self.running.take() {
            handle.stop();
            tracing::debug!(elapsed = self.elapsed_secs(), "Call timer stopped");
        }
        self.elapsed_secs()
    }

    /// Whether the timer is counting
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Elapsed seconds
    pub fn elapsed_secs(&self) -> u64 {
        *self.elapsed_tx.borrow()
    }

    /// Elapsed time formatted for display
    pub fn display(&self) -> String {
        format_duration(self.elapsed_secs())
    }

    /// Subscribe to elapsed-second updates
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed_tx.subscribe()
    }
}

impl Default for CallTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the ticking task
///
/// When dropped, the task is told to stop before its next tick.
#[derive(Debug)]
struct TickerHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl TickerHandle {
    fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}
