use std::sync::mpsc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Milliseconds since a fixed process-local epoch.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Repeating and one-shot timers that deliver messages into a channel.
///
/// Every task holds a child of one cancellation token, so [`TimerSet::shutdown`]
/// stops all of them, including one-shots that have not fired yet.
pub struct TimerSet<M> {
    handle: Handle,
    tx: mpsc::Sender<M>,
    cancel: CancellationToken,
}

impl<M: Send + 'static> TimerSet<M> {
    pub fn new(handle: Handle, tx: mpsc::Sender<M>) -> Self {
        Self {
            handle,
            tx,
            cancel: CancellationToken::new(),
        }
    }

    /// Sends `make()` after `first`, then every `period` until shutdown.
    pub fn repeating<F>(&self, first: Duration, period: Duration, make: F)
    where
        F: Fn() -> M + Send + 'static,
    {
        let tx = self.tx.clone();
        let cancel = self.cancel.child_token();
        // tokio panics on a zero period.
        let period = period.max(Duration::from_millis(1));

        self.handle.spawn(async move {
            let start = tokio::time::Instant::now() + first;
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(make()).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Sends `msg` once after `delay`, unless shut down first.
    pub fn once(&self, delay: Duration, msg: M) {
        let tx = self.tx.clone();
        let cancel = self.cancel.child_token();

        self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(msg);
                }
            }
        });
    }

    /// Token cancelled together with the timers, for other owned tasks.
    pub fn child_token(&self) -> CancellationToken {
        self.cancel.child_token()
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
