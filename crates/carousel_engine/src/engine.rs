use std::sync::{mpsc, Arc};
use std::time::Duration;

use carousel_core::{FetchSeq, Msg};
use carousel_logging::{carousel_debug, carousel_warn};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::{Clock, FeedRequest, FeedSource, TimerSet};

/// Owns the async runtime that runs feed fetches and timers.
///
/// Every result is delivered as a [`Msg`] on the channel given to
/// [`EngineHandle::new`]; nothing here touches application state.
pub struct EngineHandle {
    runtime: Option<Runtime>,
    source: Arc<dyn FeedSource>,
    request: FeedRequest,
    timers: TimerSet<Msg>,
    msg_tx: mpsc::Sender<Msg>,
    clock: Clock,
}

impl EngineHandle {
    pub fn new(
        source: Arc<dyn FeedSource>,
        request: FeedRequest,
        msg_tx: mpsc::Sender<Msg>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("carousel-engine")
            .enable_all()
            .build()?;
        let timers = TimerSet::new(runtime.handle().clone(), msg_tx.clone());

        Ok(Self {
            runtime: Some(runtime),
            source,
            request,
            timers,
            msg_tx,
            clock: Clock::new(),
        })
    }

    pub fn timers(&self) -> &TimerSet<Msg> {
        &self.timers
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Starts fetch `seq` in the background; the outcome arrives as a message.
    pub fn fetch(&self, seq: FetchSeq) {
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };
        let source = self.source.clone();
        let request = self.request.clone();
        let msg_tx = self.msg_tx.clone();
        let cancel = self.timers.child_token();

        runtime.spawn(async move {
            run_fetch(source.as_ref(), &request, seq, msg_tx, cancel).await;
        });
    }

    /// Translates Ctrl-C into [`Msg::ShutdownRequested`].
    pub fn forward_ctrl_c(&self) {
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };
        let msg_tx = self.msg_tx.clone();
        let cancel = self.timers.child_token();

        runtime.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        carousel_warn!("Ctrl-C handler unavailable: {}", err);
                        return;
                    }
                    let _ = msg_tx.send(Msg::ShutdownRequested);
                }
            }
        });
    }

    /// Cancels every timer, pending callback and fetch, then stops the runtime.
    pub fn shutdown(&mut self) {
        self.timers.shutdown();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_timeout(Duration::from_millis(500));
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_fetch(
    source: &dyn FeedSource,
    request: &FeedRequest,
    seq: FetchSeq,
    msg_tx: mpsc::Sender<Msg>,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            carousel_debug!("Fetch seq={} cancelled", seq);
            return;
        }
        result = source.fetch_entries(request) => result,
    };

    let msg = match result {
        Ok(entries) => Msg::FeedFetched { seq, entries },
        Err(err) => Msg::FeedFailed {
            seq,
            error: err.to_string(),
        },
    };
    let _ = msg_tx.send(msg);
}
