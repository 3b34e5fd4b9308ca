use crate::{FeedEntry, FetchSeq, TransitionPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Refresh timer fired; time to pull the feed again.
    RefreshTick,
    /// Engine delivered a parsed feed page.
    FeedFetched {
        seq: FetchSeq,
        entries: Vec<FeedEntry>,
    },
    /// Engine could not fetch or parse the feed.
    FeedFailed { seq: FetchSeq, error: String },
    /// Display timers are running; `at_ms` is their common start mark.
    DisplayCycleStarted { at_ms: u64 },
    /// Display timer fired; start a slide transition.
    TransitionTick,
    /// A delayed half of a transition is due.
    TransitionPhase(TransitionPhase),
    /// Progress bar sampling tick.
    ProgressSample { now_ms: u64 },
    /// Tear everything down.
    ShutdownRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
