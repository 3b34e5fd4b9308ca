use std::time::Duration;

use crate::{FetchSeq, TransitionPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchFeed { seq: FetchSeq },
    /// Start the transition and progress sampling timers.
    StartDisplayCycle,
    ScheduleTransitionPhase {
        phase: TransitionPhase,
        after: Duration,
    },
    /// Cancel every timer and pending callback.
    Shutdown,
}
