use carousel_logging::{carousel_debug, carousel_info, carousel_warn};

use crate::refresh::Completion;
use crate::{aggregate, AppState, Effect, FeedEntry, FetchSeq, Msg, TransitionPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // Timers may still deliver a few queued messages after teardown.
    if state.is_shut_down() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::RefreshTick => {
            let seq = state.refresh_mut().begin();
            state.mark_dirty();
            carousel_debug!("Refresh tick, fetching feed seq={}", seq);
            vec![Effect::FetchFeed { seq }]
        }
        Msg::FeedFetched { seq, entries } => feed_fetched(&mut state, seq, &entries),
        Msg::FeedFailed { seq, error } => {
            if state.refresh_mut().finish(seq) == Completion::Apply {
                carousel_warn!(
                    "Feed refresh seq={} failed, keeping previous snapshot: {}",
                    seq,
                    error
                );
                state.record_error(error);
            } else {
                carousel_debug!("Ignoring failure of superseded fetch seq={}", seq);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::DisplayCycleStarted { at_ms } => {
            state.start_progress(at_ms);
            Vec::new()
        }
        Msg::TransitionTick => {
            if !state.cycle_running() {
                return (state, Vec::new());
            }
            state.begin_transition();
            [TransitionPhase::Apply, TransitionPhase::Settle]
                .into_iter()
                .map(|phase| Effect::ScheduleTransitionPhase {
                    phase,
                    after: phase.delay(),
                })
                .collect()
        }
        Msg::TransitionPhase(phase) => {
            state.apply_phase(phase);
            Vec::new()
        }
        Msg::ProgressSample { now_ms } => {
            state.sample_progress(now_ms);
            Vec::new()
        }
        Msg::ShutdownRequested => {
            carousel_info!("Shutdown requested");
            state.shut_down();
            vec![Effect::Shutdown]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn feed_fetched(state: &mut AppState, seq: FetchSeq, entries: &[FeedEntry]) -> Vec<Effect> {
    state.mark_dirty();
    if state.refresh_mut().finish(seq) == Completion::Stale {
        carousel_debug!("Discarding stale feed result seq={}", seq);
        return Vec::new();
    }

    let settings = state.settings();
    let result = match aggregate(entries, settings.happy_mode, &settings.palette) {
        Ok(result) => result,
        Err(err) => {
            carousel_warn!(
                "Aggregation of feed seq={} failed, keeping previous snapshot: {}",
                seq,
                err
            );
            state.record_error(err.to_string());
            return Vec::new();
        }
    };

    carousel_info!(
        "Published snapshot seq={} entries={} shown={} words={} average={:.2}",
        seq,
        entries.len(),
        result.entries.len(),
        result.word_cloud.len(),
        result.average
    );
    state.publish(seq, result);

    if !state.cycle_running() && state.has_displayable_entries() {
        state.set_cycle_running();
        vec![Effect::StartDisplayCycle]
    } else {
        Vec::new()
    }
}
