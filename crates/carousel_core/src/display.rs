use std::time::Duration;

use crate::{CoreError, FeedEntry};

/// A stats slide is interposed whenever `(offset + 1)` is a multiple of this.
pub const STATS_EVERY: u64 = 5;
/// Delay from a transition tick until the slide change is applied.
pub const TRANSITION_APPLY_DELAY: Duration = Duration::from_millis(300);
/// Delay from a transition tick until the transition overlay clears.
pub const TRANSITION_SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Review,
    WordCloudStats,
    DistributionStats,
}

/// The two delayed halves of a transition started by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Apply,
    Settle,
}

impl TransitionPhase {
    pub fn delay(self) -> Duration {
        match self {
            TransitionPhase::Apply => TRANSITION_APPLY_DELAY,
            TransitionPhase::Settle => TRANSITION_SETTLE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub mode: DisplayMode,
    pub stats_cycle_count: u64,
    pub offset: u64,
    pub is_transitioning: bool,
}

/// Rotates through reviews, interposing alternating stats slides.
///
/// The entry on screen is always the one *after* `offset`; see
/// [`DisplayCycle::selected_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayCycle {
    state: DisplayState,
}

impl DisplayCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// First half of a tick: raise the transition overlay.
    pub fn begin_transition(&mut self) {
        self.state.is_transitioning = true;
    }

    /// Applies the slide change for one tick.
    pub fn advance(&mut self) {
        let state = &mut self.state;
        let stats_due = (state.offset + 1) % STATS_EVERY == 0;
        if stats_due && state.mode == DisplayMode::Review {
            state.stats_cycle_count += 1;
            state.mode = if state.stats_cycle_count % 2 == 1 {
                DisplayMode::WordCloudStats
            } else {
                DisplayMode::DistributionStats
            };
        } else {
            state.offset += 1;
            state.mode = DisplayMode::Review;
        }
    }

    /// Last half of a tick: drop the transition overlay.
    pub fn finish_transition(&mut self) {
        self.state.is_transitioning = false;
    }

    pub fn apply_phase(&mut self, phase: TransitionPhase) {
        match phase {
            TransitionPhase::Apply => self.advance(),
            TransitionPhase::Settle => self.finish_transition(),
        }
    }

    /// Index of the review on screen: one ahead of the offset.
    pub fn selected_index(&self, entry_count: usize) -> Result<usize, CoreError> {
        if entry_count == 0 {
            return Err(CoreError::EmptyFeed);
        }
        let next = self.state.offset.wrapping_add(1);
        Ok((next % entry_count as u64) as usize)
    }

    pub fn select<'a>(&self, entries: &'a [FeedEntry]) -> Result<&'a FeedEntry, CoreError> {
        let idx = self.selected_index(entries.len())?;
        Ok(&entries[idx])
    }
}
