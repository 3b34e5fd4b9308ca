use std::time::Duration;

use crate::view_model::{
    AppViewModel, DistributionSlide, LoadStatus, ReviewSlide, Slide, WordCloudItem,
};
use crate::{
    AggregationResult, DisplayCycle, DisplayMode, FetchSeq, Palette, ProgressTimer,
    RefreshState, TransitionPhase,
};

/// Immutable settings the core needs from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreSettings {
    pub happy_mode: bool,
    pub palette: Palette,
    /// Period of the display transition timer.
    pub transition_period: Duration,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            happy_mode: false,
            palette: Palette::default(),
            transition_period: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    settings: CoreSettings,
    refresh: RefreshState,
    snapshot: Option<AggregationResult>,
    cycle: DisplayCycle,
    cycle_running: bool,
    progress: Option<ProgressTimer>,
    progress_percent: f64,
    last_error: Option<String>,
    shut_down: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CoreSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> Option<&AggregationResult> {
        self.snapshot.as_ref()
    }

    pub fn cycle(&self) -> &DisplayCycle {
        &self.cycle
    }

    pub fn refresh(&self) -> &RefreshState {
        &self.refresh
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn view(&self) -> AppViewModel {
        let display = self.cycle.state();
        let slide = self.current_slide();
        let status = if slide.is_some() {
            LoadStatus::Ready
        } else {
            LoadStatus::Waiting
        };

        AppViewModel {
            status,
            first_load: self.refresh.first_load(),
            refreshing: self.refresh.loading(),
            snapshot_seq: self.refresh.last_applied(),
            display,
            slide,
            progress_percent: self.progress_percent,
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn refresh_mut(&mut self) -> &mut RefreshState {
        &mut self.refresh
    }

    pub(crate) fn publish(&mut self, seq: FetchSeq, result: AggregationResult) {
        self.refresh.published(seq);
        self.snapshot = Some(result);
        self.last_error = None;
        self.dirty = true;
    }

    pub(crate) fn record_error(&mut self, error: String) {
        self.last_error = Some(error);
        self.dirty = true;
    }

    pub(crate) fn has_displayable_entries(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| !snapshot.entries.is_empty())
    }

    pub(crate) fn cycle_running(&self) -> bool {
        self.cycle_running
    }

    pub(crate) fn set_cycle_running(&mut self) {
        self.cycle_running = true;
    }

    pub(crate) fn start_progress(&mut self, at_ms: u64) {
        self.progress = Some(ProgressTimer::new(self.settings.transition_period, at_ms));
        self.progress_percent = 0.0;
        self.dirty = true;
    }

    pub(crate) fn sample_progress(&mut self, now_ms: u64) {
        let Some(timer) = self.progress else {
            return;
        };
        let percent = timer.percent_at(now_ms);
        if percent != self.progress_percent {
            self.progress_percent = percent;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_transition(&mut self) {
        self.cycle.begin_transition();
        self.dirty = true;
    }

    pub(crate) fn apply_phase(&mut self, phase: TransitionPhase) {
        self.cycle.apply_phase(phase);
        self.dirty = true;
    }

    pub(crate) fn shut_down(&mut self) {
        self.shut_down = true;
        self.dirty = true;
    }

    fn current_slide(&self) -> Option<Slide> {
        let snapshot = self.snapshot.as_ref()?;
        let entry = self.cycle.select(&snapshot.entries).ok()?;

        let slide = match self.cycle.mode() {
            DisplayMode::Review => Slide::Review(ReviewSlide {
                index: self.cycle.selected_index(snapshot.entries.len()).ok()?,
                rating: entry.rating,
                author: entry.author.clone(),
                content: entry.content.clone(),
            }),
            DisplayMode::WordCloudStats => Slide::WordCloud(
                snapshot
                    .word_cloud
                    .iter()
                    .map(WordCloudItem::from_word)
                    .collect(),
            ),
            DisplayMode::DistributionStats => Slide::Distribution(DistributionSlide {
                buckets: snapshot.distribution.clone(),
                average: snapshot.average,
                stars: snapshot.average.round() as u8,
            }),
        };
        Some(slide)
    }
}
