//! Review carousel core: pure aggregation, display state machine and view-model helpers.
mod aggregate;
mod display;
mod effect;
mod entry;
mod error;
mod msg;
mod progress;
mod refresh;
mod state;
mod update;
mod view_model;

pub use aggregate::{
    aggregate, filter_entries, rating_average, rating_distribution, word_cloud,
    AggregationResult, RatingBucket, WordCount, HAPPY_MODE_THRESHOLD, INITIAL_WORD_WEIGHT,
    MIN_WORD_LEN, WORD_CLOUD_LIMIT,
};
pub use display::{
    DisplayCycle, DisplayMode, DisplayState, TransitionPhase, STATS_EVERY,
    TRANSITION_APPLY_DELAY, TRANSITION_SETTLE_DELAY,
};
pub use effect::Effect;
pub use entry::{FeedEntry, Palette, Rating};
pub use error::CoreError;
pub use msg::Msg;
pub use progress::{percent, ProgressTimer, DEFAULT_SAMPLE_INTERVAL};
pub use refresh::{Completion, FetchSeq, RefreshState};
pub use state::{AppState, CoreSettings};
pub use update::update;
pub use view_model::{
    AppViewModel, DistributionSlide, LoadStatus, ReviewSlide, Slide, WordCloudItem,
};
