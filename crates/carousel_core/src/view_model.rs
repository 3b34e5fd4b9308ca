use crate::{DisplayState, FetchSeq, Rating, RatingBucket, WordCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No snapshot with displayable entries yet; show a spinner.
    #[default]
    Waiting,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub status: LoadStatus,
    pub first_load: bool,
    /// A refresh is outstanding while older data is still on screen.
    pub refreshing: bool,
    pub snapshot_seq: Option<FetchSeq>,
    pub display: DisplayState,
    pub slide: Option<Slide>,
    pub progress_percent: f64,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    Review(ReviewSlide),
    WordCloud(Vec<WordCloudItem>),
    Distribution(DistributionSlide),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSlide {
    pub index: usize,
    pub rating: Rating,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCloudItem {
    pub word: String,
    pub weight: f64,
    pub font_size: f64,
}

impl WordCloudItem {
    pub(crate) fn from_word(word: &WordCount) -> Self {
        Self {
            word: word.word.clone(),
            weight: word.weight,
            font_size: word.weight.log2() * 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlide {
    pub buckets: Vec<RatingBucket>,
    pub average: f64,
    /// Average rounded to whole stars.
    pub stars: u8,
}
