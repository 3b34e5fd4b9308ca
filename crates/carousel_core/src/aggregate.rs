//! Feed aggregation: review filtering, word cloud, rating distribution and average.
use std::collections::HashMap;

use crate::{CoreError, FeedEntry, Palette, Rating};

/// Maximum number of words kept in a word cloud.
pub const WORD_CLOUD_LIMIT: usize = 200;
/// Tokens must be longer than this to enter the word cloud.
pub const MIN_WORD_LEN: usize = 3;
/// Weight given to a word the first time it is seen.
pub const INITIAL_WORD_WEIGHT: f64 = 5.0;
/// Ratings at or below this are hidden from the carousel in happy mode.
pub const HAPPY_MODE_THRESHOLD: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct WordCount {
    pub word: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingBucket {
    pub rating: Rating,
    pub count: u32,
    pub color: String,
}

/// Snapshot produced by one aggregation pass over a feed page.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub entries: Vec<FeedEntry>,
    pub word_cloud: Vec<WordCount>,
    pub distribution: Vec<RatingBucket>,
    pub average: f64,
}

/// Aggregates one feed page.
///
/// `entries` in the result honor `happy_mode`; the statistics always cover
/// the full input.
pub fn aggregate(
    entries: &[FeedEntry],
    happy_mode: bool,
    palette: &Palette,
) -> Result<AggregationResult, CoreError> {
    let distribution = rating_distribution(entries, palette);
    let average = rating_average(&distribution)?;

    Ok(AggregationResult {
        entries: filter_entries(entries, happy_mode),
        word_cloud: word_cloud(entries),
        distribution,
        average,
    })
}

pub fn filter_entries(entries: &[FeedEntry], happy_mode: bool) -> Vec<FeedEntry> {
    if !happy_mode {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| entry.rating.value() > HAPPY_MODE_THRESHOLD)
        .cloned()
        .collect()
}

/// Builds the word cloud: every repeat of a word doubles its weight.
pub fn word_cloud(entries: &[FeedEntry]) -> Vec<WordCount> {
    let mut index_by_word: HashMap<String, usize> = HashMap::new();
    let mut words: Vec<WordCount> = Vec::new();

    for entry in entries {
        let cleaned = strip_to_letters(&entry.content);
        for token in cleaned.split_whitespace() {
            if token.len() <= MIN_WORD_LEN {
                continue;
            }
            match index_by_word.get(token) {
                Some(&idx) => words[idx].weight *= 2.0,
                None => {
                    index_by_word.insert(token.to_string(), words.len());
                    words.push(WordCount {
                        word: token.to_string(),
                        weight: INITIAL_WORD_WEIGHT,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal weights.
    words.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    words.truncate(WORD_CLOUD_LIMIT);
    words
}

/// Keeps ASCII letters and plain spaces only; everything else is dropped,
/// including newlines, so words on either side of one are joined.
fn strip_to_letters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}

/// Counts ratings per value, ascending. Values that never occur get no bucket.
pub fn rating_distribution(entries: &[FeedEntry], palette: &Palette) -> Vec<RatingBucket> {
    // Indexed by rating value; slot 0 is the unused "rating 0" placeholder.
    let mut slots: [Option<RatingBucket>; Rating::MAX as usize + 1] = Default::default();

    for entry in entries {
        let slot = &mut slots[usize::from(entry.rating.value())];
        match slot {
            Some(bucket) => bucket.count += 1,
            None => {
                *slot = Some(RatingBucket {
                    rating: entry.rating,
                    count: 1,
                    color: palette.color_for(entry.rating).to_string(),
                });
            }
        }
    }

    slots.into_iter().skip(1).flatten().collect()
}

/// Weighted mean rating over a distribution.
pub fn rating_average(distribution: &[RatingBucket]) -> Result<f64, CoreError> {
    let mut total_count = 0u64;
    let mut total_value = 0u64;
    for bucket in distribution {
        let count = u64::from(bucket.count);
        total_count += count;
        total_value += u64::from(bucket.rating.value()) * count;
    }

    if total_count == 0 {
        return Err(CoreError::InvalidAggregation);
    }
    Ok(total_value as f64 / total_count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_drops_digits_punctuation_and_newlines() {
        assert_eq!(strip_to_letters("Great app!! 10/10 Love"), "Great app  Love");
        assert_eq!(strip_to_letters("fine\nwork"), "finework");
        assert_eq!(strip_to_letters("café"), "caf");
    }
}
