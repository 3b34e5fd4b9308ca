use carousel_core::{FeedEntry, Rating};
use carousel_logging::carousel_debug;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid json: {0}")]
    Json(String),
    #[error("payload has no `feed` object")]
    MissingFeed,
    #[error("entry {index} has invalid rating label {label:?}")]
    InvalidRating { index: usize, label: String },
}

#[derive(Debug, Deserialize)]
struct Document {
    feed: Option<Feed>,
}

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    entry: Option<OneOrMany<RawEntry>>,
}

/// The feed collapses a single entry into a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "im:rating")]
    rating: Option<Label>,
    author: Option<Author>,
    content: Option<Label>,
}

#[derive(Debug, Deserialize)]
struct Label {
    label: String,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: Label,
}

/// Parses a customer-reviews JSON page into feed entries, in feed order.
///
/// Records without a rating (the app description record some pages lead
/// with) are skipped.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>, ParseError> {
    let document: Document =
        serde_json::from_slice(bytes).map_err(|err| ParseError::Json(err.to_string()))?;
    let feed = document.feed.ok_or(ParseError::MissingFeed)?;

    let raw = match feed.entry {
        None => Vec::new(),
        Some(OneOrMany::One(entry)) => vec![entry],
        Some(OneOrMany::Many(entries)) => entries,
    };

    let mut entries = Vec::with_capacity(raw.len());
    for (index, record) in raw.into_iter().enumerate() {
        let Some(rating_label) = record.rating else {
            carousel_debug!("Skipping unrated feed record {}", index);
            continue;
        };
        let rating = parse_rating(&rating_label.label).ok_or_else(|| ParseError::InvalidRating {
            index,
            label: rating_label.label.clone(),
        })?;
        entries.push(FeedEntry::new(
            rating,
            record.author.map(|a| a.name.label).unwrap_or_default(),
            record.content.map(|c| c.label).unwrap_or_default(),
        ));
    }
    Ok(entries)
}

fn parse_rating(label: &str) -> Option<Rating> {
    label.trim().parse::<u8>().ok().and_then(Rating::new)
}
