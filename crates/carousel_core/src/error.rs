use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The rating distribution held no ratings, so no average exists.
    #[error("cannot aggregate an empty feed: total rating count is zero")]
    InvalidAggregation,
    /// Entry selection was attempted with no entries to choose from.
    #[error("no feed entries available for display")]
    EmptyFeed,
}
