//! Review carousel engine: feed fetching, parsing and timers.
mod engine;
mod fetch;
mod parse;
mod timers;
mod types;

pub use engine::EngineHandle;
pub use fetch::{feed_url, FeedSource, FetchSettings, ReqwestFeedSource, DEFAULT_FEED_BASE_URL};
pub use parse::{parse_feed, ParseError};
pub use timers::{Clock, TimerSet};
pub use types::{FailureKind, FeedError, FeedRequest, FetchError};
