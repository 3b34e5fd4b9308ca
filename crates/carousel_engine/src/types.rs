use std::fmt;

use thiserror::Error;

use crate::ParseError;

/// Which feed to pull: the store locale and the app identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub locale: String,
    pub app_id: String,
}

impl FeedRequest {
    pub fn new(locale: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            app_id: app_id.into(),
        }
    }
}

/// Transport-level failure while downloading the feed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Anything that can go wrong producing feed entries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("malformed feed: {0}")]
    Parse(#[from] ParseError),
}
