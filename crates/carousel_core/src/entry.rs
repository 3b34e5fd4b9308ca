use std::fmt;

/// A star rating in the closed range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position of this rating in a [`Palette`].
    pub fn palette_index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-submitted review as it appeared in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub rating: Rating,
    pub author: String,
    pub content: String,
}

impl FeedEntry {
    pub fn new(rating: Rating, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            rating,
            author: author.into(),
            content: content.into(),
        }
    }
}

/// Five color tokens, one per rating value, lowest rating first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette([String; 5]);

impl Palette {
    pub fn new(colors: [String; 5]) -> Self {
        Self(colors)
    }

    pub fn color_for(&self, rating: Rating) -> &str {
        &self.0[rating.palette_index()]
    }

    pub fn colors(&self) -> &[String; 5] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self([
            "#e74c3c".to_string(),
            "#e67e22".to_string(),
            "#f1c40f".to_string(),
            "#2ecc71".to_string(),
            "#27ae60".to_string(),
        ])
    }
}
