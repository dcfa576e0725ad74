use serde::{Deserialize, Serialize};
use validator::Validate;

/// `published` arrives as either `0`/`1` or `false`/`true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PublishedFlag {
    Bool(bool),
    Int(i64),
}

impl PublishedFlag {
    pub fn as_int(self) -> i64 {
        match self {
            PublishedFlag::Bool(flag) => i64::from(flag),
            PublishedFlag::Int(value) => value,
        }
    }
}

/// `author_id` arrives as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Id(i64),
    Text(String),
}

impl AuthorRef {
    /// The referenced id. `0`, an empty string and non-numeric text count as
    /// no author at all.
    pub fn id(&self) -> Option<i64> {
        let id = match self {
            AuthorRef::Id(id) => *id,
            AuthorRef::Text(text) => text.trim().parse().ok()?,
        };
        (id != 0).then_some(id)
    }
}

/// POST /api/posts
///
/// Only presence is checked. `author_id` is not matched against `users`.
#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(required)]
    pub author_id: Option<AuthorRef>,
    pub published: Option<PublishedFlag>,
}

/// GET /api/ratings/song?title=...&artist=...
#[derive(Debug, Validate, Deserialize)]
pub struct SongQuery {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub artist: Option<String>,
}

/// POST /api/ratings
#[derive(Debug, Validate, Deserialize)]
pub struct RateSongRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub artist: Option<String>,
    pub album: Option<String>,
    pub rating: Option<i64>,
    #[serde(default)]
    pub browser_fingerprint: String,
}

impl RateSongRequest {
    /// The rating, if it is a thumbs up (1) or thumbs down (-1).
    pub fn thumb(&self) -> Option<i64> {
        self.rating.filter(|value| matches!(value, 1 | -1))
    }
}
