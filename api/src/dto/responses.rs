use crate::models::{Post, RatingSummary, User};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct PostsResponse<T = Post> {
    pub posts: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub message: &'static str,
    pub post_id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Serialize)]
pub struct SongRatingsResponse {
    pub song: Song,
    pub ratings: RatingSummary,
}

impl SongRatingsResponse {
    pub fn new(title: String, artist: String, ratings: RatingSummary) -> Self {
        Self {
            song: Song { title, artist },
            ratings,
        }
    }
}
