mod requests;
mod responses;

pub use requests::{AuthorRef, CreatePostRequest, PublishedFlag, RateSongRequest, SongQuery};
pub use responses::{
    CreatePostResponse, MessageResponse, PostResponse, PostsResponse, SongRatingsResponse,
    StatusResponse, UsersResponse,
};
