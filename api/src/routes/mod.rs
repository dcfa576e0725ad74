mod post;
mod rating;
mod status;
mod user;

pub use post::{create_post, get_post, list_posts, list_published_posts};
pub use rating::{get_song_ratings, rate_song};
pub use status::{SERVICE_NAME, status};
pub use user::list_users;
