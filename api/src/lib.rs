// ============================================================================
// RADIOCALIO API SERVER
// ============================================================================

// - Users and blog posts read from a single SQLite file
// - Post creation with presence checks
// - Published / all post listings joined with their authors
// - Anonymous thumbs up/down song ratings
// - Static asset serving
// - Structured logging

pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod models;
pub mod rater;
pub mod routes;
pub mod states;

pub use config::Config;
pub use db::{Database, StorageError};
pub use states::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Endpoint table logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Server status"),
    ("GET", "/api/users", "All users"),
    ("GET", "/api/posts", "All posts"),
    ("GET", "/api/posts/published", "Published posts only"),
    ("GET", "/api/posts/{id}", "Specific post"),
    ("POST", "/api/posts", "Create new post"),
    ("GET", "/api/ratings/song", "Ratings for a song"),
    ("POST", "/api/ratings", "Rate a song"),
];

/// Builds the router. Anything that is not an API route is looked up in
/// `static_dir`.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::status))
        .route("/api/users", get(routes::list_users))
        .route(
            "/api/posts",
            get(routes::list_posts).post(routes::create_post),
        )
        .route("/api/posts/published", get(routes::list_published_posts))
        .route("/api/posts/{id}", get(routes::get_post))
        .route("/api/ratings/song", get(routes::get_song_ratings))
        .route("/api/ratings", post(routes::rate_song))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
