use crate::{
    AppState,
    dto::{AuthorRef, CreatePostRequest, CreatePostResponse, PostResponse, PostsResponse},
    errors::ApiError,
    models::{NewPost, Post, PublishedPost},
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<PostsResponse>, ApiError> {
    let posts = state.db.call(Post::list).await?;

    Ok(Json(PostsResponse { posts }))
}

/// GET /api/posts/published
pub async fn list_published_posts(
    State(state): State<AppState>,
) -> Result<Json<PostsResponse<PublishedPost>>, ApiError> {
    let posts = state.db.call(PublishedPost::list).await?;

    Ok(Json(PostsResponse { posts }))
}

/// GET /api/posts/{id}
///
/// An id that is not an integer names no post.
pub async fn get_post(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PostResponse>, ApiError> {
    let not_found = || ApiError::NotFound("Post not found".into());

    let Path(id) = id.map_err(|_| not_found())?;
    let post = state
        .db
        .call(move |conn| Post::find(conn, id))
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(PostResponse { post }))
}

/// POST /api/posts
/// Body: { "title": "...", "content": "...", "author_id": 1, "published": 0 }
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePostResponse>), ApiError> {
    let Json(payload) = payload?;

    payload
        .validate()
        .map_err(|_| ApiError::BadRequest("Title and author_id are required".into()))?;

    let author_id = payload.author_id.as_ref().and_then(AuthorRef::id);
    let (Some(title), Some(author_id)) = (payload.title, author_id) else {
        return Err(ApiError::BadRequest(
            "Title and author_id are required".into(),
        ));
    };

    let post = NewPost {
        title,
        content: payload.content,
        author_id,
        published: payload.published.map_or(0, |flag| flag.as_int()),
    };

    let post_id = state.db.call(move |conn| post.insert(conn)).await?;

    info!(post_id, author_id, "Post created");

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created successfully",
            post_id,
        }),
    ))
}
