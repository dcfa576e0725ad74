use crate::{
    AppState,
    dto::{MessageResponse, RateSongRequest, SongQuery, SongRatingsResponse},
    errors::ApiError,
    models::{NewRating, RatingOutcome, RatingSummary},
    rater::rater_identifier,
};
use axum::{
    Json,
    extract::{
        ConnectInfo, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{Extensions, HeaderMap, StatusCode},
};
use std::net::SocketAddr;
use tracing::info;
use validator::Validate;

/// GET /api/ratings/song?title=...&artist=...
pub async fn get_song_ratings(
    State(state): State<AppState>,
    query: Result<Query<SongQuery>, QueryRejection>,
) -> Result<Json<SongRatingsResponse>, ApiError> {
    let Query(query) = query?;
    let missing = || ApiError::BadRequest("Title and artist parameters required".into());

    query.validate().map_err(|_| missing())?;
    let (Some(title), Some(artist)) = (query.title, query.artist) else {
        return Err(missing());
    };

    let ratings = {
        let (title, artist) = (title.clone(), artist.clone());
        state
            .db
            .call(move |conn| RatingSummary::for_song(conn, &title, &artist))
            .await?
    };

    Ok(Json(SongRatingsResponse::new(title, artist, ratings)))
}

/// POST /api/ratings
/// Body: { "title": "...", "artist": "...", "album": "...", "rating": 1, "browser_fingerprint": "..." }
pub async fn rate_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    payload: Result<Json<RateSongRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(payload) = payload?;
    let invalid = || ApiError::BadRequest("Title, artist, and rating (1 or -1) are required".into());

    payload.validate().map_err(|_| invalid())?;
    let rating = payload.thumb().ok_or_else(invalid)?;
    let (Some(title), Some(artist)) = (payload.title, payload.artist) else {
        return Err(invalid());
    };

    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let user_identifier = rater_identifier(&headers, peer, &payload.browser_fingerprint);

    let new_rating = NewRating {
        title,
        artist,
        album: payload.album.unwrap_or_default(),
        user_identifier,
        rating,
    };

    let outcome = state.db.call(move |conn| new_rating.save(conn)).await?;

    info!(?outcome, rating, "Song rated");

    Ok(match outcome {
        RatingOutcome::Submitted => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Rating submitted successfully",
            }),
        ),
        RatingOutcome::Updated => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Rating updated successfully",
            }),
        ),
    })
}
