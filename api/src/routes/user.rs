use crate::{AppState, dto::UsersResponse, errors::ApiError, models::User};
use axum::{Json, extract::State};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.db.call(User::list).await?;

    Ok(Json(UsersResponse { users }))
}
