use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError, models::user::CreateUserRequest, state::SharedStore, utils::id::parse_id,
};

/// Lists all users.
pub async fn list_users(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    Ok(Json(store.users().to_vec()))
}

/// Retrieves a single user by ID.
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let store = store.read().await;
    let user = store
        .user(id)
        .cloned()
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Creates a new user. Usernames are unique.
pub async fn create_user(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mut store = store.write().await;
    if store.user_by_name(&payload.username).is_some() {
        return Err(AppError::Conflict(format!(
            "Username '{}' already exists",
            payload.username
        )));
    }

    let user = store.insert_user(payload.username);
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}
