use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::comment::{CreateCommentRequest, LikeRequest, UpdateCommentRequest},
    state::SharedStore,
    utils::id::parse_id,
};

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".to_string())
}

/// List all comments in insertion order.
pub async fn list_comments(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    Ok(Json(store.comments().to_vec()))
}

/// Get a single comment by ID.
pub async fn get_comment(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let store = store.read().await;
    let comment = store.comment(id).cloned().ok_or_else(comment_not_found)?;

    Ok(Json(comment))
}

/// Create a new comment.
/// The referenced user and video must exist at creation time.
pub async fn create_comment(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (text, user_id, video_id) = payload.into_fields().ok_or(AppError::BadRequest(
        "Required fields missing: text, userId, videoId".to_string(),
    ))?;

    let mut store = store.write().await;

    if store.user(user_id).is_none() {
        return Err(AppError::BadRequest("User does not exist".to_string()));
    }
    if store.video(video_id).is_none() {
        return Err(AppError::BadRequest("Video does not exist".to_string()));
    }

    let comment = store.insert_comment(text, user_id, video_id);
    tracing::info!(comment_id = comment.id, user_id, video_id, "Comment created");

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Edit a comment's text.
/// Existence is checked before the body, so an unknown ID is 404 even with a bad body.
pub async fn update_comment(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let mut store = store.write().await;
    let comment = store.comment_mut(id).ok_or_else(comment_not_found)?;

    let Json(payload) = payload?;
    let text = payload
        .into_text()
        .ok_or(AppError::BadRequest("Required field missing: text".to_string()))?;

    comment.edit(text);
    tracing::info!(comment_id = id, "Comment updated");

    Ok(Json(comment.clone()))
}

/// Delete a comment.
pub async fn delete_comment(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let mut store = store.write().await;
    store.remove_comment(id).ok_or_else(comment_not_found)?;
    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// List the users who liked a comment, in like order.
/// Likes from users that no longer resolve are skipped.
pub async fn list_likes(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let store = store.read().await;
    let comment = store.comment(id).ok_or_else(comment_not_found)?;
    let users = store.users_by_ids(&comment.likes);

    Ok(Json(users))
}

/// Like a comment on behalf of `userId`.
pub async fn like_comment(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let user_id = payload
        .user_id
        .ok_or(AppError::BadRequest("Required field missing: userId".to_string()))?;

    // Held across check and push, so concurrent likes cannot both pass the duplicate check.
    let mut store = store.write().await;
    let user_exists = store.user(user_id).is_some();
    let comment = store.comment_mut(id).ok_or_else(comment_not_found)?;

    if !user_exists {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    if !comment.add_like(user_id) {
        return Err(AppError::Conflict(
            "User already liked this comment".to_string(),
        ));
    }
    tracing::info!(comment_id = id, user_id, "Comment liked");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Comment liked successfully" })),
    ))
}

/// Remove `userId`'s like from a comment.
pub async fn unlike_comment(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let user_id = payload
        .user_id
        .ok_or(AppError::BadRequest("Required field missing: userId".to_string()))?;

    let mut store = store.write().await;
    let comment = store.comment_mut(id).ok_or_else(comment_not_found)?;

    if !comment.remove_like(user_id) {
        return Err(AppError::NotFound("Like not found".to_string()));
    }
    tracing::info!(comment_id = id, user_id, "Comment unliked");

    Ok(StatusCode::NO_CONTENT)
}
