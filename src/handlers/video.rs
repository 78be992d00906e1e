use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError, models::video::CreateVideoRequest, state::SharedStore, utils::id::parse_id,
};

/// Lists all videos.
pub async fn list_videos(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    Ok(Json(store.videos().to_vec()))
}

/// Retrieves a single video by ID.
pub async fn get_video(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let store = store.read().await;
    let video = store
        .video(id)
        .cloned()
        .ok_or(AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(video))
}

/// Registers a new video.
pub async fn create_video(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateVideoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut store = store.write().await;
    let video = store.insert_video(payload.title, payload.url);
    tracing::info!(video_id = video.id, "Video created");

    Ok((StatusCode::CREATED, Json(video)))
}
