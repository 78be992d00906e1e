// src/models/video.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// A video that comments are attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,

    /// Where the video is hosted.
    pub url: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// DTO for registering a new video.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,
    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub url: String,
}

/// Validates that a string is a correctly formatted URL.
fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}
