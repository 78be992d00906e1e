use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::id::deserialize_optional_id;

/// A comment left by a user on a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub video_id: i64,

    /// Ids of the users who liked this comment, in like order.
    /// Never holds the same id twice.
    #[serde(default)]
    pub likes: Vec<i64>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Null until the comment is edited.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn new(id: i64, text: String, user_id: i64, video_id: i64) -> Self {
        Self {
            id,
            text,
            user_id,
            video_id,
            likes: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn is_liked_by(&self, user_id: i64) -> bool {
        self.likes.contains(&user_id)
    }

    /// Records a like. Returns `false` if the user already liked the comment.
    pub fn add_like(&mut self, user_id: i64) -> bool {
        if self.is_liked_by(user_id) {
            return false;
        }
        self.likes.push(user_id);
        true
    }

    /// Drops a like. Returns `false` if the user had not liked the comment.
    pub fn remove_like(&mut self, user_id: i64) -> bool {
        match self.likes.iter().position(|&id| id == user_id) {
            Some(index) => {
                self.likes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the text and stamps `updated_at`.
    pub fn edit(&mut self, text: String) {
        self.text = text;
        self.updated_at = Some(Utc::now());
    }
}

/// DTO for creating a new comment.
/// Fields are optional so a missing one is reported with a readable message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub video_id: Option<i64>,
}

impl CreateCommentRequest {
    /// Returns `(text, user_id, video_id)` when every field is present.
    /// Empty text counts as missing.
    pub fn into_fields(self) -> Option<(String, i64, i64)> {
        match (self.text, self.user_id, self.video_id) {
            (Some(text), Some(user_id), Some(video_id)) if !text.is_empty() => {
                Some((text, user_id, video_id))
            }
            _ => None,
        }
    }
}

/// DTO for editing a comment's text.
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: Option<String>,
}

impl UpdateCommentRequest {
    pub fn into_text(self) -> Option<String> {
        self.text.filter(|text| !text.is_empty())
    }
}

/// DTO for liking or unliking a comment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_has_no_likes_and_no_update() {
        let comment = Comment::new(1, "hi".into(), 1, 1);
        assert!(comment.likes.is_empty());
        assert!(comment.updated_at.is_none());
    }

    #[test]
    fn add_like_refuses_duplicates() {
        let mut comment = Comment::new(1, "hi".into(), 1, 1);
        assert!(comment.add_like(5));
        assert!(!comment.add_like(5));
        assert_eq!(comment.likes, vec![5]);
    }

    #[test]
    fn remove_like_reports_absent_user() {
        let mut comment = Comment::new(1, "hi".into(), 1, 1);
        comment.add_like(2);
        comment.add_like(3);
        assert!(!comment.remove_like(9));
        assert!(comment.remove_like(2));
        assert_eq!(comment.likes, vec![3]);
    }

    #[test]
    fn edit_stamps_updated_at() {
        let mut comment = Comment::new(1, "hi".into(), 1, 1);
        comment.edit("hello".into());
        assert_eq!(comment.text, "hello");
        assert!(comment.updated_at.is_some());
    }

    #[test]
    fn serializes_camel_case_with_null_updated_at() {
        let json = serde_json::to_value(Comment::new(4, "hi".into(), 2, 3)).unwrap();
        assert_eq!(json["userId"], 2);
        assert_eq!(json["videoId"], 3);
        assert_eq!(json["likes"], serde_json::json!([]));
        assert!(json["updatedAt"].is_null());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn create_request_treats_empty_text_as_missing() {
        let req: CreateCommentRequest =
            serde_json::from_str(r#"{"text": "", "userId": 1, "videoId": 1}"#).unwrap();
        assert!(req.into_fields().is_none());

        let req: CreateCommentRequest =
            serde_json::from_str(r#"{"text": "hi", "userId": "1", "videoId": 2}"#).unwrap();
        assert_eq!(req.into_fields(), Some(("hi".to_string(), 1, 2)));
    }

    #[test]
    fn update_request_treats_empty_text_as_missing() {
        let req: UpdateCommentRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert!(req.into_text().is_none());

        let req: UpdateCommentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.into_text().is_none());

        let req: UpdateCommentRequest = serde_json::from_str(r#"{"text": "edited"}"#).unwrap();
        assert_eq!(req.into_text().as_deref(), Some("edited"));
    }

    #[test]
    fn like_request_keeps_zero_as_an_id() {
        let req: LikeRequest = serde_json::from_str(r#"{"userId": 0}"#).unwrap();
        assert_eq!(req.user_id, Some(0));
    }
}
