// src/store.rs

use std::{collections::HashSet, fmt, fs, path::Path};

use chrono::Utc;
use serde::Deserialize;

use crate::models::{comment::Comment, user::User, video::Video};

/// Next id to hand out for each collection.
/// Counters only move forward, so ids are never reused after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextIds {
    pub users: i64,
    pub videos: i64,
    pub comments: i64,
}

impl Default for NextIds {
    fn default() -> Self {
        Self {
            users: 1,
            videos: 1,
            comments: 1,
        }
    }
}

/// Contents of a seed file. Every collection is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub users: Vec<User>,
    pub videos: Vec<Video>,
    pub comments: Vec<Comment>,
}

/// Seed data that would break id uniqueness or the id counters.
#[derive(Debug, PartialEq, Eq)]
pub enum SeedError {
    DuplicateId { collection: &'static str, id: i64 },
    IdOverflow { collection: &'static str },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::DuplicateId { collection, id } => {
                write!(f, "duplicate id {} in seeded {}", id, collection)
            }
            SeedError::IdOverflow { collection } => {
                write!(f, "seeded {} leave no room for another id", collection)
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Next free id for a seeded collection, checking that no id repeats.
fn next_id(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
) -> Result<i64, SeedError> {
    let mut seen = HashSet::new();
    let mut max: i64 = 0;
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { collection, id });
        }
        max = max.max(id);
    }
    max.checked_add(1)
        .ok_or(SeedError::IdOverflow { collection })
}

/// In-memory holder of users, videos and comments.
///
/// Collections keep insertion order and are searched linearly by id.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    videos: Vec<Video>,
    comments: Vec<Comment>,
    next_ids: NextIds,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed data.
    /// Each counter starts right after the largest seeded id of its collection.
    /// Fails if a collection repeats an id or its next id would overflow.
    pub fn from_seed(seed: Seed) -> Result<Self, SeedError> {
        let Seed {
            users,
            videos,
            mut comments,
        } = seed;

        for comment in &mut comments {
            let mut seen = HashSet::new();
            comment.likes.retain(|id| seen.insert(*id));
        }

        let next_ids = NextIds {
            users: next_id("users", users.iter().map(|u| u.id))?,
            videos: next_id("videos", videos.iter().map(|v| v.id))?,
            comments: next_id("comments", comments.iter().map(|c| c.id))?,
        };

        Ok(Self {
            users,
            videos,
            comments,
            next_ids,
        })
    }

    /// Reads a JSON seed document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&raw)?;
        Ok(Self::from_seed(seed)?)
    }

    pub fn next_ids(&self) -> NextIds {
        self.next_ids
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_name(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn video(&self, id: i64) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn comment(&self, id: i64) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn comment_mut(&mut self, id: i64) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == id)
    }

    /// Users matching `ids`, in the order given. Unknown ids are skipped.
    pub fn users_by_ids(&self, ids: &[i64]) -> Vec<User> {
        ids.iter().filter_map(|&id| self.user(id)).cloned().collect()
    }

    pub fn insert_user(&mut self, username: String) -> User {
        let user = User {
            id: self.next_ids.users,
            username,
            created_at: Utc::now(),
        };
        self.next_ids.users += 1;
        self.users.push(user.clone());
        user
    }

    pub fn insert_video(&mut self, title: String, url: String) -> Video {
        let video = Video {
            id: self.next_ids.videos,
            title,
            url,
            created_at: Utc::now(),
        };
        self.next_ids.videos += 1;
        self.videos.push(video.clone());
        video
    }

    /// Appends a new comment. Callers check that the user and video exist.
    pub fn insert_comment(&mut self, text: String, user_id: i64, video_id: i64) -> Comment {
        let comment = Comment::new(self.next_ids.comments, text, user_id, video_id);
        self.next_ids.comments += 1;
        self.comments.push(comment.clone());
        comment
    }

    /// Removes a comment. Its likes live inside it, so nothing else needs cleanup.
    pub fn remove_comment(&mut self, id: i64) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == id)?;
        Some(self.comments.remove(index))
    }
}
