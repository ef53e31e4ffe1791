use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-generated post identifier.
pub type PostId = i32;

/// Post entity - a stored blog post row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    pub content: String,
    pub status_id: i32,
    pub date: DateTime<Utc>,
    pub likes_count: i32,
}

impl Post {
    /// Build a freshly created post from a validated draft.
    ///
    /// `date` is stamped here and never changes afterwards.
    pub fn new(id: PostId, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            image: draft.image,
            category_id: draft.category_id,
            description: draft.description,
            content: draft.content,
            status_id: draft.status_id,
            date: Utc::now(),
            likes_count: 0,
        }
    }

    /// Overwrite every mutable field with the draft. `id`, `date` and
    /// `likes_count` are left alone.
    pub fn replace_with(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.image = draft.image;
        self.category_id = draft.category_id;
        self.description = draft.description;
        self.content = draft.content;
        self.status_id = draft.status_id;
    }
}

/// The six client-writable fields of a post, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    pub content: String,
    pub status_id: i32,
}

/// Read view of a post joined with its category name and status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: PostId,
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub status: String,
    pub likes_count: i32,
}
