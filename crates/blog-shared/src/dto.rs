//! Data Transfer Objects - request/response types for the posts API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Every field is optional at the wire level so that missing fields surface
/// as validation errors rather than opaque JSON parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub status_id: Option<i64>,
}

/// Query string of `GET /posts`.
///
/// `page` and `limit` are kept as raw strings: anything that is not an
/// integer falls back to the default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListQuery {
    pub category: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PostListQuery {
    pub fn page(&self) -> Option<i64> {
        parse_integer(self.page.as_deref())
    }

    pub fn limit(&self) -> Option<i64> {
        parse_integer(self.limit.as_deref())
    }
}

fn parse_integer(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// A post as returned to clients, with category and status resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub status: String,
    pub likes_count: i32,
}

/// Paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub total_posts: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub posts: Vec<PostResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
}
