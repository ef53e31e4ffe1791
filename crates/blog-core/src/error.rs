//! Storage errors surfaced through the post repository port.

use thiserror::Error;

/// Why a repository call failed.
///
/// `NotFound` is only returned by writes that target a single post; reads
/// report absence as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("post store unavailable: {0}")]
    Connection(String),

    #[error("post query failed: {0}")]
    Query(String),

    #[error("no post with that id")]
    NotFound,
}
