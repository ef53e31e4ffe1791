use async_trait::async_trait;

use crate::domain::{PageRequest, Post, PostDetail, PostDraft, PostFilter, PostId, PostPage};
use crate::error::RepoError;

/// Post repository - storage operations behind the posts endpoints.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post; the store assigns `id` and `date`.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Fetch one filtered page, newest first, together with the total number
    /// of posts matching the same filter.
    ///
    /// The two values are independent reads and may disagree under
    /// concurrent writes.
    async fn find_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<(Vec<PostDetail>, u64), RepoError>;

    /// Find a post joined with its category and status.
    async fn find_detail(&self, id: PostId) -> Result<Option<PostDetail>, RepoError>;

    /// Replace all mutable fields. Returns `RepoError::NotFound` if no row has `id`.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<(), RepoError>;

    /// Delete a post. Returns `RepoError::NotFound` if no row has `id`.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Fetch a page and assemble its pagination metadata.
    async fn search(&self, filter: &PostFilter, page: PageRequest) -> Result<PostPage, RepoError> {
        let (posts, total) = self.find_page(filter, page).await?;
        Ok(PostPage::assemble(page, total, posts))
    }
}
