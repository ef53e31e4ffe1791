//! In-memory post repository - used as fallback when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{PageRequest, Post, PostDetail, PostDraft, PostFilter, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    last_id: PostId,
}

/// In-memory posts table with fixed category and status reference data.
///
/// Mirrors the Postgres schema's behavior: serial ids, foreign keys checked
/// on write, joined reads. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    categories: HashMap<i32, String>,
    statuses: HashMap<i32, String>,
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new<C, S>(categories: C, statuses: S) -> Self
    where
        C: IntoIterator<Item = (i32, String)>,
        S: IntoIterator<Item = (i32, String)>,
    {
        Self {
            categories: categories.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
            store: RwLock::new(Store::default()),
        }
    }

    fn check_references(&self, draft: &PostDraft) -> Result<(), RepoError> {
        if !self.categories.contains_key(&draft.category_id) {
            return Err(RepoError::Query(format!(
                "foreign key violation: category_id {} does not exist",
                draft.category_id
            )));
        }
        if !self.statuses.contains_key(&draft.status_id) {
            return Err(RepoError::Query(format!(
                "foreign key violation: status_id {} does not exist",
                draft.status_id
            )));
        }
        Ok(())
    }

    /// Inner join: posts whose references are missing are skipped.
    fn join(&self, post: &Post) -> Option<PostDetail> {
        Some(PostDetail {
            id: post.id,
            image: post.image.clone(),
            category: self.categories.get(&post.category_id)?.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            date: post.date,
            content: post.content.clone(),
            status: self.statuses.get(&post.status_id)?.clone(),
            likes_count: post.likes_count,
        })
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        let categories = [(1, "Cat"), (2, "General"), (3, "Inspiration")];
        let statuses = [(1, "draft"), (2, "publish")];

        Self::new(
            categories.map(|(id, name)| (id, name.to_string())),
            statuses.map(|(id, status)| (id, status.to_string())),
        )
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        self.check_references(&draft)?;

        let mut store = self.store.write().await;
        store.last_id += 1;
        let post = Post::new(store.last_id, draft);
        store.posts.push(post.clone());

        Ok(post)
    }

    async fn find_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<(Vec<PostDetail>, u64), RepoError> {
        let store = self.store.read().await;

        let mut matching: Vec<PostDetail> = store
            .posts
            .iter()
            .filter_map(|post| self.join(post))
            .filter(|detail| filter.matches(detail))
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let rows = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();

        Ok((rows, total))
    }

    async fn find_detail(&self, id: PostId) -> Result<Option<PostDetail>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .posts
            .iter()
            .find(|post| post.id == id)
            .and_then(|post| self.join(post)))
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<(), RepoError> {
        self.check_references(&draft)?;

        let mut store = self.store.write().await;
        let post = store
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(RepoError::NotFound)?;
        post.replace_with(draft);

        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.posts.len();
        store.posts.retain(|post| post.id != id);

        if store.posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
