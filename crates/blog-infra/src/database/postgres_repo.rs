//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use blog_core::domain::{PageRequest, Post, PostDetail, PostDraft, PostFilter, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::post_query::{self, PostDetailRow};

/// PostgreSQL post repository over the shared SeaORM pool.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn repo_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let model = post::ActiveModel {
            title: Set(draft.title),
            image: Set(draft.image),
            category_id: Set(draft.category_id),
            description: Set(draft.description),
            content: Set(draft.content),
            status_id: Set(draft.status_id),
            date: Set(Utc::now().into()),
            likes_count: Set(0),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(repo_error)?;

        Ok(model.into())
    }

    async fn find_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<(Vec<PostDetail>, u64), RepoError> {
        tracing::debug!(
            category = ?filter.category,
            keyword = ?filter.keyword,
            page = page.page(),
            limit = page.limit(),
            "Listing posts"
        );

        // Two independent reads, no transaction.
        let rows = post_query::page_query(filter, page)
            .into_model::<PostDetailRow>()
            .all(&self.db);
        let total = post_query::filtered_posts(filter).count(&self.db);

        let (rows, total) = tokio::try_join!(rows, total).map_err(repo_error)?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn find_detail(&self, id: PostId) -> Result<Option<PostDetail>, RepoError> {
        tracing::debug!(post_id = id, "Finding post by id");

        let row = post_query::detail_query(id)
            .into_model::<PostDetailRow>()
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(draft.title))
            .col_expr(post::Column::Image, Expr::value(draft.image))
            .col_expr(post::Column::CategoryId, Expr::value(draft.category_id))
            .col_expr(post::Column::Description, Expr::value(draft.description))
            .col_expr(post::Column::Content, Expr::value(draft.content))
            .col_expr(post::Column::StatusId, Expr::value(draft.status_id))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
