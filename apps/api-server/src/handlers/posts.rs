//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{PageRequest, PostDetail, PostFilter, PostId, PostPage};
use blog_core::error::RepoError;
use blog_shared::dto::{PostListQuery, PostListResponse, PostResponse};
use blog_shared::{DataResponse, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::validation::ValidPost;
use crate::state::AppState;

const CREATE_FAILED: &str = "Server could not create post due to a database error";
const READ_FAILED: &str = "Server could not read post because database issue";
const UPDATE_FAILED: &str = "Server could not update post because database connection";
const DELETE_FAILED: &str = "Server could not delete post because database connection";

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    ValidPost(draft): ValidPost,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create(draft)
        .await
        .map_err(|e| AppError::store(CREATE_FAILED, e))?;

    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(MessageResponse::new("Post created successfully")))
}

/// GET /api/posts?category=&keyword=&page=&limit=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let page = PageRequest::new(query.page(), query.limit());
    let filter = PostFilter::new(query.category, query.keyword);

    let result = state
        .posts
        .search(&filter, page)
        .await
        .map_err(|e| AppError::store(READ_FAILED, e))?;

    Ok(HttpResponse::Ok().json(list_response(result)))
}

/// GET /api/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id)?;

    let post = state
        .posts
        .find_detail(id)
        .await
        .map_err(|e| AppError::store(READ_FAILED, e))?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Server could not find a requested post (post id: {raw_id})"
            ))
        })?;

    Ok(HttpResponse::Ok().json(DataResponse::new(post_response(post))))
}

/// PUT /api/posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    ValidPost(draft): ValidPost,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id)?;

    match state.posts.update(id, draft).await {
        Ok(()) => {
            tracing::info!(post_id = id, "Post updated");
            Ok(HttpResponse::Ok().json(MessageResponse::new("Updated post successfully")))
        }
        Err(RepoError::NotFound) => Err(AppError::NotFound(format!(
            "Server could not find a requested post to update (post id: {raw_id})"
        ))),
        Err(e) => Err(AppError::store(UPDATE_FAILED, e)),
    }
}

/// DELETE /api/posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id)?;

    match state.posts.delete(id).await {
        Ok(()) => {
            tracing::info!(post_id = id, "Post deleted");
            Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted post successfully")))
        }
        Err(RepoError::NotFound) => Err(AppError::NotFound(format!(
            "Server could not find a requested post to delete (post id: {raw_id})"
        ))),
        Err(e) => Err(AppError::store(DELETE_FAILED, e)),
    }
}

/// Post ids are positive serial integers; anything else is rejected before
/// touching the store.
fn parse_post_id(raw: &str) -> AppResult<PostId> {
    raw.parse::<PostId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid post id: {raw}")))
}

fn post_response(post: PostDetail) -> PostResponse {
    PostResponse {
        id: post.id,
        image: post.image,
        category: post.category,
        title: post.title,
        description: post.description,
        date: post.date,
        content: post.content,
        status: post.status,
        likes_count: post.likes_count,
    }
}

fn list_response(page: PostPage) -> PostListResponse {
    PostListResponse {
        total_posts: page.total_posts,
        total_pages: page.total_pages,
        current_page: page.current_page,
        limit: page.limit,
        posts: page.posts.into_iter().map(post_response).collect(),
        next_page: page.next_page,
        previous_page: page.previous_page,
    }
}
