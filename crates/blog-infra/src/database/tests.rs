use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

use blog_core::domain::{PageRequest, PostDraft, PostFilter};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn published_at() -> DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap().into()
}

fn draft() -> PostDraft {
    PostDraft {
        title: "Understanding Cat Behavior".to_string(),
        image: "https://example.com/cat.jpg".to_string(),
        category_id: 1,
        description: "Why cats do what they do".to_string(),
        content: "Cats communicate through body language.".to_string(),
        status_id: 2,
    }
}

fn detail_row(id: i32, title: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("image", Value::from("https://example.com/cat.jpg")),
        ("category", Value::from("General")),
        ("title", Value::from(title)),
        ("description", Value::from("desc")),
        ("date", Value::from(published_at())),
        ("content", Value::from("body")),
        ("status", Value::from("publish")),
        ("likes_count", Value::from(3)),
    ])
}

fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::from(total))])
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_create_returns_stored_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post::Model {
            id: 11,
            title: draft().title,
            image: draft().image,
            category_id: 1,
            description: draft().description,
            content: draft().content,
            status_id: 2,
            date: published_at(),
            likes_count: 0,
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.create(draft()).await.unwrap();

    assert_eq!(post.id, 11);
    assert_eq!(post.title, "Understanding Cat Behavior");
    assert_eq!(post.likes_count, 0);
}

#[tokio::test]
async fn test_find_detail_joins_category_and_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![detail_row(5, "Cats at night")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_detail(5).await.unwrap().expect("post exists");

    assert_eq!(post.id, 5);
    assert_eq!(post.title, "Cats at night");
    assert_eq!(post.category, "General");
    assert_eq!(post.status, "publish");
    assert_eq!(post.likes_count, 3);
}

#[tokio::test]
async fn test_find_detail_missing_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_detail(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_last_page_of_seven() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![detail_row(1, "Oldest post")]])
        .append_query_results([vec![count_row(7)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let page = repo
        .search(&PostFilter::default(), PageRequest::new(Some(2), Some(6)))
        .await
        .unwrap();

    assert_eq!(page.total_posts, 7);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.previous_page, Some(1));
    assert_eq!(page.next_page, None);
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(0)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(
        repo.update(99, draft()).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_update_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(1)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.update(1, draft()).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(0)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(repo.delete(99).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(1)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.delete(1).await.is_ok());
}

#[tokio::test]
async fn test_store_failure_is_a_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation \"posts\" does not exist".to_string())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(
        repo.find_detail(1).await,
        Err(RepoError::Query(_))
    ));
}
