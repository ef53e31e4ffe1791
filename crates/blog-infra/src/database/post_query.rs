//! Query shapes for the posts listing.
//!
//! The page query and the count query are both derived from
//! [`filtered_posts`], so they always share one join and one predicate.

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait, Select,
};

use blog_core::domain::{PageRequest, PostDetail, PostFilter, PostId};

use super::entity::{category, post, status};

/// Row shape of the three-way join returned to clients.
#[derive(Debug, FromQueryResult)]
pub struct PostDetailRow {
    pub id: i32,
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: sea_orm::prelude::DateTimeWithTimeZone,
    pub content: String,
    pub status: String,
    pub likes_count: i32,
}

impl From<PostDetailRow> for PostDetail {
    fn from(row: PostDetailRow) -> Self {
        Self {
            id: row.id,
            image: row.image,
            category: row.category,
            title: row.title,
            description: row.description,
            date: row.date.into(),
            content: row.content,
            status: row.status,
            likes_count: row.likes_count,
        }
    }
}

/// Build the listing predicate as independent clauses joined with AND.
///
/// Returns `None` when the filter is empty so no WHERE clause is emitted.
pub fn post_predicate(filter: &PostFilter) -> Option<Condition> {
    if filter.is_empty() {
        return None;
    }

    let mut clauses = Condition::all();

    if let Some(category) = filter.category.as_deref() {
        clauses = clauses
            .add(Expr::col((category::Entity, category::Column::Name)).ilike(contains(category)));
    }

    if let Some(keyword) = filter.keyword.as_deref() {
        let text_columns = [
            post::Column::Title,
            post::Column::Description,
            post::Column::Content,
        ];
        let any_text = text_columns
            .into_iter()
            .fold(Condition::any(), |any, column| {
                any.add(Expr::col((post::Entity, column)).ilike(contains(keyword)))
            });
        clauses = clauses.add(any_text);
    }

    Some(clauses)
}

/// `%term%` with LIKE metacharacters in `term` escaped. Backslash is the
/// default LIKE escape character in Postgres.
fn contains(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{escaped}%"))
}

fn joined_posts() -> Select<post::Entity> {
    post::Entity::find()
        .join(JoinType::InnerJoin, post::Relation::Category.def())
        .join(JoinType::InnerJoin, post::Relation::Status.def())
}

/// Posts joined with categories and statuses, narrowed by the filter.
/// Used as-is for the count query.
pub fn filtered_posts(filter: &PostFilter) -> Select<post::Entity> {
    joined_posts().apply_if(post_predicate(filter), |select, predicate| {
        select.filter(predicate)
    })
}

fn detail_columns(select: Select<post::Entity>) -> Select<post::Entity> {
    select
        .select_only()
        .column(post::Column::Id)
        .column(post::Column::Image)
        .column_as(category::Column::Name, "category")
        .column(post::Column::Title)
        .column(post::Column::Description)
        .column(post::Column::Date)
        .column(post::Column::Content)
        .column(status::Column::Status)
        .column(post::Column::LikesCount)
}

/// One page of the filtered listing, newest first. Posts sharing a date are
/// ordered by id so pages stay stable across requests.
pub fn page_query(filter: &PostFilter, page: PageRequest) -> Select<post::Entity> {
    detail_columns(filtered_posts(filter))
        .order_by_desc(post::Column::Date)
        .order_by_desc(post::Column::Id)
        .limit(page.limit())
        .offset(page.offset())
}

pub fn detail_query(id: PostId) -> Select<post::Entity> {
    detail_columns(joined_posts()).filter(post::Column::Id.eq(id))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, Value};

    use super::*;

    fn filter(category: Option<&str>, keyword: Option<&str>) -> PostFilter {
        PostFilter::new(category.map(String::from), keyword.map(String::from))
    }

    fn sql(select: Select<post::Entity>) -> String {
        select.build(DatabaseBackend::Postgres).to_string()
    }

    #[test]
    fn test_empty_filter_builds_no_predicate() {
        assert!(post_predicate(&PostFilter::default()).is_none());
        assert!(post_predicate(&filter(Some(""), Some(""))).is_none());
    }

    #[test]
    fn test_no_filter_has_no_where_clause() {
        let rendered = sql(filtered_posts(&PostFilter::default()));

        assert!(rendered.contains(r#"INNER JOIN "categories""#));
        assert!(rendered.contains(r#"INNER JOIN "statuses""#));
        assert!(!rendered.contains("WHERE"));
    }

    #[test]
    fn test_category_only() {
        let rendered = sql(filtered_posts(&filter(Some("tech"), None)));

        assert!(rendered.contains(r#""categories"."name" ILIKE '%tech%'"#));
        assert!(!rendered.contains(r#""posts"."title" ILIKE"#));
    }

    #[test]
    fn test_keyword_searches_three_columns() {
        let rendered = sql(filtered_posts(&filter(None, Some("rust"))));

        assert!(rendered.contains(r#""posts"."title" ILIKE '%rust%'"#));
        assert!(rendered.contains(r#""posts"."description" ILIKE '%rust%'"#));
        assert!(rendered.contains(r#""posts"."content" ILIKE '%rust%'"#));
        assert_eq!(rendered.matches(" OR ").count(), 2);
        assert!(!rendered.contains(r#""categories"."name" ILIKE"#));
    }

    #[test]
    fn test_category_and_keyword_are_anded() {
        let rendered = sql(filtered_posts(&filter(Some("tech"), Some("rust"))));

        assert!(rendered.contains(
            r#"WHERE ("categories"."name" ILIKE '%tech%') AND (("posts"."title" ILIKE '%rust%') OR "#
        ));
        assert_eq!(rendered.matches(" OR ").count(), 2);
    }

    #[test]
    fn test_wildcards_in_input_are_escaped() {
        let stmt = filtered_posts(&filter(None, Some("50%_off")))
            .build(DatabaseBackend::Postgres);
        let values = stmt.values.expect("keyword is bound").0;

        assert!(values.contains(&Value::from("%50\\%\\_off%")));
    }

    #[test]
    fn test_page_query_reuses_the_count_predicate() {
        let f = filter(Some("tech"), Some("rust"));
        let counted = sql(filtered_posts(&f));
        let predicate = counted
            .split_once(" WHERE ")
            .map(|(_, predicate)| predicate.to_string())
            .expect("filtered query has a WHERE clause");

        let paged = sql(page_query(&f, PageRequest::new(Some(2), Some(6))));

        assert!(paged.contains(&format!(" WHERE {predicate} ORDER BY")));
    }

    #[test]
    fn test_page_query_order_and_window() {
        let paged = sql(page_query(
            &PostFilter::default(),
            PageRequest::new(Some(3), Some(10)),
        ));

        assert!(paged.contains(r#"ORDER BY "posts"."date" DESC, "posts"."id" DESC"#));
        assert!(paged.contains("LIMIT 10 OFFSET 20"));
        assert!(paged.contains(r#""categories"."name" AS "category""#));
    }

    #[test]
    fn test_detail_query_filters_by_id() {
        let rendered = sql(detail_query(42));
        assert!(rendered.contains(r#""posts"."id" = 42"#));
    }
}
