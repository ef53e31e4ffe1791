//! Filtering and offset/limit pagination for the post listing.

use serde::{Deserialize, Serialize};

use super::post::PostDetail;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 6;
pub const MAX_LIMIT: u64 = 100;

/// Optional listing filters. Both are case-insensitive substring matches;
/// when both are present a post must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Matched against the joined category name.
    pub category: Option<String>,
    /// Matched against title, description or content.
    pub keyword: Option<String>,
}

impl PostFilter {
    /// Empty strings count as "not provided".
    pub fn new(category: Option<String>, keyword: Option<String>) -> Self {
        Self {
            category: category.filter(|s| !s.is_empty()),
            keyword: keyword.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.keyword.is_none()
    }

    /// Evaluate the filter against an already joined post.
    pub fn matches(&self, post: &PostDetail) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| contains_ignore_case(&post.category, category));

        let keyword_ok = self.keyword.as_deref().is_none_or(|keyword| {
            contains_ignore_case(&post.title, keyword)
                || contains_ignore_case(&post.description, keyword)
                || contains_ignore_case(&post.content, keyword)
        });

        category_ok && keyword_ok
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalized page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Clamp raw values: limit into `1..=100`, page to at least 1 and at most
    /// the last page whose offset still fits a signed 64-bit SQL parameter.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let limit = limit.map_or(DEFAULT_LIMIT, |l| l.clamp(1, MAX_LIMIT as i64) as u64);
        let last_page = i64::MAX as u64 / limit + 1;
        let page = page.map_or(DEFAULT_PAGE, |p| (p.max(1) as u64).min(last_page));
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of listing results plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub total_posts: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub posts: Vec<PostDetail>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}

impl PostPage {
    /// Combine a fetched page with the total match count.
    ///
    /// The count and the page come from separate reads, so `posts.len()` is
    /// not cross-checked against `total_posts`.
    pub fn assemble(request: PageRequest, total_posts: u64, posts: Vec<PostDetail>) -> Self {
        let offset = request.offset();
        let limit = request.limit();

        Self {
            total_posts,
            total_pages: total_posts.div_ceil(limit),
            current_page: request.page(),
            limit,
            posts,
            next_page: (offset.saturating_add(limit) < total_posts).then(|| request.page() + 1),
            previous_page: (offset > 0).then(|| request.page() - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn detail(
        id: i32,
        category: &str,
        title: &str,
        description: &str,
        content: &str,
    ) -> PostDetail {
        PostDetail {
            id,
            image: "https://example.com/cat.jpg".to_string(),
            category: category.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: Utc::now(),
            content: content.to_string(),
            status: "publish".to_string(),
            likes_count: 0,
        }
    }

    fn posts(n: usize) -> Vec<PostDetail> {
        (0..n)
            .map(|i| detail(i as i32 + 1, "Cat", "t", "d", "c"))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 6);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_page_and_limit_are_clamped() {
        assert_eq!(PageRequest::new(Some(0), None).page(), 1);
        assert_eq!(PageRequest::new(Some(-4), None).page(), 1);
        assert_eq!(PageRequest::new(None, Some(0)).limit(), 1);
        assert_eq!(PageRequest::new(None, Some(-10)).limit(), 1);
        assert_eq!(PageRequest::new(None, Some(500)).limit(), 100);
        assert_eq!(PageRequest::new(None, Some(100)).limit(), 100);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(Some(2), Some(6)).offset(), 6);
        assert_eq!(PageRequest::new(Some(3), Some(10)).offset(), 20);
    }

    #[test]
    fn test_huge_page_keeps_offset_in_sql_range() {
        for limit in [1, 6, 100] {
            let req = PageRequest::new(Some(i64::MAX), Some(limit));
            assert!(req.offset() <= i64::MAX as u64);
            assert!(req.page() > 1);
        }

        let req = PageRequest::new(Some(100_000_000_000_000_000), Some(100));
        assert!(req.offset() <= i64::MAX as u64);
    }

    #[test]
    fn test_huge_page_past_the_end() {
        let req = PageRequest::new(Some(i64::MAX), Some(1));
        let page = PostPage::assemble(req, 7, Vec::new());

        assert_eq!(page.total_pages, 7);
        assert_eq!(page.next_page, None);
        assert_eq!(page.previous_page, Some(req.page() - 1));
    }

    #[test]
    fn test_seven_posts_second_page() {
        let req = PageRequest::new(Some(2), Some(6));
        let page = PostPage::assemble(req, 7, posts(1));

        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.previous_page, Some(1));
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_first_page_has_next_only() {
        let req = PageRequest::new(Some(1), Some(6));
        let page = PostPage::assemble(req, 7, posts(6));

        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.previous_page, None);
    }

    #[test]
    fn test_navigation_matches_page_position() {
        for total in 0..30u64 {
            for limit in 1..8i64 {
                let total_pages = total.div_ceil(limit as u64);
                for page in 1..=(total_pages.max(1) as i64) {
                    let req = PageRequest::new(Some(page), Some(limit));
                    let result = PostPage::assemble(req, total, Vec::new());

                    assert_eq!(result.total_pages, total_pages);
                    assert_eq!(result.next_page.is_some(), (page as u64) < total_pages);
                    assert_eq!(result.previous_page.is_some(), page > 1);
                }
            }
        }
    }

    #[test]
    fn test_empty_result() {
        let page = PostPage::assemble(PageRequest::default(), 0, Vec::new());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.next_page, None);
        assert_eq!(page.previous_page, None);
    }

    #[test]
    fn test_empty_strings_are_not_filters() {
        let filter = PostFilter::new(Some(String::new()), Some(String::new()));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_keyword_matches_any_text_field() {
        let filter = PostFilter::new(None, Some("WHISKERS".to_string()));

        assert!(filter.matches(&detail(1, "Cat", "Whiskers up", "d", "c")));
        assert!(filter.matches(&detail(2, "Cat", "t", "about whiskers", "c")));
        assert!(filter.matches(&detail(3, "Cat", "t", "d", "long whiskers body")));
        assert!(!filter.matches(&detail(4, "Cat", "t", "d", "c")));
    }

    #[test]
    fn test_category_and_keyword_must_both_match() {
        let filter = PostFilter::new(Some("gen".to_string()), Some("cat".to_string()));

        assert!(filter.matches(&detail(1, "General", "Cat care", "d", "c")));
        assert!(!filter.matches(&detail(2, "Inspiration", "Cat care", "d", "c")));
        assert!(!filter.matches(&detail(3, "General", "Dogs", "d", "c")));
    }
}
