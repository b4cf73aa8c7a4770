//! Search, sort and pagination over a post collection.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

use super::post::Post;

pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Post fields that can be used as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Slug,
    Summary,
    Content,
    Status,
    AuthorId,
    CreatedAt,
    UpdatedAt,
    Views,
    Likes,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "id" => SortField::Id,
            "title" => SortField::Title,
            "slug" => SortField::Slug,
            "summary" => SortField::Summary,
            "content" => SortField::Content,
            "status" => SortField::Status,
            "author_id" => SortField::AuthorId,
            "created_at" => SortField::CreatedAt,
            "updated_at" => SortField::UpdatedAt,
            "views" => SortField::Views,
            "likes" => SortField::Likes,
            _ => return Err(()),
        };
        Ok(field)
    }
}

impl SortField {
    fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Slug => a.slug.cmp(&b.slug),
            SortField::Summary => a.summary.cmp(&b.summary),
            SortField::Content => a.content.cmp(&b.content),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::AuthorId => a.author_id.cmp(&b.author_id),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Views => a.views.cmp(&b.views),
            SortField::Likes => a.likes.cmp(&b.likes),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"desc"` sorts descending; anything else ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(order) if order.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// A normalized list request.
#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of a filtered and sorted post listing.
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl PostQuery {
    /// Build a query from raw request parameters.
    ///
    /// Page and limit are clamped to at least 1 and the limit to `max_limit`.
    /// Unknown sort fields are ignored.
    pub fn new(
        search: Option<String>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        page: Option<usize>,
        limit: Option<usize>,
        max_limit: usize,
    ) -> Self {
        let sort_by = sort_by.and_then(|field| {
            field.parse().ok().or_else(|| {
                tracing::debug!(sort_by = field, "Ignoring unknown sort field");
                None
            })
        });
        Self {
            search: search.filter(|s| !s.is_empty()),
            sort_by,
            sort_order: SortOrder::parse(sort_order),
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, max_limit.max(1)),
        }
    }

    /// Filter, sort and slice the collection.
    pub fn apply(&self, mut posts: Vec<Post>) -> PostPage {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            posts.retain(|post| post.matches(&needle));
        }

        if let Some(field) = self.sort_by {
            match self.sort_order {
                SortOrder::Asc => posts.sort_by(|a, b| field.compare(a, b)),
                SortOrder::Desc => posts.sort_by(|a, b| field.compare(b, a)),
            }
        }

        let total = posts.len();
        let start = (self.page - 1).saturating_mul(self.limit);
        let posts = posts.into_iter().skip(start).take(self.limit).collect();

        PostPage {
            posts,
            total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, views: u64, categories: &[&str]) -> Post {
        let mut post = Post::new(
            title.to_string(),
            format!("{title} body"),
            format!("{title} summary"),
            "author".to_string(),
            categories.iter().map(|c| c.to_string()).collect(),
        );
        post.views = views;
        post
    }

    fn titles(page: &PostPage) -> Vec<&str> {
        page.posts.iter().map(|p| p.title.as_str()).collect()
    }

    fn collection() -> Vec<Post> {
        vec![
            post("Bravo", 5, &["Rust"]),
            post("Alpha", 9, &["Go"]),
            post("Delta", 1, &["rust", "web"]),
            post("Charlie", 3, &["Career"]),
        ]
    }

    #[test]
    fn test_defaults() {
        let query = PostQuery::new(None, None, None, None, None, 100);
        assert_eq!(query, PostQuery::default());
    }

    #[test]
    fn test_search_matches_categories_case_insensitively() {
        let query = PostQuery::new(Some("RUST".into()), None, None, None, None, 100);
        let page = query.apply(collection());
        assert_eq!(page.total, 2);
        assert_eq!(titles(&page), vec!["Bravo", "Delta"]);
    }

    #[test]
    fn test_sort_by_title_and_views() {
        let asc = PostQuery::new(None, Some("title"), None, None, None, 100).apply(collection());
        assert_eq!(titles(&asc), vec!["Alpha", "Bravo", "Charlie", "Delta"]);

        let desc =
            PostQuery::new(None, Some("views"), Some("desc"), None, None, 100).apply(collection());
        assert_eq!(titles(&desc), vec!["Alpha", "Bravo", "Charlie", "Delta"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_stored_order() {
        let page = PostQuery::new(None, Some("rating"), None, None, None, 100).apply(collection());
        assert_eq!(titles(&page), vec!["Bravo", "Alpha", "Delta", "Charlie"]);
    }

    #[test]
    fn test_pagination_slices_sorted_set() {
        let query = PostQuery::new(None, Some("title"), None, Some(2), Some(3), 100);
        let page = query.apply(collection());
        assert_eq!(page.total, 4);
        assert_eq!((page.page, page.limit), (2, 3));
        assert_eq!(titles(&page), vec!["Delta"]);

        let beyond = PostQuery::new(None, None, None, Some(9), Some(3), 100).apply(collection());
        assert!(beyond.posts.is_empty());
        assert_eq!(beyond.total, 4);
    }

    #[test]
    fn test_page_and_limit_are_clamped() {
        let query = PostQuery::new(None, None, None, Some(0), Some(0), 100);
        assert_eq!((query.page, query.limit), (1, 1));

        let query = PostQuery::new(None, None, None, None, Some(500), 50);
        assert_eq!(query.limit, 50);
    }
}
