use serde::Serialize;

use crate::domain::content::BlogPost;
use crate::pagination::Paginated;

/// Query parameters accepted by the blog listing.
#[derive(Debug, Default)]
pub struct BlogQuery {
    pub page: Option<usize>,
    /// Optional category filter.
    pub category: Option<String>,
}

/// Data required to render the blog listing.
#[derive(Debug, Serialize)]
pub struct BlogPageData {
    pub posts: Paginated<BlogPost>,
    pub categories: Vec<String>,
    /// Category filter echoed back to the template when present.
    pub category: Option<String>,
}

/// Data required to render a single article.
#[derive(Debug, Serialize)]
pub struct PostPageData {
    pub post: BlogPost,
    pub recent_posts: Vec<BlogPost>,
}
