//! Services backing the blog listing and article pages.

use crate::domain::content::SiteContent;
use crate::domain::types::PostId;
use crate::dto::blog::{BlogPageData, BlogQuery, PostPageData};
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};

const RECENT_POSTS: usize = 3;

/// Loads one page of articles, newest first.
pub fn load_blog_page(content: &SiteContent, query: BlogQuery, per_page: usize) -> BlogPageData {
    let category = query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let posts = content
        .posts_newest_first(category.as_deref())
        .into_iter()
        .map(|post| post.sanitized())
        .collect();

    BlogPageData {
        posts: Paginated::from_items(posts, query.page.unwrap_or(1), per_page),
        categories: content.categories().into_iter().map(str::to_string).collect(),
        category,
    }
}

/// Loads a single article together with a few other recent ones.
pub fn load_post(content: &SiteContent, post_id: i32) -> ServiceResult<PostPageData> {
    let post_id = PostId::new(post_id).map_err(|_| ServiceError::NotFound)?;
    let post = content.post(post_id).ok_or(ServiceError::NotFound)?;

    let recent_posts = content
        .posts_newest_first(None)
        .into_iter()
        .filter(|p| p.id != post_id)
        .take(RECENT_POSTS)
        .cloned()
        .collect();

    Ok(PostPageData {
        post: post.sanitized(),
        recent_posts,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::content::BlogPost;

    fn content(count: i32) -> SiteContent {
        let posts = (1..=count)
            .map(|id| BlogPost {
                id: PostId::new(id).unwrap(),
                title: format!("Post #{id}"),
                summary: format!("Summary #{id}"),
                body: format!("<p>Body #{id}</p><script>x()</script>"),
                image_url: None,
                author: "Editorial".to_string(),
                category: if id % 2 == 0 { "Health" } else { "News" }.to_string(),
                published_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Days::new(id as u64),
            })
            .collect();
        SiteContent {
            posts,
            ..SiteContent::default()
        }
    }

    #[test]
    fn blog_page_is_paginated_newest_first() {
        let data = load_blog_page(
            &content(15),
            BlogQuery {
                page: Some(3),
                category: None,
            },
            5,
        );

        assert_eq!(data.posts.page, 3);
        assert_eq!((data.posts.start, data.posts.end), (11, 15));
        let ids: Vec<i32> = data.posts.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
        assert_eq!(data.categories, vec!["News", "Health"]);
    }

    #[test]
    fn blog_page_filters_by_category() {
        let data = load_blog_page(
            &content(10),
            BlogQuery {
                page: None,
                category: Some(" health ".to_string()),
            },
            6,
        );

        assert_eq!(data.category.as_deref(), Some("health"));
        assert_eq!(data.posts.total_items, 5);
        assert!(data.posts.items.iter().all(|p| p.category == "Health"));
    }

    #[test]
    fn blog_page_clamps_page_beyond_end() {
        let data = load_blog_page(
            &content(4),
            BlogQuery {
                page: Some(42),
                category: None,
            },
            3,
        );
        assert_eq!(data.posts.page, 2);
        assert_eq!(data.posts.items.len(), 1);
    }

    #[test]
    fn bodies_are_sanitized() {
        let data = load_post(&content(2), 2).unwrap();
        assert_eq!(data.post.body, "<p>Body #2</p>");
        assert_eq!(data.recent_posts.len(), 1);
        assert_eq!(data.recent_posts[0].id.get(), 1);
    }

    #[test]
    fn missing_post_is_not_found() {
        assert!(matches!(
            load_post(&content(2), 9),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            load_post(&content(2), 0),
            Err(ServiceError::NotFound)
        ));
    }
}
