//! Static site content: services, articles, testimonials and contact details.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::PostId;

/// Hero banner shown at the top of a page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Banner {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A medical service offered by the clinic.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicalService {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// A news or blog article.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub summary: String,
    /// HTML body; sanitized before it reaches a template.
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author: String,
    pub category: String,
    pub published_on: NaiveDate,
}

impl BlogPost {
    /// Returns a copy of the post with its body stripped of unsafe markup.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            body: ammonia::clean(&self.body),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub hours: Vec<String>,
}

/// Copy shown on the About page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AboutSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Everything the marketing pages render, loaded once at start-up.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SiteContent {
    pub banner: Banner,
    #[serde(default)]
    pub about: AboutSection,
    #[serde(default)]
    pub services: Vec<MedicalService>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl SiteContent {
    /// Posts ordered newest first, optionally restricted to one category.
    pub fn posts_newest_first(&self, category: Option<&str>) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self
            .posts
            .iter()
            .filter(|post| category.is_none_or(|c| post.category.eq_ignore_ascii_case(c)))
            .collect();
        posts.sort_by(|a, b| {
            b.published_on
                .cmp(&a.published_on)
                .then_with(|| b.id.get().cmp(&a.id.get()))
        });
        posts
    }

    pub fn latest_posts(&self, limit: usize) -> Vec<&BlogPost> {
        let mut posts = self.posts_newest_first(None);
        posts.truncate(limit);
        posts
    }

    pub fn post(&self, id: PostId) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Distinct post categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for post in &self.posts {
            if !categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&post.category))
            {
                categories.push(post.category.as_str());
            }
        }
        categories
    }
}
