use actix_web::{Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use url::form_urlencoded::byte_serialize;

use crate::domain::content::SiteContent;
use crate::dto::blog::BlogQuery;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, parse_page, redirect, render_template};
use crate::services::blog as blog_service;
use crate::session::PortalSession;

#[derive(Deserialize)]
struct BlogQueryParams {
    page: Option<String>,
    category: Option<String>,
}

#[get("/blog")]
pub async fn show_blog(
    params: web::Query<BlogQueryParams>,
    session: PortalSession,
    content: web::Data<SiteContent>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = BlogQuery {
        page: parse_page(params.page.as_deref()),
        category: params.category,
    };

    let data = blog_service::load_blog_page(&content, query, server_config.items_per_page);

    let mut context = base_context(&flash_messages, &session.context(), "blog");
    context.insert("posts", &data.posts);
    context.insert("categories", &data.categories);
    let category = data.category.unwrap_or_default();
    let pager_query = if category.is_empty() {
        String::new()
    } else {
        format!("&category={}", byte_serialize(category.as_bytes()).collect::<String>())
    };
    context.insert("category", &category);
    context.insert("pager_query", &pager_query);

    render_template(&tera, "blog/index.html", &context)
}

#[get("/blog/{post_id}")]
pub async fn show_post(
    post_id: web::Path<i32>,
    session: PortalSession,
    content: web::Data<SiteContent>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match blog_service::load_post(&content, post_id.into_inner()) {
        Ok(data) => data,
        Err(_) => {
            FlashMessage::error("Article not found.").send();
            return redirect("/blog");
        }
    };

    let mut context = base_context(&flash_messages, &session.context(), "blog");
    context.insert("post", &data.post);
    context.insert("recent_posts", &data.recent_posts);

    render_template(&tera, "blog/post.html", &context)
}
