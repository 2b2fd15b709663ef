use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::content::SiteContent;
use crate::routes::{base_context, render_template};
use crate::services::pages as pages_service;
use crate::session::PortalSession;

#[get("/")]
pub async fn show_index(
    session: PortalSession,
    content: web::Data<SiteContent>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages_service::load_home_page(&content);

    let mut context = base_context(&flash_messages, &session.context(), "index");
    context.insert("banner", &data.banner);
    context.insert("services", &data.services);
    context.insert("testimonials", &data.testimonials);
    context.insert("latest_posts", &data.latest_posts);

    render_template(&tera, "main/index.html", &context)
}

#[get("/about")]
pub async fn show_about(
    session: PortalSession,
    content: web::Data<SiteContent>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages_service::load_about_page(&content);

    let mut context = base_context(&flash_messages, &session.context(), "about");
    context.insert("about", &data.about);
    context.insert("testimonials", &data.testimonials);

    render_template(&tera, "main/about.html", &context)
}

#[get("/services")]
pub async fn show_services(
    session: PortalSession,
    content: web::Data<SiteContent>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages_service::load_services_page(&content);

    let mut context = base_context(&flash_messages, &session.context(), "services");
    context.insert("services", &data.services);

    render_template(&tera, "main/services.html", &context)
}

#[get("/contact")]
pub async fn show_contact(
    session: PortalSession,
    content: web::Data<SiteContent>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = pages_service::load_contact_page(&content);

    let mut context = base_context(&flash_messages, &session.context(), "contact");
    context.insert("contact", &data.contact);

    render_template(&tera, "main/contact.html", &context)
}
