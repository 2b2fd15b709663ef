use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::api::HttpPortalApi;
use crate::dto::doctors::DoctorsQuery;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, parse_page, render_template};
use crate::services::doctors as doctors_service;
use crate::session::PortalSession;

#[derive(Deserialize)]
struct DoctorsQueryParams {
    page: Option<String>,
}

#[get("/doctors")]
pub async fn show_doctors(
    params: web::Query<DoctorsQueryParams>,
    session: PortalSession,
    api: web::Data<HttpPortalApi>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = DoctorsQuery {
        page: parse_page(params.page.as_deref()),
    };

    let mut context = base_context(&flash_messages, &session.context(), "doctors");

    // A failed fetch renders the page with an inline error panel.
    match doctors_service::load_doctors_page(api.get_ref(), query, server_config.items_per_page)
        .await
    {
        Ok(data) => {
            context.insert("doctors", &data.doctors);
            context.insert("load_error", &false);
        }
        Err(err) => {
            log::error!("Failed to render doctors listing: {err}");
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "doctors/index.html", &context)
}
