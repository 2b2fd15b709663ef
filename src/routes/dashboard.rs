use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::UserRole;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::dashboard::authorize_dashboard;
use crate::session::PortalSession;

fn show_dashboard(
    required: UserRole,
    session: &PortalSession,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let role = session.role();

    match authorize_dashboard(role, required) {
        Ok(()) => {}
        Err(ServiceError::Unauthenticated) => {
            FlashMessage::info("Please sign in to continue.").send();
            return redirect("/login");
        }
        Err(_) => {
            let own = role.unwrap_or_default();
            return redirect(own.dashboard_path());
        }
    }

    let mut context = base_context(flash_messages, &session.context(), "dashboard");
    context.insert("role", &required);
    render_template(tera, &format!("dashboard/{}.html", required.as_str()), &context)
}

#[get("/admin")]
pub async fn admin_dashboard(
    session: PortalSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_dashboard(UserRole::Admin, &session, &flash_messages, &tera)
}

#[get("/doctor")]
pub async fn doctor_dashboard(
    session: PortalSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_dashboard(UserRole::Doctor, &session, &flash_messages, &tera)
}

#[get("/patient")]
pub async fn patient_dashboard(
    session: PortalSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_dashboard(UserRole::Patient, &session, &flash_messages, &tera)
}
