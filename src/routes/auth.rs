use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::HttpPortalApi;
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth as auth_service;
use crate::session::{InFlightRegistry, PortalSession};

const LOGIN_FAILED: &str = "Login failed. Please try again.";
const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[get("/login")]
pub async fn show_login(
    session: PortalSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Some(role) = session.role() {
        return redirect(role.dashboard_path());
    }
    // Issue the re-submission key before the first POST can race.
    session.submission_id();

    let context = base_context(&flash_messages, &session.context(), "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    session: PortalSession,
    api: web::Data<HttpPortalApi>,
    in_flight: web::Data<InFlightRegistry>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let Some(_ticket) = in_flight.try_acquire(session.submission_id()) else {
        FlashMessage::warning(ServiceError::InFlight.user_message(LOGIN_FAILED)).send();
        return redirect("/login");
    };

    match auth_service::login(api.get_ref(), form).await {
        Ok(auth) => {
            if let Err(e) = session.sign_in(&auth) {
                log::error!("Failed to store session: {e}");
                FlashMessage::error(LOGIN_FAILED).send();
                return redirect("/login");
            }
            redirect(auth.role.dashboard_path())
        }
        Err(err) => {
            FlashMessage::error(err.user_message(LOGIN_FAILED)).send();
            redirect("/login")
        }
    }
}

#[get("/register")]
pub async fn show_register(
    session: PortalSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    session.submission_id();

    let context = base_context(&flash_messages, &session.context(), "register");
    render_template(&tera, "auth/register.html", &context)
}

#[post("/register")]
pub async fn register(
    session: PortalSession,
    api: web::Data<HttpPortalApi>,
    in_flight: web::Data<InFlightRegistry>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    let Some(_ticket) = in_flight.try_acquire(session.submission_id()) else {
        FlashMessage::warning(ServiceError::InFlight.user_message(REGISTRATION_FAILED)).send();
        return redirect("/register");
    };

    match auth_service::register(api.get_ref(), form).await {
        Ok(()) => {
            FlashMessage::success("Account created. You can sign in now.").send();
            redirect("/login")
        }
        Err(err) => {
            FlashMessage::error(err.user_message(REGISTRATION_FAILED)).send();
            redirect("/register")
        }
    }
}

#[post("/logout")]
pub async fn logout(session: PortalSession) -> impl Responder {
    session.sign_out();
    redirect("/")
}
