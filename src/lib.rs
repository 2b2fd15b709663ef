#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod pagination;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::HttpPortalApi;
    use crate::models::config::{ServerConfig, load_site_content};
    use crate::routes::auth::{login, logout, register, show_login, show_register};
    use crate::routes::blog::{show_blog, show_post};
    use crate::routes::dashboard::{admin_dashboard, doctor_dashboard, patient_dashboard};
    use crate::routes::doctors::show_doctors;
    use crate::routes::pages::{show_about, show_contact, show_index, show_services};
    use crate::session::InFlightRegistry;

    /// Minimum secret length accepted by the cookie signing key.
    const MIN_SECRET_LEN: usize = 64;

    /// Registers every portal route on the given service config.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(show_index)
            .service(show_about)
            .service(show_services)
            .service(show_contact)
            .service(show_doctors)
            .service(show_blog)
            .service(show_post)
            .service(show_login)
            .service(login)
            .service(show_register)
            .service(register)
            .service(logout)
            .service(admin_dashboard)
            .service(doctor_dashboard)
            .service(patient_dashboard);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        if server_config.secret.len() < MIN_SECRET_LEN {
            return Err(std::io::Error::other(format!(
                "Session secret must be at least {MIN_SECRET_LEN} bytes long"
            )));
        }

        let content = load_site_content(&server_config.content_path)
            .map_err(|e| std::io::Error::other(format!("Failed to load site content: {e}")))?;
        let content = web::Data::new(content);

        let api = HttpPortalApi::new(
            &server_config.api_url,
            server_config.api_timeout(),
            server_config.query_cache_ttl(),
        )
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
        let api = web::Data::new(api);

        let in_flight = web::Data::new(InFlightRegistry::new());

        // Keys and stores for sessions and flash messages.
        let secret_key = Key::from(server_config.secret.as_bytes());

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Starting portal on {}:{} against API {}",
            bind_address.0,
            bind_address.1,
            server_config.api_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(
                            (!server_config.domain.is_empty())
                                .then(|| format!(".{}", server_config.domain)),
                        )
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(content.clone())
                .app_data(api.clone())
                .app_data(in_flight.clone())
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
