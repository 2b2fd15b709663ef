use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use medcenter_portal::api::HttpPortalApi;
use medcenter_portal::configure;
use medcenter_portal::models::config::{ServerConfig, load_site_content};
use medcenter_portal::session::InFlightRegistry;

pub fn server_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        domain: String::new(),
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        content_path: "config/content.yaml".to_string(),
        secret: "x".repeat(64),
        api_url: api_url.to_string(),
        api_timeout_secs: 5,
        query_cache_ttl_secs: 0,
        items_per_page: 6,
    }
}

/// Portal application wired like production, talking to `api_url`.
pub fn portal_app(
    api_url: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let config = server_config(api_url);
    let key = Key::from(config.secret.as_bytes());

    let tera = Tera::new(&config.templates_dir).expect("templates parse");
    let content = load_site_content(&config.content_path).expect("content parses");
    let api = HttpPortalApi::new(
        &config.api_url,
        config.api_timeout(),
        Duration::from_secs(config.query_cache_ttl_secs),
    )
    .expect("api client");

    let message_store = CookieMessageStore::builder(key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    App::new()
        .wrap(message_framework)
        .wrap(
            SessionMiddleware::builder(CookieSessionStore::default(), key)
                .cookie_secure(false)
                .build(),
        )
        .configure(configure)
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(content))
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(InFlightRegistry::new()))
        .app_data(web::Data::new(config))
}

/// Owned copies of the cookies a browser would keep from a response.
///
/// Removal cookies (`Max-Age=0`) are dropped, as a browser would.
pub fn cookies_of<B>(resp: &ServiceResponse<B>) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .filter(|cookie| !cookie.max_age().is_some_and(|age| age.is_zero()))
        .map(|cookie| cookie.into_owned())
        .collect()
}
