//! Login and registration workflows.
//!
//! Both flows validate the submitted form locally first; a form that fails
//! validation never reaches the API.

use crate::api::PortalApi;
use crate::domain::auth::{AuthSession, Credentials, Registration};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::services::ServiceResult;

/// Validates the login form and authenticates against the API.
pub async fn login<A>(api: &A, form: LoginForm) -> ServiceResult<AuthSession>
where
    A: PortalApi + ?Sized,
{
    let credentials = Credentials::try_from(form)?;

    let session = api.login(&credentials).await.map_err(|err| {
        log::warn!("Login failed for {}: {err}", credentials.email);
        err
    })?;

    log::info!("User {} signed in as {}", credentials.email, session.role);
    Ok(session)
}

/// Validates the registration form and creates the account through the API.
pub async fn register<A>(api: &A, form: RegisterForm) -> ServiceResult<()>
where
    A: PortalApi + ?Sized,
{
    let registration = Registration::try_from(form)?;

    api.register(&registration).await.map_err(|err| {
        log::warn!("Registration failed for {}: {err}", registration.email);
        err
    })?;

    log::info!(
        "Registered {} account for {}",
        registration.role,
        registration.email
    );
    Ok(())
}
