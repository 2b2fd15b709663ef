//! Explicit session context for the signed-in user.
//!
//! Handlers never read the cookie session directly: they extract a
//! [`PortalSession`] which owns the `auth_token` / `user_role` keys and is
//! the only place that writes them.

use std::future::{Ready, ready};

use actix_session::{Session, SessionExt, SessionInsertError};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use dashmap::DashSet;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::auth::AuthSession;
use crate::domain::types::UserRole;

/// Session key holding the opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Session key holding the role tag.
pub const USER_ROLE_KEY: &str = "user_role";
/// Session key identifying the browser for the re-submission guard.
pub const SUBMISSION_ID_KEY: &str = "submission_id";

/// What templates get to know about the current visitor.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SessionContext {
    pub authenticated: bool,
    pub role: Option<UserRole>,
    pub dashboard_url: Option<&'static str>,
}

/// Request-scoped view of the visitor's session.
pub struct PortalSession {
    session: Session,
}

impl PortalSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn auth_token(&self) -> Option<String> {
        match self.session.get::<String>(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("Failed to read auth token from session: {e}");
                None
            }
        }
    }

    /// Role of the signed-in user, `None` for anonymous visitors.
    pub fn role(&self) -> Option<UserRole> {
        self.auth_token()?;
        match self.session.get::<String>(USER_ROLE_KEY) {
            Ok(role) => Some(role.map(UserRole::from).unwrap_or_default()),
            Err(e) => {
                log::warn!("Failed to read user role from session: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token().is_some()
    }

    pub fn context(&self) -> SessionContext {
        let role = self.role();
        SessionContext {
            authenticated: role.is_some(),
            role,
            dashboard_url: role.map(UserRole::dashboard_path),
        }
    }

    /// Stores the token and role returned by a successful login.
    pub fn sign_in(&self, auth: &AuthSession) -> Result<(), SessionInsertError> {
        self.session.renew();
        self.session.insert(AUTH_TOKEN_KEY, &auth.token)?;
        self.session.insert(USER_ROLE_KEY, auth.role.as_str())?;
        Ok(())
    }

    pub fn sign_out(&self) {
        self.session.remove(AUTH_TOKEN_KEY);
        self.session.remove(USER_ROLE_KEY);
        self.session.renew();
    }

    /// Stable identifier of this browser session, created on first use.
    pub fn submission_id(&self) -> String {
        if let Ok(Some(id)) = self.session.get::<String>(SUBMISSION_ID_KEY) {
            return id;
        }
        let id = Uuid::new_v4().to_string();
        if let Err(e) = self.session.insert(SUBMISSION_ID_KEY, &id) {
            log::warn!("Failed to store submission id: {e}");
        }
        id
    }
}

impl FromRequest for PortalSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(PortalSession::new(req.get_session())))
    }
}

/// Tracks credential submissions that are still waiting on the API.
#[derive(Default)]
pub struct InFlightRegistry {
    active: DashSet<String>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as in flight, or returns `None` if it already is.
    ///
    /// The returned ticket releases the key when dropped, including when the
    /// handler future is dropped because the client went away.
    pub fn try_acquire(&self, key: impl Into<String>) -> Option<InFlightTicket<'_>> {
        let key = key.into();
        if self.active.insert(key.clone()) {
            Some(InFlightTicket {
                registry: self,
                key,
            })
        } else {
            None
        }
    }
}

pub struct InFlightTicket<'a> {
    registry: &'a InFlightRegistry,
    key: String,
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        self.registry.active.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_until_release() {
        let registry = InFlightRegistry::new();

        let ticket = registry.try_acquire("browser-1");
        assert!(ticket.is_some());
        assert!(registry.try_acquire("browser-1").is_none());
        assert!(registry.try_acquire("browser-2").is_some());

        drop(ticket);
        assert!(registry.try_acquire("browser-1").is_some());
    }

    #[actix_web::test]
    async fn cancelled_submission_releases_ticket() {
        let registry = InFlightRegistry::new();
        let submission = async {
            let _ticket = registry.try_acquire("browser-1");
            std::future::pending::<()>().await;
        };

        let result =
            actix_web::rt::time::timeout(std::time::Duration::from_millis(10), submission).await;

        assert!(result.is_err());
        assert!(registry.try_acquire("browser-1").is_some());
    }
}
