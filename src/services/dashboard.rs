//! Access rules for the role dashboards.

use crate::domain::types::UserRole;
use crate::services::{ServiceError, ServiceResult};

/// Checks that the visitor is signed in with exactly the `required` role.
pub fn authorize_dashboard(role: Option<UserRole>, required: UserRole) -> ServiceResult<()> {
    match role {
        None => Err(ServiceError::Unauthenticated),
        Some(role) if role == required => Ok(()),
        Some(_) => Err(ServiceError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitors_must_sign_in() {
        assert!(matches!(
            authorize_dashboard(None, UserRole::Patient),
            Err(ServiceError::Unauthenticated)
        ));
    }

    #[test]
    fn roles_only_see_their_own_dashboard() {
        assert!(authorize_dashboard(Some(UserRole::Admin), UserRole::Admin).is_ok());
        assert!(matches!(
            authorize_dashboard(Some(UserRole::Patient), UserRole::Doctor),
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            authorize_dashboard(Some(UserRole::Doctor), UserRole::Admin),
            Err(ServiceError::Unauthorized)
        ));
    }
}
